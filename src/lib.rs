//! Lane packing and pointer interaction for date-ranged timeline items.
//!
//! ## Module Organization
//!
//! - `lanes` - Greedy partitioning of items into non-overlapping lanes
//! - `coords` - Date to pixel mapping and domain derivation
//! - `geometry` - Item rectangles within lane rows
//! - `layout` - A complete layout pass (`Frame`) with hit-testing
//! - `input` - The pointer interaction engine
//! - `timeline` - Host facade tying the above together
//!
//! Supporting modules cover dates, settings, item ingestion, zoom, the
//! header band, and performance monitoring.

pub mod constants;
pub mod coords;
pub mod dates;
pub mod error;
pub mod geometry;
pub mod header;
pub mod input;
pub mod items;
pub mod lanes;
pub mod layout;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod summary;
pub mod timeline;
pub mod types;
pub mod zoom;

pub use error::{TimelineError, TimelineResult};
pub use input::{CursorHint, GestureKind, InteractionEngine, InteractionState, Mutation};
pub use layout::Frame;
pub use settings::TimelineSettings;
pub use timeline::Timeline;
pub use types::{Domain, Item, ItemId, Lane, Point, Rectangle};
pub use zoom::{ZoomLevel, ZoomPolicy};
