//! Pointer input handling for the timeline surface.
//!
//! This module turns raw pointer events into hover feedback and item
//! mutations: moving an item, resizing either end, and renaming it.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current interaction mode. A drag session freezes the item's
//! dates at pointer down, so every update is computed from the same anchor
//! no matter how many intermediate mutations were applied.
//!
//! ## Modules
//!
//! - `state` - Interaction state enum and drag/edit sessions
//! - `gesture` - Edge-zone classification and cursor hints
//! - `engine` - The engine itself, feedback accessors and inline rename
//! - `pointer_down` - Opening drag and edit sessions
//! - `drag` - Pointer move handling (hover, live drag updates)
//! - `pointer_up` - Closing the drag session on release or leave
//! - `mutation` - Item replacements emitted to the host

mod drag;
mod engine;
mod gesture;
mod mutation;
mod pointer_down;
mod pointer_up;
mod state;

pub use engine::InteractionEngine;
pub use gesture::{CursorHint, EdgeZones, GestureKind};
pub use mutation::Mutation;
pub use state::{DragSession, EditSession, InteractionState};
