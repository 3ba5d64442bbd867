//! Engine-wide constants.
//!
//! Centralizes magic numbers and layout values. Every value here is the
//! default for the matching field in [`crate::settings::TimelineSettings`].

// ============================================================================
// Layout Constants
// ============================================================================

/// Horizontal padding on each side of the content region, in pixels
pub const TIMELINE_PADDING: f64 = 20.0;

/// Height of one lane row in pixels
pub const LANE_HEIGHT: f64 = 80.0;

/// Height of the header band above the first lane, in pixels
pub const HEADER_HEIGHT: f64 = 90.0;

/// Gap between a lane's edge and the item drawn inside it
pub const ITEM_VERTICAL_PADDING: f64 = 5.0;

/// Floor width so zero-duration items stay clickable
pub const ITEM_MIN_WIDTH: f64 = 30.0;

// ============================================================================
// Interaction
// ============================================================================

/// Distance of the drawn drag handle from the item edge
pub const DRAG_HANDLE_EDGE_PADDING: f64 = 5.0;

/// Tolerance around the drag handle that still starts a resize
pub const DRAG_HANDLE_INTERACTION_ZONE: f64 = 15.0;

// ============================================================================
// Zoom
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.2;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom step for the zoom buttons
pub const ZOOM_STEP_BUTTON: f64 = 0.2;

/// Zoom step for one wheel notch towards the user
pub const ZOOM_STEP_WHEEL_OUT: f64 = 0.05;

/// Zoom step for one wheel notch away from the user
pub const ZOOM_STEP_WHEEL_IN: f64 = 0.1;

// ============================================================================
// Dates
// ============================================================================

/// Fraction of the item span added as padding on each side of the domain
pub const DATE_PADDING_FACTOR: f64 = 0.1;

/// Above this many months the header thins out its markers
pub const MAX_MONTH_MARKERS: i32 = 24;

/// Storage format for dates crossing the boundary
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";
