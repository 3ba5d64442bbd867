//! Gesture classification on pointer down.
//!
//! The edge zones are wider than the drawn handles, so a slightly imprecise
//! press near an edge still resizes instead of moving.

use crate::settings::TimelineSettings;
use crate::types::Rectangle;
use serde::Serialize;

/// What a drag on an item changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// Shift both dates, keeping the duration
    Move,
    /// Change the start date
    ResizeStart,
    /// Change the end date
    ResizeEnd,
}

/// Cursor the host should display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    ResizeWest,
    ResizeEast,
}

impl CursorHint {
    /// CSS cursor name
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::ResizeWest => "w-resize",
            Self::ResizeEast => "e-resize",
        }
    }
}

impl From<GestureKind> for CursorHint {
    fn from(kind: GestureKind) -> Self {
        match kind {
            GestureKind::Move => Self::Move,
            GestureKind::ResizeStart => Self::ResizeWest,
            GestureKind::ResizeEnd => Self::ResizeEast,
        }
    }
}

/// Edge zone geometry taken from the settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeZones {
    /// Distance of the drawn handle from the edge
    pub handle_padding: f64,
    /// Tolerance on either side of the handle
    pub interaction_zone: f64,
}

impl Default for EdgeZones {
    fn default() -> Self {
        Self::from(&TimelineSettings::default())
    }
}

impl From<&TimelineSettings> for EdgeZones {
    fn from(settings: &TimelineSettings) -> Self {
        Self {
            handle_padding: settings.edge_handle_padding,
            interaction_zone: settings.edge_interaction_zone,
        }
    }
}

impl EdgeZones {
    /// Classify a press at `x` on `rect`. The start edge wins when both
    /// zones overlap on a narrow rectangle.
    pub fn classify(&self, rect: &Rectangle, x: f64) -> GestureKind {
        let start_handle = rect.x + self.handle_padding;
        let end_handle = rect.right() - self.handle_padding;

        if (x - start_handle).abs() <= self.interaction_zone {
            GestureKind::ResizeStart
        } else if (x - end_handle).abs() <= self.interaction_zone {
            GestureKind::ResizeEnd
        } else {
            GestureKind::Move
        }
    }

    pub fn cursor_for(&self, rect: &Rectangle, x: f64) -> CursorHint {
        CursorHint::from(self.classify(rect, x))
    }
}
