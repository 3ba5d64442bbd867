//! Interaction state machine - a single explicit state for all pointer input.
//!
//! ## State Transitions
//!
//! ```text
//! Idle/Hovering -> Hovering    (pointer move over a rectangle)
//! Hovering      -> Idle        (pointer move off every rectangle, pointer leave)
//! Idle/Hovering -> Dragging    (pointer down on a rectangle)
//! Dragging      -> Idle        (pointer up or pointer leave - session closes)
//! Idle/Hovering -> Editing     (double activation on a rectangle)
//! Editing       -> Idle        (confirm or cancel)
//! ```
//!
//! Only one drag session exists at a time; a pointer down while dragging or
//! editing is ignored.

use crate::input::gesture::{CursorHint, GestureKind};
use crate::types::{ItemId, Rectangle};
use chrono::NaiveDate;

/// An in-progress pointer edit of one item's dates.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub item_id: ItemId,
    pub kind: GestureKind,
    /// Item start when the session opened; never updated during the gesture
    pub anchor_start: NaiveDate,
    /// Item end when the session opened; never updated during the gesture
    pub anchor_end: NaiveDate,
    /// Distance from the grabbed edge to the pointer at session open
    pub pointer_anchor_offset: f64,
    /// Last valid proposal, shown as drag feedback
    pub proposal: Option<(NaiveDate, NaiveDate)>,
}

impl DragSession {
    /// Length of the item when the gesture began
    pub fn anchor_duration_days(&self) -> i64 {
        (self.anchor_end - self.anchor_start).num_days()
    }
}

/// An in-progress rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub item_id: ItemId,
    pub original_name: String,
    pub draft: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No active interaction
    #[default]
    Idle,

    /// Pointer over a rectangle, no button held
    Hovering {
        rect: Rectangle,
        cursor: CursorHint,
    },

    /// A move or resize gesture is in progress
    Dragging(DragSession),

    /// Inline rename; hit-testing and gestures are suppressed
    Editing(EditSession),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Get the drag session, if dragging
    pub fn drag_session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        match self {
            Self::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Get the item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<ItemId> {
        self.drag_session().map(|session| session.item_id)
    }

    pub fn hovered_item_id(&self) -> Option<ItemId> {
        match self {
            Self::Hovering { rect, .. } => Some(rect.item_id),
            _ => None,
        }
    }

    pub fn editing_item_id(&self) -> Option<ItemId> {
        self.edit_session().map(|session| session.item_id)
    }

    /// Cursor the host should show for this state
    pub fn cursor(&self) -> CursorHint {
        match self {
            Self::Hovering { cursor, .. } => *cursor,
            Self::Dragging(session) => CursorHint::from(session.kind),
            Self::Idle | Self::Editing(_) => CursorHint::Default,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
