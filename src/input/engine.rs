//! The interaction engine: owns the state machine and exposes what the host
//! needs to render feedback (cursor, hover summary, drag preview).
//!
//! Pointer handlers live in `pointer_down`, `drag` and `pointer_up`. Each
//! takes the current [`Frame`](crate::layout::Frame) and item list by
//! reference; the engine never holds on to either.

use crate::input::gesture::{CursorHint, EdgeZones};
use crate::input::mutation::Mutation;
use crate::input::state::{EditSession, InteractionState};
use crate::settings::TimelineSettings;
use crate::summary::{DragPreview, ItemSummary};
use crate::types::{Item, ItemId};
use tracing::debug;

#[derive(Debug, Default)]
pub struct InteractionEngine {
    pub(crate) state: InteractionState,
    pub(crate) zones: EdgeZones,
}

impl InteractionEngine {
    pub fn new(settings: &TimelineSettings) -> Self {
        Self {
            state: InteractionState::Idle,
            zones: EdgeZones::from(settings),
        }
    }

    /// Pick up changed edge-zone settings
    pub fn reconfigure(&mut self, settings: &TimelineSettings) {
        self.zones = EdgeZones::from(settings);
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn cursor(&self) -> CursorHint {
        self.state.cursor()
    }

    /// Drop any hover, drag or edit in progress without emitting anything
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Summary of the hovered item, looked up in the current item list
    pub fn hover_summary(&self, items: &[Item]) -> Option<ItemSummary> {
        let id = self.state.hovered_item_id()?;
        find_item(items, id).map(ItemSummary::from)
    }

    /// Last valid proposal of the active drag
    pub fn drag_preview(&self) -> Option<DragPreview> {
        let session = self.state.drag_session()?;
        let (start, end) = session.proposal?;
        Some(DragPreview {
            item_id: session.item_id,
            gesture: session.kind,
            start,
            end,
        })
    }

    // ========================================================================
    // Inline rename
    // ========================================================================

    pub fn edit_draft(&self) -> Option<&str> {
        self.state.edit_session().map(|session| session.draft.as_str())
    }

    /// Replace the draft text. Ignored unless editing.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let InteractionState::Editing(session) = &mut self.state {
            session.draft = text.into();
        }
    }

    /// Finish editing. Emits a rename unless the trimmed draft is empty or
    /// unchanged.
    pub fn confirm_edit(&mut self) -> Option<Mutation> {
        if !self.state.is_editing() {
            return None;
        }
        let InteractionState::Editing(EditSession {
            item_id,
            original_name,
            draft,
        }) = std::mem::take(&mut self.state)
        else {
            return None;
        };

        let name = draft.trim();
        if name.is_empty() || name == original_name {
            debug!(item = %item_id, "Rename left name unchanged");
            return None;
        }

        debug!(item = %item_id, name, "Rename confirmed");
        Some(Mutation::Rename {
            id: item_id,
            name: name.to_string(),
        })
    }

    pub fn cancel_edit(&mut self) {
        if self.state.is_editing() {
            self.state.reset();
        }
    }
}

pub(crate) fn find_item(items: &[Item], id: ItemId) -> Option<&Item> {
    items.iter().find(|item| item.id == id)
}
