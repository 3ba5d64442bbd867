//! Pointer up and pointer leave - closing the drag session.

use crate::input::drag::propose;
use crate::input::engine::{InteractionEngine, find_item};
use crate::input::mutation::Mutation;
use crate::input::state::InteractionState;
use crate::layout::Frame;
use crate::profile_scope;
use crate::types::{Item, Point};
use tracing::debug;

impl InteractionEngine {
    /// Release the pointer.
    ///
    /// The release position is validated once more; the session is discarded
    /// whether or not it yields a mutation.
    pub fn pointer_up(&mut self, pos: Point, frame: &Frame, items: &[Item]) -> Option<Mutation> {
        profile_scope!("pointer_up");

        if !self.state.is_dragging() {
            return None;
        }
        let InteractionState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };

        let item = find_item(items, session.item_id)?;
        let ctx = frame.mapping()?;
        match propose(&session, item, pos.x, &ctx) {
            Some((start, end)) => {
                debug!(item = %item.id, %start, %end, gesture = ?session.kind, "Drag committed");
                Some(Mutation::Dates {
                    id: item.id,
                    start,
                    end,
                    gesture: session.kind,
                })
            }
            None => {
                debug!(item = %item.id, "Drag released on an invalid position");
                None
            }
        }
    }

    /// The pointer left the timeline surface.
    ///
    /// An active drag closes exactly as on release at `pos`; hover clears.
    pub fn pointer_leave(&mut self, pos: Point, frame: &Frame, items: &[Item]) -> Option<Mutation> {
        if self.state.is_dragging() {
            return self.pointer_up(pos, frame, items);
        }
        if self.state.is_hovering() {
            self.state.reset();
        }
        None
    }
}
