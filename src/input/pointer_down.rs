//! Pointer down and double activation - opening drag and edit sessions.

use crate::coords::CoordinateMapper;
use crate::input::engine::{InteractionEngine, find_item};
use crate::input::gesture::GestureKind;
use crate::input::state::{DragSession, EditSession, InteractionState};
use crate::layout::Frame;
use crate::profile_scope;
use crate::types::{Item, Point};
use tracing::debug;

impl InteractionEngine {
    /// Start a move or resize on the item under the pointer.
    ///
    /// Ignored while a drag or edit is already in progress, and on empty
    /// space. Returns whether a session was opened.
    pub fn pointer_down(&mut self, pos: Point, frame: &Frame, items: &[Item]) -> bool {
        profile_scope!("pointer_down");

        if self.state.is_dragging() || self.state.is_editing() {
            return false;
        }

        let Some(rect) = frame.hit_test(pos) else {
            return false;
        };
        let (Some(item), Some(ctx)) = (find_item(items, rect.item_id), frame.mapping()) else {
            return false;
        };

        let kind = self.zones.classify(rect, pos.x);
        // Offset from the edge that follows the pointer, so a press without
        // movement maps back to the same date
        let grabbed_edge = match kind {
            GestureKind::Move | GestureKind::ResizeStart => CoordinateMapper::to_pixel(item.start, &ctx),
            GestureKind::ResizeEnd => CoordinateMapper::to_pixel(item.end, &ctx),
        };

        debug!(item = %item.id, gesture = ?kind, "Drag session opened");

        self.state = InteractionState::Dragging(DragSession {
            item_id: item.id,
            kind,
            anchor_start: item.start,
            anchor_end: item.end,
            pointer_anchor_offset: pos.x - grabbed_edge,
            proposal: None,
        });
        true
    }

    /// Enter rename mode on the item under the pointer.
    pub fn double_click(&mut self, pos: Point, frame: &Frame, items: &[Item]) -> bool {
        if self.state.is_dragging() || self.state.is_editing() {
            return false;
        }

        let Some(item) = frame
            .hit_test(pos)
            .and_then(|rect| find_item(items, rect.item_id))
        else {
            return false;
        };

        debug!(item = %item.id, "Editing name");
        self.state = InteractionState::Editing(EditSession {
            item_id: item.id,
            original_name: item.name.clone(),
            draft: item.name.clone(),
        });
        true
    }
}
