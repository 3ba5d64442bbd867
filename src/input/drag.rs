//! Pointer move handling - hover tracking and live drag updates.
//!
//! ## Performance Notes
//!
//! Pointer move fires at display rate. Hover uses the frame's R-tree; drag
//! updates only map one x to a date.

use crate::coords::{CoordinateMapper, MappingContext};
use crate::dates::add_days;
use crate::input::engine::{InteractionEngine, find_item};
use crate::input::gesture::GestureKind;
use crate::input::mutation::Mutation;
use crate::input::state::{DragSession, InteractionState};
use crate::layout::Frame;
use crate::profile_scope;
use crate::types::{Item, Point};
use chrono::NaiveDate;
use tracing::trace;

impl InteractionEngine {
    /// Track hover, or advance the active drag.
    ///
    /// While dragging, each valid position yields a date mutation; positions
    /// that would invert the item are withheld and the item keeps its last
    /// valid dates.
    pub fn pointer_move(&mut self, pos: Point, frame: &Frame, items: &[Item]) -> Option<Mutation> {
        profile_scope!("pointer_move");

        if self.state.is_editing() {
            return None;
        }

        if !self.state.is_dragging() {
            self.state = match frame.hit_test(pos) {
                Some(rect) => InteractionState::Hovering {
                    rect: rect.clone(),
                    cursor: self.zones.cursor_for(rect, pos.x),
                },
                None => InteractionState::Idle,
            };
            return None;
        }
        let InteractionState::Dragging(session) = &mut self.state else {
            return None;
        };

        let item = find_item(items, session.item_id)?;
        let ctx = frame.mapping()?;
        let (start, end) = propose(session, item, pos.x, &ctx)?;
        session.proposal = Some((start, end));
        trace!(item = %item.id, %start, %end, "Drag update");
        Some(Mutation::Dates {
            id: item.id,
            start,
            end,
            gesture: session.kind,
        })
    }
}

/// Dates the session would give `item` with the pointer at `x`, or `None`
/// when the result would put start after end.
///
/// Move keeps the duration frozen at session open. Resizes check against the
/// item's current opposite date.
pub(crate) fn propose(
    session: &DragSession,
    item: &Item,
    x: f64,
    ctx: &MappingContext,
) -> Option<(NaiveDate, NaiveDate)> {
    let pointer_date = CoordinateMapper::to_date(x - session.pointer_anchor_offset, ctx);

    match session.kind {
        GestureKind::Move => {
            let end = add_days(pointer_date, session.anchor_duration_days());
            Some((pointer_date, end))
        }
        GestureKind::ResizeStart => (pointer_date < item.end).then_some((pointer_date, item.end)),
        GestureKind::ResizeEnd => (pointer_date > item.start).then_some((item.start, pointer_date)),
    }
}
