//! The host-facing timeline: items, zoom and container width in, frames and
//! feedback out.
//!
//! ## Architecture
//!
//! `Timeline` is the single owner of the item list. Pointer events are
//! forwarded to the [`InteractionEngine`] together with the current frame;
//! any mutation it returns is applied here by replacing the item record,
//! followed by a fresh layout pass. Zoom changes and container resizes also
//! relayout.

use crate::error::TimelineResult;
use crate::header::{HeaderSummary, MonthMarker, header_summary, month_markers};
use crate::input::{CursorHint, InteractionEngine, Mutation};
use crate::items::{load_items, validate_items};
use crate::layout::Frame;
use crate::perf::{LayoutProfiler, SLOW_LOAD_MS, TARGET_FRAME_MS, measure, measure_and_log};
use crate::profile_scope;
use crate::settings::TimelineSettings;
use crate::summary::{DragPreview, ItemSummary};
use crate::types::{Item, Point};
use crate::zoom::{ZoomLevel, ZoomPolicy};
use std::path::Path;
use tracing::{debug, info};

pub struct Timeline {
    items: Vec<Item>,
    settings: TimelineSettings,
    zoom_policy: ZoomPolicy,
    zoom: ZoomLevel,
    container_width: f64,
    frame: Frame,
    engine: InteractionEngine,
    profiler: LayoutProfiler,
    last_message: Option<&'static str>,
}

impl Timeline {
    /// Lay out `items` at zoom 1.0. The items must already be validated.
    pub fn new(items: Vec<Item>, settings: TimelineSettings, container_width: f64) -> Self {
        let zoom_policy = ZoomPolicy::from(&settings);
        let zoom = zoom_policy.reset();
        let (frame, elapsed_ms) = measure(|| Frame::build(&items, zoom, container_width, &settings));
        let engine = InteractionEngine::new(&settings);
        let mut profiler = LayoutProfiler::new();
        profiler.record_pass(elapsed_ms, items.len(), frame.lanes().len());

        Self {
            items,
            settings,
            zoom_policy,
            zoom,
            container_width,
            frame,
            engine,
            profiler,
            last_message: None,
        }
    }

    /// Load and validate items from a JSON file.
    pub fn load(path: &Path, settings: TimelineSettings, container_width: f64) -> TimelineResult<Self> {
        settings.validate()?;
        let items = measure_and_log("load_items", SLOW_LOAD_MS, || load_items(path))?;
        info!(path = %path.display(), items = items.len(), "Loaded timeline items");
        Ok(Self::new(items, settings, container_width))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn settings(&self) -> &TimelineSettings {
        &self.settings
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn engine(&self) -> &InteractionEngine {
        &self.engine
    }

    pub fn profiler(&self) -> &LayoutProfiler {
        &self.profiler
    }

    pub fn cursor(&self) -> CursorHint {
        self.engine.cursor()
    }

    pub fn hover_summary(&self) -> Option<ItemSummary> {
        self.engine.hover_summary(&self.items)
    }

    pub fn drag_preview(&self) -> Option<DragPreview> {
        self.engine.drag_preview()
    }

    pub fn month_markers(&self) -> Vec<MonthMarker> {
        self.frame.mapping().map(|ctx| month_markers(&ctx)).unwrap_or_default()
    }

    pub fn header_summary(&self) -> Option<HeaderSummary> {
        self.frame.domain().map(|domain| header_summary(domain, self.zoom))
    }

    /// Confirmation text of the most recently applied mutation
    pub fn last_message(&self) -> Option<&'static str> {
        self.last_message
    }

    /// Confirmation text of the most recently applied mutation, cleared on read
    pub fn take_message(&mut self) -> Option<&'static str> {
        self.last_message.take()
    }

    /// e.g. "4 items in 2 lanes"
    pub fn lane_summary(&self) -> String {
        format!(
            "{} in {}",
            plural(self.items.len(), "item"),
            plural(self.frame.lanes().len(), "lane")
        )
    }

    // ========================================================================
    // Data, zoom and viewport
    // ========================================================================

    /// Replace the whole item list. Any interaction in progress is dropped.
    pub fn set_items(&mut self, items: Vec<Item>) -> TimelineResult<()> {
        validate_items(&items)?;
        self.items = items;
        self.engine.reset();
        self.relayout();
        Ok(())
    }

    /// Swap in new settings after validating them
    pub fn set_settings(&mut self, settings: TimelineSettings) -> TimelineResult<()> {
        settings.validate()?;
        self.zoom_policy = ZoomPolicy::from(&settings);
        self.zoom = self.zoom_policy.clamp(self.zoom.get());
        self.engine.reconfigure(&settings);
        self.settings = settings;
        self.relayout();
        Ok(())
    }

    pub fn set_container_width(&mut self, width: f64) {
        if width == self.container_width {
            return;
        }
        self.container_width = width;
        self.relayout();
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.update_zoom(self.zoom_policy.clamp(zoom));
    }

    pub fn zoom_in(&mut self) {
        self.update_zoom(self.zoom_policy.zoom_in_button(self.zoom));
    }

    pub fn zoom_out(&mut self) {
        self.update_zoom(self.zoom_policy.zoom_out_button(self.zoom));
    }

    pub fn reset_zoom(&mut self) {
        self.update_zoom(self.zoom_policy.reset());
    }

    /// Scroll-wheel zoom; positive `delta_y` zooms out
    pub fn wheel(&mut self, delta_y: f64) {
        self.update_zoom(self.zoom_policy.wheel(self.zoom, delta_y));
    }

    fn update_zoom(&mut self, zoom: ZoomLevel) {
        if zoom == self.zoom {
            return;
        }
        debug!(from = self.zoom.get(), to = zoom.get(), "Zoom changed");
        self.zoom = zoom;
        self.relayout();
    }

    // ========================================================================
    // Pointer events
    // ========================================================================

    pub fn pointer_down(&mut self, pos: Point) -> bool {
        self.engine.pointer_down(pos, &self.frame, &self.items)
    }

    /// A drag update, including the relayout it triggers, should fit in one
    /// display frame.
    pub fn pointer_move(&mut self, pos: Point) -> Option<Mutation> {
        profile_scope!("timeline_pointer_move", TARGET_FRAME_MS);
        let mutation = self.engine.pointer_move(pos, &self.frame, &self.items)?;
        self.commit(mutation)
    }

    pub fn pointer_up(&mut self, pos: Point) -> Option<Mutation> {
        let mutation = self.engine.pointer_up(pos, &self.frame, &self.items)?;
        self.commit(mutation)
    }

    pub fn pointer_leave(&mut self, pos: Point) -> Option<Mutation> {
        let mutation = self.engine.pointer_leave(pos, &self.frame, &self.items)?;
        self.commit(mutation)
    }

    pub fn double_click(&mut self, pos: Point) -> bool {
        self.engine.double_click(pos, &self.frame, &self.items)
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        self.engine.set_draft(text);
    }

    pub fn confirm_edit(&mut self) -> Option<Mutation> {
        let mutation = self.engine.confirm_edit()?;
        self.commit(mutation)
    }

    pub fn cancel_edit(&mut self) {
        self.engine.cancel_edit();
    }

    /// Apply a mutation and relayout. Returns the mutation when it changed
    /// an item.
    pub fn apply(&mut self, mutation: Mutation) -> Option<Mutation> {
        self.commit(mutation)
    }

    fn commit(&mut self, mutation: Mutation) -> Option<Mutation> {
        if !mutation.apply(&mut self.items) {
            return None;
        }
        debug!(item = %mutation.item_id(), message = mutation.message(), "Applied mutation");
        self.last_message = Some(mutation.message());
        self.relayout();
        Some(mutation)
    }

    fn relayout(&mut self) {
        let (frame, elapsed_ms) =
            measure(|| Frame::build(&self.items, self.zoom, self.container_width, &self.settings));
        self.frame = frame;
        self.profiler
            .record_pass(elapsed_ms, self.items.len(), self.frame.lanes().len());
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
