//! Item rectangles on their lane rows.

use crate::coords::{CoordinateMapper, MappingContext};
use crate::settings::TimelineSettings;
use crate::types::{Domain, Item, Rectangle, Span};

/// Vertical band an item occupies inside its lane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneBand {
    pub y: f64,
    pub height: f64,
}

/// Computes pixel geometry for items under the current domain and width.
#[derive(Clone, Copy, Debug)]
pub struct ItemGeometryResolver<'a> {
    settings: &'a TimelineSettings,
}

impl<'a> ItemGeometryResolver<'a> {
    pub fn new(settings: &'a TimelineSettings) -> Self {
        Self { settings }
    }

    fn context(&self, domain: Domain, content_width: f64) -> MappingContext {
        MappingContext::new(domain, content_width, self.settings.padding)
    }

    /// Horizontal placement, floored at the minimum item width.
    pub fn resolve(&self, item: &Item, domain: Domain, content_width: f64) -> Span {
        let ctx = self.context(domain, content_width);
        let x = CoordinateMapper::to_pixel(item.start, &ctx);
        let end_x = CoordinateMapper::to_pixel(item.end, &ctx);
        Span {
            x,
            width: (end_x - x).max(self.settings.min_item_width),
        }
    }

    /// Lane `i` spans `[header + i * lane_height, header + (i + 1) * lane_height)`;
    /// the item band is inset by the vertical padding on both sides, so bands
    /// of neighbouring lanes never touch.
    pub fn lane_band(&self, lane_index: usize) -> LaneBand {
        let lane_top = self.lane_top(lane_index);
        LaneBand {
            y: lane_top + self.settings.item_vertical_padding,
            height: self.settings.lane_height - self.settings.item_vertical_padding * 2.0,
        }
    }

    /// Top edge of a lane row
    pub fn lane_top(&self, lane_index: usize) -> f64 {
        self.settings.header_height + lane_index as f64 * self.settings.lane_height
    }

    /// Full rectangle for an item on the given lane.
    pub fn rectangle(&self, item: &Item, lane_index: usize, domain: Domain, content_width: f64) -> Rectangle {
        let span = self.resolve(item, domain, content_width);
        let band = self.lane_band(lane_index);
        Rectangle {
            item_id: item.id,
            x: span.x,
            y: band.y,
            width: span.width,
            height: band.height,
            lane_index,
        }
    }
}
