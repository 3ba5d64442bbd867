//! One complete layout pass.
//!
//! A [`Frame`] is rebuilt from scratch whenever the item list, zoom or
//! container width changes. Drawing and hit-testing read the same frame, so
//! what the user sees is exactly what the pointer hits.

use crate::coords::{CoordinateMapper, MappingContext};
use crate::geometry::ItemGeometryResolver;
use crate::lanes::pack;
use crate::profile_scope;
use crate::settings::TimelineSettings;
use crate::spatial_index::SpatialIndex;
use crate::types::{Domain, Item, ItemId, Lane, Point, Rectangle};
use crate::zoom::ZoomLevel;
use tracing::trace;

/// Lanes, rectangles and coordinate space of a single layout pass.
#[derive(Debug)]
pub struct Frame {
    lanes: Vec<Lane>,
    /// Rectangles in frame order: lane by lane, then by start within a lane
    rects: Vec<Rectangle>,
    domain: Option<Domain>,
    content_width: f64,
    padding: f64,
    canvas_width: f64,
    canvas_height: f64,
    index: SpatialIndex,
}

impl Frame {
    /// Lay out `items` for the given zoom and container width.
    pub fn build(items: &[Item], zoom: ZoomLevel, container_width: f64, settings: &TimelineSettings) -> Self {
        profile_scope!("layout_frame");

        let lanes = pack(items);
        let content_width = CoordinateMapper::derive_content_width(container_width, zoom.get(), settings.padding);
        let domain = CoordinateMapper::derive_domain(items, zoom.get(), settings.date_padding_factor);

        let resolver = ItemGeometryResolver::new(settings);
        let rects: Vec<Rectangle> = match domain {
            Some(domain) => lanes
                .iter()
                .enumerate()
                .flat_map(|(lane_index, lane)| {
                    lane.items()
                        .iter()
                        .map(move |item| resolver.rectangle(item, lane_index, domain, content_width))
                })
                .collect(),
            None => Vec::new(),
        };

        let canvas_width = if zoom.is_zoomed_in() {
            content_width + settings.padding * 2.0
        } else {
            container_width
        };
        let canvas_height = lanes.len() as f64 * settings.lane_height + settings.header_height;
        let index = SpatialIndex::from_rectangles(&rects);

        trace!(
            items = items.len(),
            lanes = lanes.len(),
            content_width,
            "Built layout frame"
        );

        Self {
            lanes,
            rects,
            domain,
            content_width,
            padding: settings.padding,
            canvas_width,
            canvas_height,
            index,
        }
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rects
    }

    /// `None` when there are no items
    pub fn domain(&self) -> Option<Domain> {
        self.domain
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Width of the drawing surface, wider than the container when zoomed in
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Coordinate context valid for this frame
    pub fn mapping(&self) -> Option<MappingContext> {
        self.domain
            .map(|domain| MappingContext::new(domain, self.content_width, self.padding))
    }

    /// First rectangle in frame order containing the point.
    pub fn hit_test(&self, point: Point) -> Option<&Rectangle> {
        profile_scope!("hit_test");
        self.index.first_at(point).and_then(|order| self.rects.get(order))
    }

    /// Exhaustive front-to-back scan; same answer as [`Frame::hit_test`].
    pub fn hit_test_linear(&self, point: Point) -> Option<&Rectangle> {
        self.rects.iter().find(|rect| rect.contains(point))
    }

    pub fn rectangle_for(&self, id: ItemId) -> Option<&Rectangle> {
        self.rects.iter().find(|rect| rect.item_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
