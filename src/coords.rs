//! Date <-> pixel conversion for the zoomable content region.
//!
//! This module centralizes the coordinate formulas so that layout, geometry
//! and drag handling all map dates the same way.
//!
//! `x = padding + (date - domain.min) / (domain.max - domain.min) * content_width`
//!
//! A degenerate domain (`max <= min`) maps every date to `padding`, and every
//! pixel back to `domain.min`.

use crate::constants::DEFAULT_ZOOM;
use crate::dates::{add_days, days_between};
use crate::types::{Domain, Item};
use chrono::NaiveDate;

/// Absorbs float noise when snapping a fractional day to a whole one.
const DAY_EPSILON: f64 = 1e-6;

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappingContext {
    pub domain: Domain,
    pub content_width: f64,
    pub padding: f64,
}

impl MappingContext {
    #[inline]
    pub fn new(domain: Domain, content_width: f64, padding: f64) -> Self {
        Self {
            domain,
            content_width,
            padding,
        }
    }

    /// Pixels covered by one day; zero for a degenerate domain
    pub fn pixels_per_day(&self) -> f64 {
        let span = self.domain.span_days();
        if span <= 0 {
            0.0
        } else {
            self.content_width / span as f64
        }
    }
}

pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Convert a date to a horizontal pixel offset
    #[inline]
    pub fn to_pixel(date: NaiveDate, ctx: &MappingContext) -> f64 {
        let span = ctx.domain.span_days();
        if span <= 0 {
            return ctx.padding;
        }
        let days_from_start = days_between(ctx.domain.min, date) as f64;
        ctx.padding + (days_from_start / span as f64) * ctx.content_width
    }

    /// Convert a pixel offset to fractional days after `domain.min`
    #[inline]
    pub fn to_day_offset(x: f64, ctx: &MappingContext) -> f64 {
        let span = ctx.domain.span_days();
        if span <= 0 || ctx.content_width <= 0.0 || !x.is_finite() {
            return 0.0;
        }
        ((x - ctx.padding) / ctx.content_width) * span as f64
    }

    /// Convert a pixel offset to the calendar day it falls in.
    ///
    /// Sub-day precision is dropped: any x inside a day's pixel band maps to
    /// that day.
    pub fn to_date(x: f64, ctx: &MappingContext) -> NaiveDate {
        let days = (Self::to_day_offset(x, ctx) + DAY_EPSILON).floor();
        add_days(ctx.domain.min, days as i64)
    }

    /// Visible date span for the item set at the given zoom.
    ///
    /// Returns `None` for an empty item set. Zooming in keeps the domain and
    /// widens the content instead; zooming out extends `max` so more calendar
    /// time fits into the same pixels.
    pub fn derive_domain(items: &[Item], zoom: f64, padding_factor: f64) -> Option<Domain> {
        let items_min = items.iter().map(|item| item.start).min()?;
        let items_max = items.iter().map(|item| item.end).max()?;

        let zoom = sanitize_zoom(zoom);
        let total_days = days_between(items_min, items_max).max(1) as f64;
        let padding_days = ceil_days(total_days * padding_factor);

        let min = add_days(items_min, -padding_days);
        let max = if zoom < 1.0 {
            let extension_days = ceil_days(total_days * ((1.0 / zoom) - 1.0 + padding_factor));
            add_days(items_max, extension_days)
        } else {
            add_days(items_max, padding_days)
        };

        Some(Domain::new(min, max))
    }

    /// Pixel width of the content region.
    ///
    /// Zoom-out never shrinks the surface; zoom-in scales it linearly.
    pub fn derive_content_width(container_width: f64, zoom: f64, padding: f64) -> f64 {
        let base = (container_width - padding * 2.0).max(0.0);
        let zoom = sanitize_zoom(zoom);
        if zoom <= 1.0 { base } else { base * zoom }
    }
}

fn sanitize_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 { zoom } else { DEFAULT_ZOOM }
}

/// Ceiling in whole days; an exact multiple must not be pushed up by float noise.
fn ceil_days(days: f64) -> i64 {
    (days - DAY_EPSILON).ceil().max(0.0) as i64
}
