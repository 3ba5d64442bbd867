//! Month markers and summary figures for the header band.

use crate::constants::MAX_MONTH_MARKERS;
use crate::coords::{CoordinateMapper, MappingContext};
use crate::types::Domain;
use crate::zoom::ZoomLevel;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// A month boundary in the header.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthMarker {
    /// First day of the month
    pub date: NaiveDate,
    pub x: f64,
    /// Right edge of the month's background band
    pub band_end: f64,
    /// e.g. "Jan 2021"
    pub label: String,
    /// Alternating background, set for Jan, Mar, May, ...
    pub shaded: bool,
}

/// Zoom and range figures shown next to the title.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderSummary {
    pub zoom_percent: i64,
    pub range_days: i64,
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Months between the month of `domain.min` and the month of `domain.max`
fn month_distance(domain: &Domain) -> i32 {
    (domain.max.year() - domain.min.year()) * 12 + domain.max.month() as i32 - domain.min.month() as i32
}

/// First-of-month markers covering the domain.
///
/// Above 24 months only every `total / 24`-th month is kept.
pub fn month_markers(ctx: &MappingContext) -> Vec<MonthMarker> {
    let domain = ctx.domain;
    let Some(mut current) = domain.min.with_day(1) else {
        return Vec::new();
    };

    let total_months = month_distance(&domain);
    let step = if total_months > MAX_MONTH_MARKERS {
        (total_months / MAX_MONTH_MARKERS).max(1)
    } else {
        1
    };

    let mut dates = Vec::new();
    let mut count = 0;
    while current <= domain.max {
        if count % step == 0 {
            dates.push(current);
        }
        let Some(next) = current.checked_add_months(Months::new(1)) else {
            break;
        };
        current = next;
        count += 1;
    }

    let right_edge = ctx.content_width + ctx.padding;
    let xs: Vec<f64> = dates.iter().map(|date| CoordinateMapper::to_pixel(*date, ctx)).collect();

    dates
        .iter()
        .enumerate()
        .map(|(i, date)| MonthMarker {
            date: *date,
            x: xs[i],
            band_end: xs.get(i + 1).copied().unwrap_or(right_edge),
            label: date.format("%b %Y").to_string(),
            shaded: date.month0() % 2 == 0,
        })
        .collect()
}

pub fn header_summary(domain: Domain, zoom: ZoomLevel) -> HeaderSummary {
    HeaderSummary {
        zoom_percent: zoom.percent(),
        range_days: domain.span_days(),
        min: domain.min,
        max: domain.max,
    }
}
