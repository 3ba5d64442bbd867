//! Command-line lane report: `lanewise <items.json>`.
//!
//! Loads the items, lays them out at zoom 1 in a 1024px container and prints
//! the lane assignment.

use anyhow::{Context, Result};
use lanewise::dates::{format_duration, format_for_storage};
use lanewise::settings::{TimelineSettings, default_settings_path};
use lanewise::Timeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CONTAINER_WIDTH: f64 = 1024.0;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: lanewise <items.json>")?;

    let settings = default_settings_path()
        .map(|path| TimelineSettings::load_or_default(&path))
        .unwrap_or_default();
    settings.validate().context("Invalid settings")?;

    let timeline = Timeline::load(&path, settings, CONTAINER_WIDTH)
        .with_context(|| format!("Failed to load items from {}", path.display()))?;

    println!("{}", timeline.lane_summary());
    for (index, lane) in timeline.frame().lanes().iter().enumerate() {
        println!("Lane {}:", index + 1);
        for item in lane.items() {
            println!(
                "  [{}] {} {} .. {} ({})",
                item.id,
                item.name,
                format_for_storage(item.start),
                format_for_storage(item.end),
                format_duration(item.duration_days())
            );
        }
    }
    timeline.profiler().log_summary();

    Ok(())
}
