//! Layout and interaction settings.
//!
//! Settings are stored as JSON. Missing fields fall back to the values in
//! [`crate::constants`], so a partial file only overrides what it names.

use crate::constants::*;
use crate::error::{TimelineError, TimelineResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Every tunable value of the layout and interaction engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Horizontal padding on each side of the content region
    pub padding: f64,
    /// Height of one lane row
    pub lane_height: f64,
    /// Height of the header band above the lanes
    pub header_height: f64,
    /// Gap between lane edge and item, top and bottom
    pub item_vertical_padding: f64,
    /// Floor width for short items
    pub min_item_width: f64,
    /// Distance of the drag handle from the item edge
    pub edge_handle_padding: f64,
    /// Tolerance around the drag handle that starts a resize
    pub edge_interaction_zone: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step_button: f64,
    pub zoom_step_wheel_in: f64,
    pub zoom_step_wheel_out: f64,
    /// Fraction of the item span used as domain padding
    pub date_padding_factor: f64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            padding: TIMELINE_PADDING,
            lane_height: LANE_HEIGHT,
            header_height: HEADER_HEIGHT,
            item_vertical_padding: ITEM_VERTICAL_PADDING,
            min_item_width: ITEM_MIN_WIDTH,
            edge_handle_padding: DRAG_HANDLE_EDGE_PADDING,
            edge_interaction_zone: DRAG_HANDLE_INTERACTION_ZONE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step_button: ZOOM_STEP_BUTTON,
            zoom_step_wheel_in: ZOOM_STEP_WHEEL_IN,
            zoom_step_wheel_out: ZOOM_STEP_WHEEL_OUT,
            date_padding_factor: DATE_PADDING_FACTOR,
        }
    }
}

impl TimelineSettings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> TimelineResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: &Path) -> TimelineResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        debug!(path = %path.display(), "Loaded timeline settings");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(TimelineError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Falling back to default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> TimelineResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Reject values that would make lanes overlap or divide by zero.
    pub fn validate(&self) -> TimelineResult<()> {
        let invalid = |msg: &str| Err(TimelineError::InvalidSettings(msg.to_string()));

        if !(self.lane_height > 0.0) {
            return invalid("lane_height must be positive");
        }
        if !(self.item_vertical_padding > 0.0) {
            return invalid("item_vertical_padding must be positive");
        }
        if self.item_vertical_padding * 2.0 >= self.lane_height {
            return invalid("item_vertical_padding leaves no room for items");
        }
        if self.padding < 0.0 || self.header_height < 0.0 || self.min_item_width < 0.0 {
            return invalid("padding, header_height and min_item_width must not be negative");
        }
        if self.edge_handle_padding < 0.0 || self.edge_interaction_zone < 0.0 {
            return invalid("edge handle values must not be negative");
        }
        if !(self.min_zoom > 0.0) || self.min_zoom > self.max_zoom {
            return invalid("zoom bounds must satisfy 0 < min_zoom <= max_zoom");
        }
        if self.date_padding_factor < 0.0 {
            return invalid("date_padding_factor must not be negative");
        }
        Ok(())
    }
}

/// `<config dir>/lanewise/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lanewise").join("settings.json"))
}
