//! Zoom level and the stepping policy of the zoom controls.

use crate::constants::DEFAULT_ZOOM;
use crate::settings::TimelineSettings;

/// A zoom factor already clamped to the policy bounds.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ZoomLevel(f64);

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

impl ZoomLevel {
    pub fn get(self) -> f64 {
        self.0
    }

    /// Rounded percentage for display, e.g. `120`
    pub fn percent(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    /// Zoomed in past 1.0, where the content region is wider than the viewport
    pub fn is_zoomed_in(self) -> bool {
        self.0 > 1.0
    }
}

/// Bounds and step sizes for zoom changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPolicy {
    pub min: f64,
    pub max: f64,
    pub step_button: f64,
    pub step_wheel_in: f64,
    pub step_wheel_out: f64,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self::from(&TimelineSettings::default())
    }
}

impl From<&TimelineSettings> for ZoomPolicy {
    fn from(settings: &TimelineSettings) -> Self {
        Self {
            min: settings.min_zoom,
            max: settings.max_zoom,
            step_button: settings.zoom_step_button,
            step_wheel_in: settings.zoom_step_wheel_in,
            step_wheel_out: settings.zoom_step_wheel_out,
        }
    }
}

impl ZoomPolicy {
    /// Clamp a raw factor into bounds. Non-finite input resets to 1.0.
    pub fn clamp(&self, value: f64) -> ZoomLevel {
        if !value.is_finite() {
            return self.reset();
        }
        ZoomLevel(value.clamp(self.min, self.max))
    }

    pub fn reset(&self) -> ZoomLevel {
        ZoomLevel(DEFAULT_ZOOM.clamp(self.min, self.max))
    }

    pub fn zoom_in_button(&self, level: ZoomLevel) -> ZoomLevel {
        self.clamp(level.0 + self.step_button)
    }

    pub fn zoom_out_button(&self, level: ZoomLevel) -> ZoomLevel {
        self.clamp(level.0 - self.step_button)
    }

    /// Scroll-wheel zoom: a positive `delta_y` zooms out by the smaller step
    pub fn wheel(&self, level: ZoomLevel, delta_y: f64) -> ZoomLevel {
        let delta = if delta_y > 0.0 {
            -self.step_wheel_out
        } else {
            self.step_wheel_in
        };
        self.clamp(level.0 + delta)
    }
}
