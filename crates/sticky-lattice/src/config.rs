//! Configuration for sticky-header components.
//!
//! Configuration is fixed at construction. It can be built in code:
//!
//! ```
//! use sticky_lattice::config::{RenderMode, StickyConfig};
//!
//! let config = StickyConfig::new()
//!     .render_mode(RenderMode::Overlay)
//!     .draw_following_headers(false);
//! assert_eq!(config.render_mode, RenderMode::Overlay);
//! ```
//!
//! or loaded from TOML:
//!
//! ```
//! use sticky_lattice::config::{RenderMode, StickyConfig};
//!
//! let config = StickyConfig::from_toml_str(r#"
//!     render_mode = "overlay"
//!
//!     [gesture]
//!     tap_slop = 12.0
//! "#).unwrap();
//! assert_eq!(config.render_mode, RenderMode::Overlay);
//! assert_eq!(config.gesture.tap_slop, 12.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sticky_lattice_core::{Result, StickyError};

use crate::gesture::tap::{
    TapConfig, DEFAULT_DOUBLE_TAP_SLOP, DEFAULT_DOUBLE_TAP_TIMEOUT_MS, DEFAULT_TAP_SLOP,
    DEFAULT_TAP_TIMEOUT_MS,
};

/// How a header shares space with list content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Reserve space above each group's first item and draw the header in it.
    #[default]
    Offset,
    /// Reserve nothing; the header floats over the content.
    Overlay,
}

/// Tap recognition thresholds, in serializable units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Maximum press duration for a tap, in milliseconds.
    pub tap_timeout_ms: u64,
    /// Window in which a second tap makes a double-tap, in milliseconds.
    pub double_tap_timeout_ms: u64,
    /// Maximum pointer travel for a tap, in pixels.
    pub tap_slop: f32,
    /// Maximum distance between the two taps of a double-tap, in pixels.
    pub double_tap_slop: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            tap_timeout_ms: DEFAULT_TAP_TIMEOUT_MS,
            double_tap_timeout_ms: DEFAULT_DOUBLE_TAP_TIMEOUT_MS,
            tap_slop: DEFAULT_TAP_SLOP,
            double_tap_slop: DEFAULT_DOUBLE_TAP_SLOP,
        }
    }
}

impl From<&GestureSettings> for TapConfig {
    fn from(settings: &GestureSettings) -> Self {
        TapConfig {
            tap_timeout: Duration::from_millis(settings.tap_timeout_ms),
            double_tap_timeout: Duration::from_millis(settings.double_tap_timeout_ms),
            tap_slop: settings.tap_slop,
            double_tap_slop: settings.double_tap_slop,
        }
    }
}

/// Configuration shared by the sticky-header components.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Whether headers reserve list space or float over it.
    pub render_mode: RenderMode,
    /// Also draw headers of groups that start below the topmost one.
    ///
    /// With [`RenderMode::Offset`] this fills every reserved slot on screen;
    /// by default only the active header is drawn.
    pub draw_following_headers: bool,
    /// Tap recognition thresholds for header clicks.
    pub gesture: GestureSettings,
}

impl StickyConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render mode.
    pub fn render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    /// Enable or disable drawing of following headers.
    pub fn draw_following_headers(mut self, enabled: bool) -> Self {
        self.draw_following_headers = enabled;
        self
    }

    /// Replace the gesture settings.
    pub fn gesture(mut self, gesture: GestureSettings) -> Self {
        self.gesture = gesture;
        self
    }

    /// Tap detector configuration derived from these settings.
    pub fn tap_config(&self) -> TapConfig {
        TapConfig::from(&self.gesture)
    }

    /// Check that all values are usable.
    ///
    /// # Errors
    ///
    /// [`StickyError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let gesture = &self.gesture;
        if gesture.tap_timeout_ms == 0 {
            return Err(StickyError::InvalidConfig(
                "gesture.tap_timeout_ms must be greater than zero".into(),
            ));
        }
        if gesture.double_tap_timeout_ms == 0 {
            return Err(StickyError::InvalidConfig(
                "gesture.double_tap_timeout_ms must be greater than zero".into(),
            ));
        }
        for (name, value) in [
            ("gesture.tap_slop", gesture.tap_slop),
            ("gesture.double_tap_slop", gesture.double_tap_slop),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StickyError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| StickyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| StickyError::InvalidConfig(e.to_string()))
    }
}

static_assertions::assert_impl_all!(StickyConfig: Send, Sync, Clone);
