//! Scene configuration structures
//!
//! Configurable viewer settings that can be serialized and loaded from
//! configuration files alongside the session.

use serde::{Deserialize, Serialize};

use bloch_core::constants::{AXIS_LENGTH, MOUSE_SENSITIVITY};

/// Coordinate axes overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxesConfig {
    /// Whether the axes are drawn
    pub enabled: bool,
    /// Axis length from the origin
    pub length: f32,
    /// X-axis color (RGB)
    pub x_axis_color: [f32; 3],
    /// Y-axis color (RGB)
    pub y_axis_color: [f32; 3],
    /// Z-axis color (RGB)
    pub z_axis_color: [f32; 3],
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            length: AXIS_LENGTH,
            x_axis_color: [1.0, 0.0, 0.0],
            y_axis_color: [0.0, 1.0, 0.0],
            z_axis_color: [0.0, 0.0, 1.0],
        }
    }
}

/// State-vector overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Current state vector color (RGB)
    pub vector_color: [f32; 3],
    /// Dimmed trail color for the pre-gate vector (RGB)
    pub trail_color: [f32; 3],
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            vector_color: [1.0, 1.0, 0.0],
            trail_color: [0.4, 0.4, 0.15],
        }
    }
}

/// Top-level scene configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
    /// Pointer-delta sensitivity for camera orbiting
    pub mouse_sensitivity: f32,
    /// Axes overlay settings
    pub axes: AxesConfig,
    /// State-vector overlay settings
    pub overlay: OverlayConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::dark()
    }
}

impl SceneConfig {
    /// Create dark theme scene config
    pub fn dark() -> Self {
        Self {
            background_color: [0.05, 0.05, 0.05, 1.0],
            mouse_sensitivity: MOUSE_SENSITIVITY,
            axes: AxesConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }

    /// Create light theme scene config
    pub fn light() -> Self {
        Self {
            background_color: [0.92, 0.92, 0.94, 1.0],
            mouse_sensitivity: MOUSE_SENSITIVITY,
            axes: AxesConfig::default(),
            overlay: OverlayConfig {
                vector_color: [0.8, 0.6, 0.0],
                trail_color: [0.6, 0.55, 0.35],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(SceneConfig::default(), SceneConfig::dark());
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(SceneConfig::dark(), SceneConfig::light());
    }
}
