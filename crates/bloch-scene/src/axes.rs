//! Coordinate axes overlay

use crate::config::AxesConfig;
use crate::vertex::PositionColorVertex;

/// Generate the axes line list: three origin-anchored segments,
/// one per axis, colored per the config. Returns an empty list when
/// the axes are disabled.
pub fn generate_axis_vertices(config: &AxesConfig) -> Vec<PositionColorVertex> {
    if !config.enabled {
        return Vec::new();
    }

    let origin = [0.0, 0.0, 0.0];
    let len = config.length;

    vec![
        // X-axis
        PositionColorVertex::new(origin, config.x_axis_color),
        PositionColorVertex::new([len, 0.0, 0.0], config.x_axis_color),
        // Y-axis
        PositionColorVertex::new(origin, config.y_axis_color),
        PositionColorVertex::new([0.0, len, 0.0], config.y_axis_color),
        // Z-axis
        PositionColorVertex::new(origin, config.z_axis_color),
        PositionColorVertex::new([0.0, 0.0, len], config.z_axis_color),
    ]
}
