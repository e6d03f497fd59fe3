//! State-vector overlay
//!
//! Builds the origin-to-tip line for the current state vector, plus a
//! dimmed segment for the pre-gate trail snapshot when one exists.

use bloch_core::BlochState;

use crate::config::OverlayConfig;
use crate::vertex::PositionColorVertex;

/// Generate the state-vector line list from the current state.
///
/// The trail segment (if any) comes first so the current vector draws
/// over it.
pub fn generate_vector_vertices(
    state: &BlochState,
    config: &OverlayConfig,
) -> Vec<PositionColorVertex> {
    let origin = [0.0, 0.0, 0.0];
    let mut vertices = Vec::with_capacity(4);

    if let Some(previous) = state.previous_vector() {
        vertices.push(PositionColorVertex::new(origin, config.trail_color));
        vertices.push(PositionColorVertex::new(
            previous.to_array(),
            config.trail_color,
        ));
    }

    let tip = state.vector();
    vertices.push(PositionColorVertex::new(origin, config.vector_color));
    vertices.push(PositionColorVertex::new(tip.to_array(), config.vector_color));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloch_core::PauliGate;

    #[test]
    fn test_vector_only() {
        let state = BlochState::new(90.0, 0.0);
        let config = OverlayConfig::default();
        let vertices = generate_vector_vertices(&state, &config);

        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);
        let tip = vertices[1].position;
        assert!((tip[0] - 1.0).abs() < 1e-5);
        assert_eq!(vertices[1].color, config.vector_color);
    }

    #[test]
    fn test_trail_drawn_before_vector() {
        let mut state = BlochState::new(90.0, 0.0);
        state.apply_gate(PauliGate::Z);
        let config = OverlayConfig::default();
        let vertices = generate_vector_vertices(&state, &config);

        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0].color, config.trail_color);
        assert_eq!(vertices[2].color, config.vector_color);
        // Trail tip is the pre-gate vector (+X), current tip is -X
        assert!((vertices[1].position[0] - 1.0).abs() < 1e-4);
        assert!((vertices[3].position[0] + 1.0).abs() < 1e-4);
    }
}
