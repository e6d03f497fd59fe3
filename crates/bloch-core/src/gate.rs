//! Fixed sign-flip gate reflections
//!
//! Each gate is a sign flip of two state-vector components. The sign
//! triples reproduce the original viewer exactly; they are not the
//! textbook Pauli action on a Bloch vector (which would flip (y, z),
//! (x, z), and (x, y) respectively). The viewer is a faithful port,
//! not a corrected simulator.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gate presets applied to the state vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauliGate {
    X,
    Y,
    Z,
}

impl PauliGate {
    /// Apply this gate's sign flip to a vector.
    ///
    /// Involutive and exactly length-preserving.
    pub fn apply(self, v: Vec3) -> Vec3 {
        match self {
            PauliGate::X => Vec3::new(v.x, -v.y, -v.z),
            PauliGate::Y => Vec3::new(-v.x, -v.y, v.z),
            PauliGate::Z => Vec3::new(-v.x, v.y, -v.z),
        }
    }

    /// Label shown in the UI
    pub fn label(self) -> &'static str {
        match self {
            PauliGate::X => "Pauli X",
            PauliGate::Y => "Pauli Y",
            PauliGate::Z => "Pauli Z",
        }
    }

    /// All gates, in UI order
    pub const ALL: [PauliGate; 3] = [PauliGate::X, PauliGate::Y, PauliGate::Z];
}
