//! Visualization state
//!
//! Owns the (theta, phi) angle pair the UI sliders drive and the
//! one-step trail snapshot drawn dimmed behind the current vector.
//! Free-standing globals in the original viewer; here an explicit
//! state struct mutated through [`StateEvent`]s.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::gate::PauliGate;
use crate::spherical::{cartesian_to_spherical, spherical_to_cartesian};

/// Input events that mutate the visualization state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateEvent {
    /// Polar angle slider changed (degrees)
    SetTheta(f32),
    /// Azimuthal angle slider changed (degrees)
    SetPhi(f32),
    /// Gate button pressed
    ApplyGate(PauliGate),
}

/// Bloch sphere visualization state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlochState {
    /// Polar angle in degrees, [0, 180]
    pub theta_deg: f32,
    /// Azimuthal angle in degrees, [0, 360)
    pub phi_deg: f32,
    /// Snapshot of the vector before the last gate, for the trail visual.
    /// Transient: cleared on direct angle changes, never persisted.
    #[serde(skip)]
    previous: Option<Vec3>,
}

impl Default for BlochState {
    fn default() -> Self {
        Self {
            theta_deg: 0.0,
            phi_deg: 0.0,
            previous: None,
        }
    }
}

impl BlochState {
    /// Create a state with explicit angles
    pub fn new(theta_deg: f32, phi_deg: f32) -> Self {
        Self {
            theta_deg,
            phi_deg,
            previous: None,
        }
    }

    /// Current unit state vector derived from the angles
    pub fn vector(&self) -> Vec3 {
        spherical_to_cartesian(self.theta_deg, self.phi_deg)
    }

    /// Vector before the last gate application, if any
    pub fn previous_vector(&self) -> Option<Vec3> {
        self.previous
    }

    /// Set the polar angle directly; clears the trail snapshot
    pub fn set_theta(&mut self, theta_deg: f32) {
        self.theta_deg = theta_deg;
        self.previous = None;
    }

    /// Set the azimuthal angle directly; clears the trail snapshot
    pub fn set_phi(&mut self, phi_deg: f32) {
        self.phi_deg = phi_deg;
        self.previous = None;
    }

    /// Apply a gate: snapshot the current vector, sign-flip it, and
    /// store the flipped vector's angles as the new state.
    pub fn apply_gate(&mut self, gate: PauliGate) {
        let current = self.vector();
        let flipped = gate.apply(current);
        let (theta, phi) = cartesian_to_spherical(flipped);

        tracing::debug!(
            gate = gate.label(),
            theta_deg = theta,
            phi_deg = phi,
            "applied gate"
        );

        self.previous = Some(current);
        self.theta_deg = theta;
        self.phi_deg = phi;
    }

    /// Dispatch an input event
    pub fn handle_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::SetTheta(theta) => self.set_theta(theta),
            StateEvent::SetPhi(phi) => self.set_phi(phi),
            StateEvent::ApplyGate(gate) => self.apply_gate(gate),
        }
    }
}
