//! Bloch sphere visualization core
//!
//! Geometry and state math for the Bloch sphere viewer:
//!
//! - [`primitive`] - UV sphere mesh generation
//! - [`spherical`] - spherical angle <-> Cartesian vector conversion
//! - [`gate`] - fixed sign-flip gate reflections
//! - [`state`] - visualization state (theta/phi angles, trail snapshot)
//! - [`session`] - session persistence (RON)
//!
//! Rendering, windowing, and GUI layout live in downstream crates; this
//! crate stays pure CPU math over flat vertex data.

pub mod constants;
pub mod gate;
pub mod primitive;
pub mod session;
pub mod spherical;
pub mod state;

// Re-exports for convenience
pub use gate::PauliGate;
pub use primitive::{SphereMesh, generate_sphere_mesh, generate_sphere_mesh_with_segments};
pub use session::{Session, SessionError};
pub use spherical::{cartesian_to_spherical, spherical_to_cartesian};
pub use state::{BlochState, StateEvent};
