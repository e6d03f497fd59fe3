//! Bloch sphere scene data
//!
//! CPU-side camera and line geometry for the Bloch sphere viewer. This
//! crate turns [`bloch_core`] state into the flat buffers a rendering
//! backend uploads; it owns no GPU resources itself.
//!
//! # Module Structure
//!
//! ```text
//! bloch-scene/
//! ├── camera.rs    # Orbit camera (yaw/pitch/distance around origin)
//! ├── config.rs    # Scene configuration (colors, sensitivity)
//! ├── vertex.rs    # Position + color line vertex format
//! ├── axes.rs      # Coordinate axes overlay
//! └── overlay.rs   # State vector + trail overlay
//! ```

pub mod axes;
pub mod camera;
pub mod config;
pub mod overlay;
pub mod vertex;

// Re-exports for convenience
pub use axes::generate_axis_vertices;
pub use camera::{CameraUniform, OrbitCamera};
pub use config::{AxesConfig, OverlayConfig, SceneConfig};
pub use overlay::generate_vector_vertices;
pub use vertex::PositionColorVertex;
