//! Primitive mesh generation for the Bloch sphere viewer
//!
//! Generates flat position/index buffers ready for GPU upload. The only
//! primitive the viewer needs is the UV sphere; the coordinate axes and
//! state vector are line overlays built in the scene crate.

mod sphere;

pub use sphere::{generate_sphere_mesh, generate_sphere_mesh_with_segments};

/// A UV sphere mesh: grid-point positions plus triangle indices.
///
/// Immutable after generation. Positions are laid out row-major,
/// `index(r, s) = r * (sectors + 1) + s`, so a mesh built from
/// `rings` x `sectors` cells holds `(rings + 1) * (sectors + 1)`
/// positions and `rings * sectors * 6` indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    /// Grid-point positions, one per (ring, sector) pair
    pub positions: Vec<[f32; 3]>,
    /// Triangle indices, two triangles per grid cell
    pub indices: Vec<u32>,
}
