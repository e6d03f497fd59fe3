//! Sphere mesh generation (UV sphere)

use std::f32::consts::PI;

use super::SphereMesh;

/// Generate a UV sphere mesh with the default viewer resolution
pub fn generate_sphere_mesh(radius: f32) -> SphereMesh {
    use crate::constants::{SPHERE_RINGS, SPHERE_SECTORS};
    generate_sphere_mesh_with_segments(radius, SPHERE_RINGS, SPHERE_SECTORS)
}

/// Generate a UV sphere mesh with custom resolution
///
/// The pole axis runs along +Y: ring 0 collapses to the north pole,
/// ring `rings` to the south pole. Callers must pass `rings >= 1` and
/// `sectors >= 1`; lower counts are not validated and produce
/// degenerate (zero-area) geometry rather than an error.
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `rings` - Number of latitude bands
/// * `sectors` - Number of longitude segments
pub fn generate_sphere_mesh_with_segments(radius: f32, rings: u32, sectors: u32) -> SphereMesh {
    let mut positions = Vec::with_capacity(((rings + 1) * (sectors + 1)) as usize);
    let mut indices = Vec::with_capacity((rings * sectors * 6) as usize);

    // Generate grid-point positions
    for r in 0..=rings {
        let theta = (r as f32 / rings as f32) * PI; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for s in 0..=sectors {
            let phi = (s as f32 / sectors as f32) * 2.0 * PI; // 0 to 2*PI
            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            positions.push([radius * x, radius * y, radius * z]);
        }
    }

    // Generate indices, two triangles per cell, row-major flattening
    for r in 0..rings {
        for s in 0..sectors {
            let current = r * (sectors + 1) + s;
            let next = current + sectors + 1;

            // Triangle 1
            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            // Triangle 2
            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    SphereMesh { positions, indices }
}
