//! Line vertex format shared by the overlay generators

use bytemuck::{Pod, Zeroable};

/// Position + color vertex used by the axes and state-vector overlays
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionColorVertex {
    /// Vertex position in world space
    pub position: [f32; 3],
    /// Vertex color (RGB)
    pub color: [f32; 3],
}

impl PositionColorVertex {
    /// Create a vertex from position and color
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}
