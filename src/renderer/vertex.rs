//! Vertex types and palette for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::ColorKey;

/// 2D vertex in pixel space with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes per vertex in an uploaded buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Raw bytes of a vertex slice, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.06, 1.0];
    pub const ORBIT: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BUTTON: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BUTTON_HOVER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BUTTON_HOVER_TEXT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// RGBA for a palette slot
pub fn color(key: ColorKey) -> [f32; 4] {
    let [r, g, b] = match key {
        ColorKey::Red => [255, 0, 0],
        ColorKey::Green => [0, 255, 0],
        ColorKey::HotPink => [255, 105, 180],
    };
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}
