mod tessellate_mesh;
mod triangulate;

pub use tessellate_mesh::{TessellateComposite, TessellateMesh};

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::error::{Result, TessellationError};

/// How each face is split into triangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriangulationMode {
    /// Fan from the first corner. Correct only for convex faces.
    #[default]
    Fan,
    /// Constrained Delaunay triangulation of the ring projected into the
    /// face plane. Handles concave faces; degenerate faces fall back to the
    /// fan.
    Constrained,
}

/// Parameters controlling tessellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TessellationParams {
    /// Face triangulation strategy.
    pub mode: TriangulationMode,
}

/// One interleaved vertex of a render buffer.
///
/// Color and normal belong to the face the vertex was emitted for, so a
/// mesh vertex shared by several faces appears once per face.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RenderVertex {
    /// Position.
    pub position: [f32; 3],
    /// RGBA color, each channel in `0.0..=1.0`.
    pub color: [f32; 4],
    /// Unit face normal.
    pub normal: [f32; 3],
}

impl RenderVertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: usize = size_of::<Self>();
    /// Byte offset of the position attribute.
    pub const POSITION_OFFSET: usize = offset_of!(Self, position);
    /// Byte offset of the color attribute.
    pub const COLOR_OFFSET: usize = offset_of!(Self, color);
    /// Byte offset of the normal attribute.
    pub const NORMAL_OFFSET: usize = offset_of!(Self, normal);
}

/// Element type of an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    U8,
    U16,
    U32,
}

impl IndexFormat {
    /// Narrowest format able to address `vertex_count` vertices.
    #[must_use]
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count < 1 << 8 {
            Self::U8
        } else if vertex_count < 1 << 16 {
            Self::U16
        } else {
            Self::U32
        }
    }

    /// Size of one index in bytes.
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }
}

/// Triangle-list indices in the narrowest type for the vertex count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Default for IndexBuffer {
    fn default() -> Self {
        Self::U8(Vec::new())
    }
}

impl IndexBuffer {
    /// Packs `indices` using the format chosen for `vertex_count`.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::Failed`] if an index does not fit the
    /// chosen format, which means it is out of range for `vertex_count`.
    pub fn pack(indices: &[usize], vertex_count: usize) -> Result<Self> {
        fn narrow<T: TryFrom<usize>>(indices: &[usize]) -> Result<Vec<T>> {
            indices
                .iter()
                .map(|&i| {
                    T::try_from(i).map_err(|_| {
                        TessellationError::Failed(format!("index {i} overflows index format"))
                            .into()
                    })
                })
                .collect()
        }

        Ok(match IndexFormat::for_vertex_count(vertex_count) {
            IndexFormat::U8 => Self::U8(narrow(indices)?),
            IndexFormat::U16 => Self::U16(narrow(indices)?),
            IndexFormat::U32 => Self::U32(narrow(indices)?),
        })
    }

    /// Element type of the buffer.
    #[must_use]
    pub fn format(&self) -> IndexFormat {
        match self {
            Self::U8(_) => IndexFormat::U8,
            Self::U16(_) => IndexFormat::U16,
            Self::U32(_) => IndexFormat::U32,
        }
    }

    /// Number of indices.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
        }
    }

    /// `true` if there are no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    /// Index at position `i`, widened.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            Self::U8(v) => v.get(i).map(|&x| u32::from(x)),
            Self::U16(v) => v.get(i).map(|&x| u32::from(x)),
            Self::U32(v) => v.get(i).copied(),
        }
    }

    /// Raw bytes in native endianness, ready for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::U8(v) => v.as_slice(),
            Self::U16(v) => bytemuck::cast_slice(v),
            Self::U32(v) => bytemuck::cast_slice(v),
        }
    }
}

/// Flat vertex and index data for rasterization.
#[derive(Debug, Clone, Default)]
pub struct RenderBuffer {
    /// Interleaved vertices.
    pub vertices: Vec<RenderVertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: IndexBuffer,
}

impl RenderBuffer {
    /// Raw vertex bytes, [`RenderVertex::STRIDE`] bytes per vertex.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Vertex indices of triangle `i`, widened.
    #[must_use]
    pub fn triangle(&self, i: usize) -> Option<[u32; 3]> {
        Some([
            self.indices.get(3 * i)?,
            self.indices.get(3 * i + 1)?,
            self.indices.get(3 * i + 2)?,
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout() {
        assert_eq!(RenderVertex::STRIDE, 40);
        assert_eq!(RenderVertex::POSITION_OFFSET, 0);
        assert_eq!(RenderVertex::COLOR_OFFSET, 12);
        assert_eq!(RenderVertex::NORMAL_OFFSET, 28);
    }

    #[test]
    fn index_format_thresholds() {
        assert_eq!(IndexFormat::for_vertex_count(0), IndexFormat::U8);
        assert_eq!(IndexFormat::for_vertex_count(255), IndexFormat::U8);
        assert_eq!(IndexFormat::for_vertex_count(256), IndexFormat::U16);
        assert_eq!(IndexFormat::for_vertex_count(65_535), IndexFormat::U16);
        assert_eq!(IndexFormat::for_vertex_count(65_536), IndexFormat::U32);
    }

    #[test]
    fn pack_narrows_and_exposes_bytes() {
        let buffer = IndexBuffer::pack(&[0, 1, 2, 2, 3, 0], 300).unwrap();
        assert_eq!(buffer.format(), IndexFormat::U16);
        assert_eq!(buffer.triangle_count(), 2);
        assert_eq!(buffer.as_bytes().len(), buffer.len() * buffer.format().size());
        assert_eq!(buffer.get(3), Some(2));
        assert_eq!(buffer.get(6), None);
    }

    #[test]
    fn pack_rejects_out_of_range_index() {
        assert!(IndexBuffer::pack(&[0, 1, 256], 10).is_err());
    }
}
