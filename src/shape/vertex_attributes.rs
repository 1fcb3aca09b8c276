use crate::math::{Real, Vector};
use crate::shape::MeshBuilderError;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Selects the optional per-vertex attributes carried along with positions.
pub struct VertexAttributes(u8);

bitflags::bitflags! {
    impl VertexAttributes: u8 {
        /// Per-vertex normals.
        const NORMAL = 1;
        /// Per-vertex texture coordinates.
        const TEXCOORD = 1 << 1;
        /// Per-vertex binormals.
        const BINORMAL = 1 << 2;
    }
}

/// Optional per-vertex attribute buffers, parallel to a mesh vertex buffer.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexAttributeBuffers {
    /// The vertex normals.
    pub normals: Option<Vec<Vector<Real>>>,
    /// The vertex texture coordinates.
    pub texcoords: Option<Vec<[Real; 2]>>,
    /// The vertex binormals.
    pub binormals: Option<Vec<Vector<Real>>>,
}

impl VertexAttributeBuffers {
    /// The set of attributes actually present.
    pub fn available(&self) -> VertexAttributes {
        let mut result = VertexAttributes::empty();
        result.set(VertexAttributes::NORMAL, self.normals.is_some());
        result.set(VertexAttributes::TEXCOORD, self.texcoords.is_some());
        result.set(VertexAttributes::BINORMAL, self.binormals.is_some());
        result
    }

    /// Checks that every present buffer has exactly `num_vertices` elements.
    pub fn check_len(&self, num_vertices: usize) -> Result<(), MeshBuilderError> {
        let lens = [
            ("normals", self.normals.as_ref().map(Vec::len)),
            ("texcoords", self.texcoords.as_ref().map(Vec::len)),
            ("binormals", self.binormals.as_ref().map(Vec::len)),
        ];

        for (attribute, len) in lens {
            if let Some(found) = len {
                if found != num_vertices {
                    return Err(MeshBuilderError::AttributeLengthMismatch {
                        attribute,
                        expected: num_vertices,
                        found,
                    });
                }
            }
        }

        Ok(())
    }

    /// Gathers the `selected` attributes of the vertices `ids`, in that order.
    ///
    /// Attributes that are selected but not present are left out.
    pub fn gather(&self, selected: VertexAttributes, ids: &[u32]) -> Self {
        fn pick<T: Copy>(buf: &Option<Vec<T>>, keep: bool, ids: &[u32]) -> Option<Vec<T>> {
            let buf = buf.as_ref().filter(|_| keep)?;
            Some(ids.iter().map(|i| buf[*i as usize]).collect())
        }

        Self {
            normals: pick(
                &self.normals,
                selected.contains(VertexAttributes::NORMAL),
                ids,
            ),
            texcoords: pick(
                &self.texcoords,
                selected.contains(VertexAttributes::TEXCOORD),
                ids,
            ),
            binormals: pick(
                &self.binormals,
                selected.contains(VertexAttributes::BINORMAL),
                ids,
            ),
        }
    }
}
