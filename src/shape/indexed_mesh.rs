use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{MeshSource, Triangle, VertexAttributeBuffers};

/// Indicated an inconsistency while building a mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A mesh must contain at least one primitive.
    #[error("A mesh must contain at least one primitive.")]
    EmptyIndices,
    /// A primitive references a vertex that does not exist.
    #[error("the primitive {primitive} references the vertex {index} which is out of bounds.")]
    VertexIndexOutOfBounds {
        /// The primitive with the invalid reference.
        primitive: u32,
        /// The invalid vertex index.
        index: u32,
    },
    /// An attribute buffer does not have one element per vertex.
    #[error("the {attribute} buffer has {found} elements but the mesh has {expected} vertices.")]
    AttributeLengthMismatch {
        /// The name of the attribute buffer.
        attribute: &'static str,
        /// The number of vertices of the mesh.
        expected: usize,
        /// The number of elements of the attribute buffer.
        found: usize,
    },
}

pub(crate) fn check_indices<'a>(
    num_vertices: usize,
    primitives: impl IntoIterator<Item = &'a [u32]>,
) -> Result<(), MeshBuilderError> {
    for (primitive, ids) in primitives.into_iter().enumerate() {
        if let Some(index) = ids.iter().find(|i| **i as usize >= num_vertices) {
            return Err(MeshBuilderError::VertexIndexOutOfBounds {
                primitive: primitive as u32,
                index: *index,
            });
        }
    }

    Ok(())
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
/// A triangle mesh given as a vertex buffer and an index buffer.
pub struct IndexedMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    attributes: VertexAttributeBuffers,
}

impl IndexedMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, MeshBuilderError> {
        if indices.is_empty() {
            return Err(MeshBuilderError::EmptyIndices);
        }

        check_indices(vertices.len(), indices.iter().map(|idx| &idx[..]))?;

        Ok(Self {
            vertices,
            indices,
            attributes: VertexAttributeBuffers::default(),
        })
    }

    /// Attaches per-vertex attributes to this mesh.
    pub fn with_attributes(
        mut self,
        attributes: VertexAttributeBuffers,
    ) -> Result<Self, MeshBuilderError> {
        attributes.check_len(self.vertices.len())?;
        self.attributes = attributes;
        Ok(self)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The per-vertex attributes of this mesh.
    #[inline]
    pub fn attributes(&self) -> &VertexAttributeBuffers {
        &self.attributes
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Get the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }

    /// The axis-aligned bounding box of the vertices referenced by this mesh.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.indices.iter().flatten().map(|i| self.vertices[*i as usize]))
    }
}

impl MeshSource for IndexedMesh {
    #[inline]
    fn num_primitives(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    fn primitive_vertices(&self, i: usize) -> &[u32] {
        &self.indices[i]
    }

    #[inline]
    fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    fn vertex_attributes(&self) -> Option<&VertexAttributeBuffers> {
        Some(&self.attributes)
    }
}

/// Concatenates several meshes into a single one.
///
/// Vertex buffers are appended in order and the index buffers are offset accordingly.
/// Only vertex positions are kept.
pub fn merge_meshes<'a>(
    meshes: impl IntoIterator<Item = &'a IndexedMesh>,
) -> Result<IndexedMesh, MeshBuilderError> {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for mesh in meshes {
        let base = vertices.len() as u32;
        vertices.extend_from_slice(&mesh.vertices);
        indices.extend(mesh.indices.iter().map(|idx| idx.map(|i| i + base)));
    }

    IndexedMesh::new(vertices, indices)
}
