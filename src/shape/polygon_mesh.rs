use crate::math::{Point, Real};
use crate::shape::indexed_mesh::check_indices;
use crate::shape::{IndexedMesh, MeshBuilderError, MeshSource, VertexAttributeBuffers};
use smallvec::SmallVec;

/// The vertex indices of a single polygon.
pub type PolygonIndices = SmallVec<[u32; 4]>;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
/// A mesh made of arbitrary polygons, before triangulation.
///
/// Polygons are assumed convex. A polygon may reference any number of vertices,
/// including zero.
pub struct PolygonMesh {
    vertices: Vec<Point<Real>>,
    polygons: Vec<PolygonIndices>,
    attributes: VertexAttributeBuffers,
}

impl PolygonMesh {
    /// Creates a new polygon mesh from a vertex buffer and a list of polygons.
    pub fn new<P: Into<PolygonIndices>>(
        vertices: Vec<Point<Real>>,
        polygons: impl IntoIterator<Item = P>,
    ) -> Result<Self, MeshBuilderError> {
        let polygons: Vec<PolygonIndices> = polygons.into_iter().map(Into::into).collect();

        if polygons.is_empty() {
            return Err(MeshBuilderError::EmptyIndices);
        }

        check_indices(vertices.len(), polygons.iter().map(|p| &p[..]))?;

        Ok(Self {
            vertices,
            polygons,
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

    /// The polygons of this mesh.
    #[inline]
    pub fn polygons(&self) -> &[PolygonIndices] {
        &self.polygons
    }

    /// Fan-triangulates every polygon.
    ///
    /// Returns the triangle mesh together with, for each of its triangles, the index of the
    /// polygon it was cut from. Polygons with less than three vertices produce no triangle.
    pub fn triangulated(&self) -> Result<(IndexedMesh, Vec<u32>), MeshBuilderError> {
        let mut indices = Vec::with_capacity(self.polygons.len());
        let mut origins = Vec::with_capacity(self.polygons.len());

        for i in 0..self.polygons.len() {
            for tri in self.primitive_triangles(i) {
                indices.push(tri);
                origins.push(i as u32);
            }
        }

        let mesh = IndexedMesh::new(self.vertices.clone(), indices)?
            .with_attributes(self.attributes.clone())?;
        Ok((mesh, origins))
    }
}

impl MeshSource for PolygonMesh {
    #[inline]
    fn num_primitives(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    fn primitive_vertices(&self, i: usize) -> &[u32] {
        &self.polygons[i]
    }

    #[inline]
    fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    fn vertex_attributes(&self) -> Option<&VertexAttributeBuffers> {
        Some(&self.attributes)
    }
}
