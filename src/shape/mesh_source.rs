use crate::math::{Point, Real};
use crate::shape::{Triangle, VertexAttributeBuffers};

/// Read access to an indexed polygon soup.
///
/// This is the only view of the input geometry the partitioner relies on: a list of
/// primitives with stable indices, each referencing vertices of a shared position
/// buffer. Primitives are usually triangles but may have any number of vertices,
/// including zero.
pub trait MeshSource {
    /// The number of primitives of this mesh.
    fn num_primitives(&self) -> usize;

    /// The vertex indices of the `i`-th primitive.
    fn primitive_vertices(&self, i: usize) -> &[u32];

    /// The shared vertex position buffer.
    fn vertices(&self) -> &[Point<Real>];

    /// The optional per-vertex attributes of this mesh.
    fn vertex_attributes(&self) -> Option<&VertexAttributeBuffers> {
        None
    }

    /// The position of the `i`-th vertex.
    #[inline]
    fn vertex(&self, i: u32) -> Point<Real> {
        self.vertices()[i as usize]
    }

    /// The fan triangulation of the `i`-th primitive, as vertex index triples.
    ///
    /// A triangle yields itself. Primitives with fewer than three vertices yield nothing.
    fn primitive_triangles(&self, i: usize) -> FanTriangles<'_> {
        FanTriangles {
            indices: self.primitive_vertices(i),
            next: 1,
        }
    }

    /// The fan triangulation of the `i`-th primitive, as triangles.
    fn primitive_triangle_shapes(&self, i: usize) -> impl Iterator<Item = Triangle> + '_
    where
        Self: Sized,
    {
        self.primitive_triangles(i)
            .map(move |[a, b, c]| Triangle::new(self.vertex(a), self.vertex(b), self.vertex(c)))
    }
}

/// Iterator over the triangles of a convex polygon fan, anchored on its first vertex.
#[derive(Clone, Debug)]
pub struct FanTriangles<'a> {
    indices: &'a [u32],
    next: usize,
}

impl Iterator for FanTriangles<'_> {
    type Item = [u32; 3];

    fn next(&mut self) -> Option<[u32; 3]> {
        if self.next + 1 >= self.indices.len() {
            return None;
        }

        let tri = [
            self.indices[0],
            self.indices[self.next],
            self.indices[self.next + 1],
        ];
        self.next += 1;
        Some(tri)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indices.len().saturating_sub(self.next + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FanTriangles<'_> {}
