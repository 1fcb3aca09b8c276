use crate::math::{Point, Real};
use crate::shape::MeshSource;
use crate::utils;

/// The centroid of one primitive of the input mesh, tagged with the primitive index.
///
/// Summaries are all the partitioner sees of the input geometry: the `id` is what
/// output sinks use to pull the actual vertices back from the mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleSummary {
    /// Index of the summarized primitive in its mesh.
    pub id: u32,
    /// Mean position of the primitive vertices.
    pub centroid: Point<Real>,
}

impl TriangleSummary {
    /// Creates a new summary.
    #[inline]
    pub fn new(id: u32, centroid: Point<Real>) -> Self {
        Self { id, centroid }
    }
}

/// Computes one summary per primitive of `mesh`, in primitive order.
///
/// The centroid is the mean of all the primitive vertices: three for a triangle, `N`
/// for an untriangulated polygon. A primitive without vertices gets the origin as
/// centroid and is still summarized.
pub fn extract_summaries<M: MeshSource>(mesh: &M) -> Vec<TriangleSummary> {
    (0..mesh.num_primitives())
        .map(|i| {
            let centroid = utils::center_of(
                mesh.primitive_vertices(i)
                    .iter()
                    .map(|vid| mesh.vertex(*vid)),
            );
            TriangleSummary::new(i as u32, centroid)
        })
        .collect()
}
