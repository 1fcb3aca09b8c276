use crate::config::{OutputKind, PartitionMode};
use crate::output::naming::{branch_name, leaf_name, root_name};
use crate::output::{DebugMarker, LeafPayload, OutputSink, SceneNode};
use crate::partitioning::TriangleSummary;
use crate::shape::{MeshSource, Triangle};

/// The collision polygons of a leaf.
///
/// Only vertex positions are kept.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionSolids {
    /// The non-degenerate triangles of the leaf.
    pub triangles: Vec<Triangle>,
    /// The source primitive of each triangle.
    pub primitives: Vec<u32>,
    /// The number of degenerate triangles that were left out.
    pub num_discarded: usize,
}

impl LeafPayload for CollisionSolids {
    fn num_triangles(&self) -> usize {
        self.triangles.len()
    }
}

/// Output sink producing a hierarchy of [`CollisionSolids`].
///
/// Triangles with collinear vertices cannot be used as collision polygons and are
/// skipped.
#[derive(Clone, Debug, Default)]
pub struct CollisionSink {
    num_discarded: usize,
}

impl CollisionSink {
    /// A new collision sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The total number of degenerate triangles skipped so far.
    pub fn num_discarded(&self) -> usize {
        self.num_discarded
    }

    /// Builds the collision polygons of the given primitives of `mesh`.
    pub fn solids<M: MeshSource>(
        &self,
        mesh: &M,
        triangles: &[TriangleSummary],
    ) -> CollisionSolids {
        let mut result = CollisionSolids::default();

        for summary in triangles {
            for tri in mesh.primitive_triangle_shapes(summary.id as usize) {
                if tri.is_affinely_dependent() {
                    result.num_discarded += 1;
                    continue;
                }

                result.triangles.push(tri);
                result.primitives.push(summary.id);
            }
        }

        if result.num_discarded != 0 {
            log::debug!(
                "{} degenerate triangles skipped in a collision leaf.",
                result.num_discarded
            );
        }

        result
    }
}

impl OutputSink for CollisionSink {
    type Handle = SceneNode<CollisionSolids>;

    fn kind(&self) -> OutputKind {
        OutputKind::CollisionVolume
    }

    fn on_leaf<M: MeshSource>(
        &mut self,
        mesh: &M,
        triangles: &[TriangleSummary],
        depth: usize,
        marker: Option<DebugMarker>,
    ) -> Self::Handle {
        let solids = self.solids(mesh, triangles);
        self.num_discarded += solids.num_discarded;
        SceneNode::leaf(leaf_name(depth), solids, marker)
    }

    fn on_branch(
        &mut self,
        children: Vec<Self::Handle>,
        depth: usize,
        marker: Option<DebugMarker>,
    ) -> Self::Handle {
        SceneNode::group(branch_name(depth), children, marker)
    }

    fn on_root(&mut self, mode: PartitionMode, children: Vec<Self::Handle>) -> Self::Handle {
        SceneNode::group(root_name(mode), children, None)
    }
}
