use crate::config::{OutputKind, PartitionMode};
use crate::math::{Point, Real};
use crate::output::naming::{branch_name, leaf_name, root_name};
use crate::output::{DebugMarker, LeafPayload, OutputSink, SceneNode};
use crate::partitioning::{compute_center, TriangleSummary};
use crate::shape::MeshSource;

/// The content of a leaf of a generic hierarchy: references only, no geometry.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct LeafRecord {
    /// Depth of the leaf in the partition tree.
    pub depth: usize,
    /// The ids of the primitives of the leaf.
    pub triangle_ids: Vec<u32>,
    /// The mean centroid of the leaf primitives.
    pub center: Point<Real>,
}

impl LeafPayload for LeafRecord {
    fn num_triangles(&self) -> usize {
        self.triangle_ids.len()
    }
}

/// Output sink producing a lightweight hierarchy of [`LeafRecord`]s, suitable for
/// serialization or listing.
#[derive(Copy, Clone, Debug, Default)]
pub struct HierarchySink;

impl OutputSink for HierarchySink {
    type Handle = SceneNode<LeafRecord>;

    fn kind(&self) -> OutputKind {
        OutputKind::GenericHierarchy
    }

    fn on_leaf<M: MeshSource>(
        &mut self,
        _: &M,
        triangles: &[TriangleSummary],
        depth: usize,
        marker: Option<DebugMarker>,
    ) -> Self::Handle {
        let record = LeafRecord {
            depth,
            triangle_ids: triangles.iter().map(|t| t.id).collect(),
            center: compute_center(triangles),
        };
        SceneNode::leaf(leaf_name(depth), record, marker)
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
