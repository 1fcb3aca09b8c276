use crate::bounding_volume::Aabb;
use crate::config::{OutputKind, PartitionMode};
use crate::output::{DebugMarker, MarkerPalette};
use crate::partitioning::{TreeNode, TriangleSummary};
use crate::shape::MeshSource;

/// Reproducible names of the output nodes.
pub mod naming {
    use crate::config::PartitionMode;

    /// The name of a leaf at the given depth.
    pub fn leaf_name(depth: usize) -> String {
        format!("leaf-{depth}")
    }

    /// The name of a branch at the given depth.
    pub fn branch_name(depth: usize) -> String {
        format!("branch-{depth}")
    }

    /// The name of the root of a tree built in the given mode.
    pub fn root_name(mode: PartitionMode) -> String {
        mode.root_name().to_owned()
    }
}

/// Turns the nodes of a partition tree into a concrete representation.
///
/// The sink is called once per tree node, children before their parent, so that
/// every group is created from its already materialized children.
pub trait OutputSink {
    /// The output created for each node.
    type Handle;

    /// The kind of output produced by this sink.
    fn kind(&self) -> OutputKind;

    /// Materializes a leaf from the mesh primitives referenced by `triangles`.
    fn on_leaf<M: MeshSource>(
        &mut self,
        mesh: &M,
        triangles: &[TriangleSummary],
        depth: usize,
        marker: Option<DebugMarker>,
    ) -> Self::Handle;

    /// Groups the outputs of the children of a branch.
    fn on_branch(
        &mut self,
        children: Vec<Self::Handle>,
        depth: usize,
        marker: Option<DebugMarker>,
    ) -> Self::Handle;

    /// Groups the top-level outputs under the root of the hierarchy.
    fn on_root(&mut self, mode: PartitionMode, children: Vec<Self::Handle>) -> Self::Handle;
}

/// Materializes `tree` through `sink`.
///
/// The children of a branch root become the children of the output root. A leaf root
/// becomes the single child of the output root. Debug markers are generated iff a
/// `palette` is given.
pub fn materialize<M: MeshSource, S: OutputSink>(
    tree: &TreeNode,
    mesh: &M,
    mode: PartitionMode,
    sink: &mut S,
    palette: Option<MarkerPalette>,
) -> S::Handle {
    let mut walker = Walker {
        mesh,
        sink,
        palette,
    };

    let children = match tree {
        TreeNode::Leaf { .. } => vec![walker.walk(tree).0],
        TreeNode::Branch { children, .. } => {
            children.iter().map(|child| walker.walk(child).0).collect()
        }
    };

    walker.sink.on_root(mode, children)
}

/// The tight bounds of the vertices of the given primitives.
pub fn primitives_aabb<M: MeshSource>(mesh: &M, triangles: &[TriangleSummary]) -> Aabb {
    Aabb::from_points(triangles.iter().flat_map(|t| {
        mesh.primitive_vertices(t.id as usize)
            .iter()
            .map(move |vid| mesh.vertex(*vid))
    }))
}

struct Walker<'a, M, S> {
    mesh: &'a M,
    sink: &'a mut S,
    palette: Option<MarkerPalette>,
}

impl<M: MeshSource, S: OutputSink> Walker<'_, M, S> {
    fn walk(&mut self, node: &TreeNode) -> (S::Handle, Aabb) {
        match node {
            TreeNode::Leaf {
                triangles, depth, ..
            } => {
                let (marker, bounds) = match self.palette.as_mut() {
                    Some(palette) => {
                        let bounds = primitives_aabb(self.mesh, triangles);
                        (Some(palette.marker(bounds)), bounds)
                    }
                    None => (None, Aabb::new_invalid()),
                };
                let handle = self.sink.on_leaf(self.mesh, triangles, *depth, marker);
                (handle, bounds)
            }
            TreeNode::Branch { children, depth } => {
                let mut bounds = Aabb::new_invalid();
                let mut handles = Vec::with_capacity(children.len());

                for child in children {
                    let (handle, child_bounds) = self.walk(child);
                    bounds.merge(&child_bounds);
                    handles.push(handle);
                }

                let marker = self.palette.as_mut().map(|palette| palette.marker(bounds));
                let handle = self.sink.on_branch(handles, *depth, marker);
                (handle, bounds)
            }
        }
    }
}
