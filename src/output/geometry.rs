use crate::config::{OutputKind, PartitionMode};
use crate::math::{Point, Real};
use crate::output::naming::{branch_name, leaf_name, root_name};
use crate::output::{DebugMarker, LeafPayload, OutputSink, SceneNode};
use crate::partitioning::TriangleSummary;
use crate::shape::{MeshSource, VertexAttributeBuffers, VertexAttributes};
use std::collections::HashMap;

/// A renderable batch of triangles with its own compact vertex buffer.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBatch {
    /// The vertices referenced by this batch, in order of first use.
    pub vertices: Vec<Point<Real>>,
    /// The kept attributes of `vertices`.
    pub attributes: VertexAttributeBuffers,
    /// The triangles, indexing `vertices`.
    pub indices: Vec<[u32; 3]>,
    /// The source primitive of each triangle.
    pub primitives: Vec<u32>,
}

impl LeafPayload for GeometryBatch {
    fn num_triangles(&self) -> usize {
        self.indices.len()
    }
}

/// Output sink producing a hierarchy of [`GeometryBatch`]es.
///
/// Each leaf copies the vertices its triangles use, along with the selected vertex
/// attributes present in the source mesh.
#[derive(Clone, Debug)]
pub struct GeometrySink {
    attributes: VertexAttributes,
}

impl Default for GeometrySink {
    fn default() -> Self {
        Self::new(VertexAttributes::all())
    }
}

impl GeometrySink {
    /// A sink keeping the `attributes` of the source vertices.
    pub fn new(attributes: VertexAttributes) -> Self {
        Self { attributes }
    }

    /// A sink keeping vertex positions only.
    pub fn positions_only() -> Self {
        Self::new(VertexAttributes::empty())
    }

    /// Builds the batch of the given primitives of `mesh`.
    pub fn batch<M: MeshSource>(
        &self,
        mesh: &M,
        triangles: &[TriangleSummary],
    ) -> GeometryBatch {
        let mut new_vtx_index = HashMap::new();
        let mut source_ids = Vec::new();
        let mut result = GeometryBatch::default();

        for summary in triangles {
            for tri in mesh.primitive_triangles(summary.id as usize) {
                let new_tri = tri.map(|vid| {
                    *new_vtx_index.entry(vid).or_insert_with(|| {
                        source_ids.push(vid);
                        result.vertices.push(mesh.vertex(vid));
                        result.vertices.len() as u32 - 1
                    })
                });
                result.indices.push(new_tri);
                result.primitives.push(summary.id);
            }
        }

        if let Some(attributes) = mesh.vertex_attributes() {
            result.attributes = attributes.gather(self.attributes, &source_ids);
        }

        result
    }
}

impl OutputSink for GeometrySink {
    type Handle = SceneNode<GeometryBatch>;

    fn kind(&self) -> OutputKind {
        OutputKind::Geometry
    }

    fn on_leaf<M: MeshSource>(
        &mut self,
        mesh: &M,
        triangles: &[TriangleSummary],
        depth: usize,
        marker: Option<DebugMarker>,
    ) -> Self::Handle {
        SceneNode::leaf(leaf_name(depth), self.batch(mesh, triangles), marker)
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
