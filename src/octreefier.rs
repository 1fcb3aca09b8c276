//! Front-end tying extraction, tree building and materialization together.

use crate::config::{ExtractionMode, OutputKind, PartitionConfig, PartitionMode, Verbosity};
use crate::error::{ConfigurationError, InputShapeError, OctreefyError};
use crate::output::{
    materialize, CollisionSink, GeometrySink, HierarchySink, MarkerPalette, OutputScene,
    OutputSink,
};
use crate::partitioning::{
    compute_center, extract_summaries, BuildStats, TreeBuilder, TreeNode, TriangleSummary,
};
use crate::shape::{IndexedMesh, MeshSource, PolygonMesh};
use core::num::NonZeroUsize;

/// The triangle mesh derived from a polygon mesh before partitioning it.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangulation {
    /// The triangulated mesh. Triangle ids of the output refer to this mesh.
    pub mesh: IndexedMesh,
    /// For each triangle of `mesh`, the index of the polygon it was cut from.
    pub polygon_of_triangle: Vec<u32>,
}

/// The result of a partitioning run.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreefyOutput<H> {
    /// The root of the materialized hierarchy.
    pub root: H,
    /// Statistics of the partition tree.
    pub stats: BuildStats,
    /// Set if the input polygons were triangulated before partitioning.
    pub triangulation: Option<Triangulation>,
}

/// Partitions meshes according to a validated [`PartitionConfig`].
#[derive(Clone, Debug)]
pub struct Octreefier {
    config: PartitionConfig,
    max_per_leaf: NonZeroUsize,
}

impl Octreefier {
    /// Validates `config`.
    pub fn new(config: PartitionConfig) -> Result<Self, ConfigurationError> {
        let max_per_leaf = config.validate()?;
        Ok(Self {
            config,
            max_per_leaf,
        })
    }

    /// The configuration of this octreefier.
    #[inline]
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// A tree builder matching the configuration.
    pub fn tree_builder(&self) -> TreeBuilder {
        TreeBuilder::new(self.max_per_leaf, self.config.mode.split_axes())
            .with_verbosity(self.config.verbosity)
    }

    /// Builds the partition tree of the primitives of `mesh` without materializing it.
    pub fn build_tree<M: MeshSource>(&self, mesh: &M) -> Result<TreeNode, OctreefyError> {
        if mesh.num_primitives() == 0 {
            return Err(InputShapeError::NoTriangles.into());
        }

        Ok(self.build_from_summaries(extract_summaries(mesh)))
    }

    /// Partitions the primitives of `mesh` and materializes the tree through `sink`.
    ///
    /// Every primitive of `mesh` is partitioned as a single element.
    pub fn run<M: MeshSource, S: OutputSink>(
        &self,
        mesh: &M,
        sink: &mut S,
    ) -> Result<OctreefyOutput<S::Handle>, OctreefyError> {
        if sink.kind() != self.config.output {
            return Err(ConfigurationError::SinkMismatch {
                requested: self.config.output,
                provided: sink.kind(),
            }
            .into());
        }

        let tree = self.build_tree(mesh)?;
        let stats = tree.stats();

        if self.config.verbosity >= Verbosity::Sizes {
            log::info!(
                "{} leaves, {} branches, depth {}",
                stats.num_leaves,
                stats.num_branches,
                stats.max_depth
            );
        }

        let palette = (self.config.verbosity >= Verbosity::Markers)
            .then(|| MarkerPalette::new(self.config.marker_seed));
        let root = materialize(&tree, mesh, self.config.mode, sink, palette);

        Ok(OctreefyOutput {
            root,
            stats,
            triangulation: None,
        })
    }

    /// Partitions a polygon mesh, honoring the configured [`ExtractionMode`].
    pub fn run_polygons<S: OutputSink>(
        &self,
        mesh: &PolygonMesh,
        sink: &mut S,
    ) -> Result<OctreefyOutput<S::Handle>, OctreefyError> {
        match self.config.extraction {
            ExtractionMode::Polygons => self.run(mesh, sink),
            ExtractionMode::Triangles => {
                let (tris, polygon_of_triangle) =
                    mesh.triangulated().map_err(InputShapeError::from)?;
                let mut result = self.run(&tris, sink)?;
                result.triangulation = Some(Triangulation {
                    mesh: tris,
                    polygon_of_triangle,
                });
                Ok(result)
            }
        }
    }

    /// Partitions `mesh` with the sink matching the configured [`OutputKind`].
    pub fn run_default<M: MeshSource>(
        &self,
        mesh: &M,
    ) -> Result<OctreefyOutput<OutputScene>, OctreefyError> {
        fn wrap<H>(
            out: OctreefyOutput<H>,
            f: impl FnOnce(H) -> OutputScene,
        ) -> OctreefyOutput<OutputScene> {
            OctreefyOutput {
                root: f(out.root),
                stats: out.stats,
                triangulation: out.triangulation,
            }
        }

        Ok(match self.config.output {
            OutputKind::Geometry => wrap(
                self.run(mesh, &mut GeometrySink::default())?,
                OutputScene::Geometry,
            ),
            OutputKind::CollisionVolume => wrap(
                self.run(mesh, &mut CollisionSink::new())?,
                OutputScene::CollisionVolume,
            ),
            OutputKind::GenericHierarchy => wrap(
                self.run(mesh, &mut HierarchySink)?,
                OutputScene::GenericHierarchy,
            ),
        })
    }

    fn build_from_summaries(&self, summaries: Vec<TriangleSummary>) -> TreeNode {
        if self.config.verbosity >= Verbosity::Sizes {
            log::info!("{} triangles in summaries", summaries.len());
            log::info!("{} is center", compute_center(&summaries));
        }

        self.tree_builder().build(summaries)
    }
}

/// Builds the partition tree of already extracted summaries.
pub fn build_tree(
    summaries: Vec<TriangleSummary>,
    config: &PartitionConfig,
) -> Result<TreeNode, OctreefyError> {
    if summaries.is_empty() {
        return Err(InputShapeError::NoTriangles.into());
    }

    Ok(Octreefier::new(*config)?.build_from_summaries(summaries))
}

/// Builds an octree of `mesh` with at most `max_per_leaf` triangles per leaf.
pub fn octreefy<M: MeshSource, S: OutputSink>(
    mesh: &M,
    max_per_leaf: usize,
    sink: &mut S,
) -> Result<OctreefyOutput<S::Handle>, OctreefyError> {
    tree_with_mode(PartitionMode::Octree, mesh, max_per_leaf, sink)
}

/// Builds a Z-up quadtree of `mesh` with at most `max_per_leaf` triangles per leaf.
pub fn quadtreefy<M: MeshSource, S: OutputSink>(
    mesh: &M,
    max_per_leaf: usize,
    sink: &mut S,
) -> Result<OctreefyOutput<S::Handle>, OctreefyError> {
    tree_with_mode(PartitionMode::Quadtree, mesh, max_per_leaf, sink)
}

fn tree_with_mode<M: MeshSource, S: OutputSink>(
    mode: PartitionMode,
    mesh: &M,
    max_per_leaf: usize,
    sink: &mut S,
) -> Result<OctreefyOutput<S::Handle>, OctreefyError> {
    let config = PartitionConfig::default()
        .with_mode(mode)
        .with_max_triangles_per_leaf(max_per_leaf)
        .with_output(sink.kind());
    Octreefier::new(config)?.run(mesh, sink)
}
