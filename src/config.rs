//! Configuration of a partitioning run.

use crate::error::ConfigurationError;
use crate::partitioning::SplitAxes;
use core::fmt;
use core::num::NonZeroUsize;

/// The kind of tree to build.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PartitionMode {
    /// Split cells along `x`, `y` and `z`, up to 8 children per branch.
    #[default]
    Octree,
    /// Split cells along `x` and `y` (Z-up), up to 4 children per branch.
    Quadtree,
}

impl PartitionMode {
    /// The axes cells are split along in this mode.
    pub fn split_axes(self) -> SplitAxes {
        match self {
            PartitionMode::Octree => SplitAxes::xyz(),
            PartitionMode::Quadtree => SplitAxes::xy(),
        }
    }

    /// The name given to the root of the output hierarchy.
    pub fn root_name(self) -> &'static str {
        match self {
            PartitionMode::Octree => "octree-root",
            PartitionMode::Quadtree => "quadtree-root",
        }
    }
}

/// The representation materialized from the partition tree.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Renderable triangle batches keeping the selected vertex attributes.
    #[default]
    Geometry,
    /// Position-only collision polygons.
    CollisionVolume,
    /// A serializable hierarchy of triangle ids.
    GenericHierarchy,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            OutputKind::Geometry => "geometry",
            OutputKind::CollisionVolume => "collision volume",
            OutputKind::GenericHierarchy => "generic hierarchy",
        })
    }
}

/// How much of a run is traced.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// Nothing is logged.
    #[default]
    Silent = 0,
    /// The bucket sizes of every split are logged.
    Sizes = 1,
    /// Like `Sizes`, and every output node gets a debug marker (random colour and
    /// tight bounds).
    Markers = 2,
}

impl Verbosity {
    /// The verbosity matching the numeric level `0`, `1` or `2`.
    pub fn from_level(level: u8) -> Result<Self, ConfigurationError> {
        match level {
            0 => Ok(Verbosity::Silent),
            1 => Ok(Verbosity::Sizes),
            2 => Ok(Verbosity::Markers),
            _ => Err(ConfigurationError::InvalidVerbosity(level)),
        }
    }

    /// The numeric level of this verbosity.
    #[inline]
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// What the partitioner sees as one element when the input is made of polygons.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExtractionMode {
    /// Polygons are triangulated first and every triangle is partitioned on its own.
    #[default]
    Triangles,
    /// Every polygon is partitioned as a whole, using the mean of all its vertices.
    Polygons,
}

/// The parameters of a partitioning run.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartitionConfig {
    /// The maximum number of triangles held by a leaf. Must be positive.
    pub max_triangles_per_leaf: usize,
    /// Octree or quadtree.
    pub mode: PartitionMode,
    /// The expected kind of output sink.
    pub output: OutputKind,
    /// Trace level.
    pub verbosity: Verbosity,
    /// How polygon meshes are summarized.
    pub extraction: ExtractionMode,
    /// Seed of the debug marker colours.
    pub marker_seed: u64,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            max_triangles_per_leaf: 4,
            mode: PartitionMode::Octree,
            output: OutputKind::Geometry,
            verbosity: Verbosity::Silent,
            extraction: ExtractionMode::Triangles,
            marker_seed: 0,
        }
    }
}

impl PartitionConfig {
    /// Octree of renderable geometry, 4 triangles per leaf.
    pub fn octree() -> Self {
        Self::default()
    }

    /// Quadtree of collision polygons, 64 triangles per leaf.
    pub fn quadtree() -> Self {
        Self {
            max_triangles_per_leaf: 64,
            mode: PartitionMode::Quadtree,
            output: OutputKind::CollisionVolume,
            ..Self::default()
        }
    }

    /// Sets the leaf capacity.
    pub fn with_max_triangles_per_leaf(mut self, max: usize) -> Self {
        self.max_triangles_per_leaf = max;
        self
    }

    /// Sets the tree kind.
    pub fn with_mode(mut self, mode: PartitionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the expected output kind.
    pub fn with_output(mut self, output: OutputKind) -> Self {
        self.output = output;
        self
    }

    /// Sets the trace level.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Sets the polygon extraction mode.
    pub fn with_extraction(mut self, extraction: ExtractionMode) -> Self {
        self.extraction = extraction;
        self
    }

    /// Sets the seed of the debug marker colours.
    pub fn with_marker_seed(mut self, seed: u64) -> Self {
        self.marker_seed = seed;
        self
    }

    /// Checks this configuration, returning the validated leaf capacity.
    pub fn validate(&self) -> Result<NonZeroUsize, ConfigurationError> {
        NonZeroUsize::new(self.max_triangles_per_leaf)
            .ok_or(ConfigurationError::NonPositiveThreshold)
    }
}
