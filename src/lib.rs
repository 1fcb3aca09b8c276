/*!
octreefy
========

**octreefy** partitions static triangle meshes into balanced octrees and quadtrees
whose leaves hold at most a configurable number of triangles. The split point of
every cell is the mean centroid of the triangles it contains, so the tree adapts to
the actual distribution of the geometry and never contains empty branches.

The resulting tree is handed to an [`OutputSink`](output::OutputSink) which turns it
into renderable batches, collision volumes, or a serializable hierarchy.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/octreefy/0.1.0")]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod config;
pub mod error;
pub mod octreefier;
pub mod output;
pub mod partitioning;
pub mod shape;
pub mod utils;

pub use self::config::{ExtractionMode, OutputKind, PartitionConfig, PartitionMode, Verbosity};
pub use self::error::{ConfigurationError, InputShapeError, OctreefyError};
pub use self::octreefier::{
    build_tree, octreefy, quadtreefy, Octreefier, OctreefyOutput, Triangulation,
};

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    ///
    /// Quadtrees are built from 3D points as well, they only split along two of
    /// these axes.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
