//! Spatial partitioning of triangle sets into octrees and quadtrees.
//!
//! The pipeline is: [`extract_summaries`] turns every primitive of a mesh into a
//! [`TriangleSummary`], then a [`TreeBuilder`] recursively [`partition`]s the summaries
//! around their [`compute_center`] until every leaf is small enough.

pub use self::builder::{build, TreeBuilder};
pub use self::center::compute_center;
pub use self::partition::{bucket_key, partition, BucketKey, PartitionResult};
pub use self::split_axes::{SplitAxes, MAX_BUCKETS, MAX_SPLIT_AXES};
pub use self::tree::{BuildStats, TreeNode};
pub use self::triangle_summary::{extract_summaries, TriangleSummary};

mod builder;
mod center;
mod partition;
mod split_axes;
mod tree;
mod triangle_summary;
