use crate::math::{Point, Real};
use crate::partitioning::TriangleSummary;
use crate::utils;

/// The mean centroid of a set of triangle summaries.
///
/// This is the split point of every tree cell. Returns the origin for an empty set.
#[inline]
pub fn compute_center(set: &[TriangleSummary]) -> Point<Real> {
    utils::center_of(set.iter().map(|s| s.centroid))
}
