use crate::math::{Point, Real};
use crate::partitioning::split_axes::MAX_BUCKETS;
use crate::partitioning::{SplitAxes, TriangleSummary};
use arrayvec::ArrayVec;

/// Identifies a tree cell relative to its parent's center.
///
/// Bit `k` is set iff the cell lies strictly above the center along the `k`-th split axis.
pub type BucketKey = u8;

/// The non-empty buckets of a split, sorted by increasing key.
pub type PartitionResult = ArrayVec<(BucketKey, Vec<TriangleSummary>), MAX_BUCKETS>;

/// Computes the key of the bucket containing `point`.
///
/// A coordinate equal to the center one goes to the low side (bit cleared).
#[inline]
pub fn bucket_key(point: &Point<Real>, center: &Point<Real>, axes: &SplitAxes) -> BucketKey {
    axes.as_slice()
        .iter()
        .enumerate()
        .fold(0, |key, (bit, axis)| {
            if point[*axis] > center[*axis] {
                key | (1 << bit)
            } else {
                key
            }
        })
}

/// Distributes `set` into the buckets around `center`.
///
/// Each summary lands in exactly one bucket, chosen by [`bucket_key`] on its centroid.
/// Summaries keep their relative order inside a bucket. Buckets are returned in increasing
/// key order and empty buckets are omitted, so at most `2^axes.len()` buckets are returned,
/// all of them non-empty.
pub fn partition(
    set: &[TriangleSummary],
    center: &Point<Real>,
    axes: &SplitAxes,
) -> PartitionResult {
    let mut buckets: [Vec<TriangleSummary>; MAX_BUCKETS] = Default::default();

    for summary in set {
        let key = bucket_key(&summary.centroid, center, axes);
        buckets[key as usize].push(*summary);
    }

    buckets
        .into_iter()
        .take(axes.num_buckets())
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(key, bucket)| (key as BucketKey, bucket))
        .collect()
}
