use crate::math::DIM;
use arrayvec::ArrayVec;
use core::fmt;

/// The maximum number of axes a cell can be split along.
pub const MAX_SPLIT_AXES: usize = DIM;

/// The maximum number of buckets produced by a single split.
pub const MAX_BUCKETS: usize = 1 << MAX_SPLIT_AXES;

/// The ordered list of coordinate axes a tree cell is split along.
///
/// The `k`-th axis of the list gives the `k`-th bit of the bucket keys. Splitting
/// along two axes builds a quadtree, along three axes an octree.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SplitAxes {
    axes: ArrayVec<usize, MAX_SPLIT_AXES>,
}

impl SplitAxes {
    /// Split along `x`, `y` and `z`: octree cells.
    pub fn xyz() -> Self {
        Self::from_valid(&[0, 1, 2])
    }

    /// Split along `x` and `y`: quadtree cells for a Z-up world.
    pub fn xy() -> Self {
        Self::from_valid(&[0, 1])
    }

    /// Split along `x` and `z`: quadtree cells for a Y-up world.
    pub fn xz() -> Self {
        Self::from_valid(&[0, 2])
    }

    fn from_valid(axes: &[usize]) -> Self {
        Self {
            axes: axes.iter().copied().collect(),
        }
    }

    /// Builds a custom axis list.
    ///
    /// Returns `None` if `axes` is empty, has more than three elements, contains an axis
    /// index `>= 3`, or contains the same axis twice.
    pub fn new(axes: &[usize]) -> Option<Self> {
        if axes.is_empty() || axes.len() > MAX_SPLIT_AXES {
            return None;
        }

        let mut result = ArrayVec::new();

        for axis in axes {
            if *axis >= DIM || result.contains(axis) {
                return None;
            }

            result.push(*axis);
        }

        Some(Self { axes: result })
    }

    /// The axes, in bit order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.axes
    }

    /// The number of axes.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Always `false`: a valid axis list has at least one axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// The number of distinct bucket keys, i.e., `2^len`.
    #[inline]
    pub fn num_buckets(&self) -> usize {
        1 << self.axes.len()
    }

    /// The name of the cells produced by a split along these axes.
    pub fn cell_name(&self) -> &'static str {
        match self.axes.len() {
            1 => "halves",
            2 => "quadrants",
            _ => "octants",
        }
    }
}

impl fmt::Display for SplitAxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [char; DIM] = ['x', 'y', 'z'];

        for axis in &self.axes {
            write!(f, "{}", NAMES[*axis])?;
        }

        Ok(())
    }
}
