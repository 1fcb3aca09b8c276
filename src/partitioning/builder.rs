use crate::config::Verbosity;
use crate::partitioning::{compute_center, partition, SplitAxes, TreeNode, TriangleSummary};
use core::num::NonZeroUsize;

/// Recursively splits triangle sets into a [`TreeNode`] hierarchy.
///
/// At each node, a set holding at most `max_per_leaf` triangles becomes a leaf. A
/// bigger set is split into buckets around the mean of its centroids (recomputed
/// from that set alone), and each non-empty bucket becomes a child.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    axes: SplitAxes,
    max_per_leaf: NonZeroUsize,
    verbosity: Verbosity,
}

impl TreeBuilder {
    /// A silent builder splitting along `axes`.
    pub fn new(max_per_leaf: NonZeroUsize, axes: SplitAxes) -> Self {
        Self {
            axes,
            max_per_leaf,
            verbosity: Verbosity::Silent,
        }
    }

    /// Sets how much of the build is traced through the `log` facade.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// The axes cells are split along.
    #[inline]
    pub fn axes(&self) -> &SplitAxes {
        &self.axes
    }

    /// The leaf capacity.
    #[inline]
    pub fn max_per_leaf(&self) -> NonZeroUsize {
        self.max_per_leaf
    }

    /// Builds the tree of `set`, rooted at depth 0.
    pub fn build(&self, set: Vec<TriangleSummary>) -> TreeNode {
        self.build_at_depth(set, 0)
    }

    /// Builds the subtree of `set`, rooted at `depth`.
    pub fn build_at_depth(&self, set: Vec<TriangleSummary>, depth: usize) -> TreeNode {
        let verbose = self.verbosity >= Verbosity::Sizes;
        let indent = Indent(depth);

        if set.len() <= self.max_per_leaf.get() {
            if verbose {
                log::info!(
                    "{indent}leaf of {} triangles centered at {}",
                    set.len(),
                    compute_center(&set)
                );
            }

            return TreeNode::Leaf {
                triangles: set,
                depth,
                degenerate: false,
            };
        }

        let center = compute_center(&set);
        let buckets = partition(&set, &center, &self.axes);

        if verbose {
            let sizes: Vec<_> = buckets.iter().map(|(_, bucket)| bucket.len()).collect();
            log::info!(
                "{indent}{} {} have {:?} triangles",
                sizes.len(),
                self.axes.cell_name(),
                sizes
            );
        }

        // All the centroids coincide along the split axes: splitting again
        // would yield the same set forever.
        if buckets.len() <= 1 {
            log::debug!(
                "{} triangles at depth {} cannot be split along {}, forcing a leaf.",
                set.len(),
                depth,
                self.axes
            );

            return TreeNode::Leaf {
                triangles: set,
                depth,
                degenerate: true,
            };
        }

        drop(set);

        let children = buckets
            .into_iter()
            .map(|(_, bucket)| self.build_at_depth(bucket, depth + 1))
            .collect();

        TreeNode::Branch { children, depth }
    }
}

/// Builds the subtree of `set` rooted at `depth`, splitting along `axes`.
///
/// Shorthand for a silent [`TreeBuilder`].
pub fn build(
    set: Vec<TriangleSummary>,
    max_per_leaf: NonZeroUsize,
    depth: usize,
    axes: &SplitAxes,
) -> TreeNode {
    TreeBuilder::new(max_per_leaf, axes.clone()).build_at_depth(set, depth)
}

struct Indent(usize);

impl core::fmt::Display for Indent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for _ in 0..self.0 {
            f.write_str("    ")?;
        }
        Ok(())
    }
}
