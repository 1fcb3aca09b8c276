use crate::partitioning::TriangleSummary;

/// A node of a partition tree.
///
/// Whether a node is a leaf is decided once, when it is built: a set holding at most the
/// leaf capacity becomes a leaf, a bigger set becomes a branch. A branch always has at
/// least one child and no node ever holds zero triangles.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// A terminal node holding triangles directly.
    Leaf {
        /// The triangles of this leaf.
        triangles: Vec<TriangleSummary>,
        /// Distance to the root.
        depth: usize,
        /// Set if this leaf exceeds the leaf capacity because its triangles could not
        /// be separated (their centroids coincide on every split axis).
        degenerate: bool,
    },
    /// An internal node.
    Branch {
        /// The non-empty children of this branch, in bucket-key order.
        children: Vec<TreeNode>,
        /// Distance to the root.
        depth: usize,
    },
}

/// Counters collected while building a tree.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of leaves.
    pub num_leaves: usize,
    /// Number of branches.
    pub num_branches: usize,
    /// Depth of the deepest node.
    pub max_depth: usize,
    /// Number of leaves forced because their triangles could not be separated.
    pub forced_leaves: usize,
}

impl TreeNode {
    /// Distance between this node and the root of its tree.
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { depth, .. } | TreeNode::Branch { depth, .. } => *depth,
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// The children of this node, empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Branch { children, .. } => children,
        }
    }

    /// The number of triangles in the subtree rooted at this node.
    pub fn num_triangles(&self) -> usize {
        let mut result = 0;
        self.visit(&mut |node| {
            if let TreeNode::Leaf { triangles, .. } = node {
                result += triangles.len();
            }
        });
        result
    }

    /// Calls `f` on every node of this subtree, parents before children, children in
    /// bucket-key order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a TreeNode)) {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.children().iter().rev());
        }
    }

    /// The leaves of this subtree, in bucket-key order.
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut result = Vec::new();
        self.visit(&mut |node| {
            if node.is_leaf() {
                result.push(node);
            }
        });
        result
    }

    /// The ids of all the triangles of this subtree, leaf after leaf.
    pub fn triangle_ids(&self) -> Vec<u32> {
        let mut result = Vec::new();
        self.visit(&mut |node| {
            if let TreeNode::Leaf { triangles, .. } = node {
                result.extend(triangles.iter().map(|t| t.id));
            }
        });
        result
    }

    /// Computes the statistics of this subtree.
    pub fn stats(&self) -> BuildStats {
        let mut stats = BuildStats::default();
        self.visit(&mut |node| {
            stats.max_depth = stats.max_depth.max(node.depth());
            match node {
                TreeNode::Leaf { degenerate, .. } => {
                    stats.num_leaves += 1;
                    stats.forced_leaves += *degenerate as usize;
                }
                TreeNode::Branch { .. } => stats.num_branches += 1,
            }
        });
        stats
    }

    /// Panics if this tree is not well-formed.
    ///
    /// Checks that no node is empty, that leaves hold at most `max_per_leaf` triangles
    /// unless they are degenerate, that branches exceed `max_per_leaf` triangles, and
    /// that the depths increase by one from parent to child.
    pub fn assert_well_formed(&self, max_per_leaf: usize) {
        self.visit(&mut |node| match node {
            TreeNode::Leaf {
                triangles,
                degenerate,
                depth,
            } => {
                assert!(!triangles.is_empty(), "empty leaf at depth {depth}");
                assert!(
                    *degenerate || triangles.len() <= max_per_leaf,
                    "leaf with {} triangles at depth {depth}",
                    triangles.len()
                );
            }
            TreeNode::Branch { children, depth } => {
                assert!(!children.is_empty(), "empty branch at depth {depth}");
                assert!(
                    node.num_triangles() > max_per_leaf,
                    "branch at depth {depth} should have been a leaf"
                );

                for child in children {
                    assert_eq!(child.depth(), depth + 1);
                }
            }
        });
    }
}
