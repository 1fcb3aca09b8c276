use crate::output::DebugMarker;
use core::fmt::Write;

/// The payload of a leaf of the output hierarchy.
pub trait LeafPayload {
    /// The number of triangles this payload was built from.
    fn num_triangles(&self) -> usize;
}

/// A named node of the output hierarchy.
///
/// Leaves carry a payload, groups (branches and the root) carry children.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode<P> {
    /// The name of this node, see [`crate::output::naming`].
    pub name: String,
    /// The leaf content, `None` for groups.
    pub payload: Option<P>,
    /// The child nodes.
    pub children: Vec<SceneNode<P>>,
    /// Debug marker, set at the highest verbosity only.
    pub marker: Option<DebugMarker>,
}

impl<P> SceneNode<P> {
    /// A leaf node.
    pub fn leaf(name: String, payload: P, marker: Option<DebugMarker>) -> Self {
        Self {
            name,
            payload: Some(payload),
            children: Vec::new(),
            marker,
        }
    }

    /// A group node.
    pub fn group(name: String, children: Vec<Self>, marker: Option<DebugMarker>) -> Self {
        Self {
            name,
            payload: None,
            children,
            marker,
        }
    }

    /// Calls `f` on every node of this subtree, parents first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.children.iter().rev());
        }
    }

    /// The payloads of this subtree, in hierarchy order.
    pub fn payloads(&self) -> Vec<&P> {
        let mut result = Vec::new();
        self.visit(&mut |node| result.extend(node.payload.as_ref()));
        result
    }

    /// The number of nodes of this subtree.
    pub fn num_nodes(&self) -> usize {
        let mut result = 0;
        self.visit(&mut |_| result += 1);
        result
    }

    /// All the nodes of this subtree named `name`.
    pub fn find_all(&self, name: &str) -> Vec<&Self> {
        let mut result = Vec::new();
        self.visit(&mut |node| {
            if node.name == name {
                result.push(node);
            }
        });
        result
    }
}

impl<P: LeafPayload> SceneNode<P> {
    /// The total number of triangles held by the leaves of this subtree.
    pub fn num_triangles(&self) -> usize {
        self.payloads().iter().map(|p| p.num_triangles()).sum()
    }

    /// An indented, one-node-per-line description of this subtree.
    pub fn listing(&self) -> String {
        let mut result = String::new();
        self.write_listing(&mut result, 0);
        result
    }

    fn write_listing(&self, out: &mut String, level: usize) {
        let _ = write!(out, "{:1$}{2}", "", level * 2, self.name);

        if let Some(payload) = &self.payload {
            let _ = write!(out, " ({} triangles)", payload.num_triangles());
        }

        out.push('\n');

        for child in &self.children {
            child.write_listing(out, level + 1);
        }
    }
}
