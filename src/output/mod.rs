//! Materialization of partition trees into concrete hierarchies.

pub use self::collision::{CollisionSink, CollisionSolids};
pub use self::geometry::{GeometryBatch, GeometrySink};
pub use self::hierarchy::{HierarchySink, LeafRecord};
pub use self::marker::{DebugMarker, MarkerPalette};
pub use self::scene::{LeafPayload, SceneNode};
pub use self::sink::{materialize, naming, primitives_aabb, OutputSink};

use crate::config::OutputKind;

mod collision;
mod geometry;
mod hierarchy;
mod marker;
mod scene;
mod sink;

/// The output of a run whose sink was chosen from [`OutputKind`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum OutputScene {
    /// Produced by a [`GeometrySink`].
    Geometry(SceneNode<GeometryBatch>),
    /// Produced by a [`CollisionSink`].
    CollisionVolume(SceneNode<CollisionSolids>),
    /// Produced by a [`HierarchySink`].
    GenericHierarchy(SceneNode<LeafRecord>),
}

impl OutputScene {
    /// The kind of this output.
    pub fn kind(&self) -> OutputKind {
        match self {
            OutputScene::Geometry(_) => OutputKind::Geometry,
            OutputScene::CollisionVolume(_) => OutputKind::CollisionVolume,
            OutputScene::GenericHierarchy(_) => OutputKind::GenericHierarchy,
        }
    }

    /// The name of the root node.
    pub fn name(&self) -> &str {
        match self {
            OutputScene::Geometry(root) => &root.name,
            OutputScene::CollisionVolume(root) => &root.name,
            OutputScene::GenericHierarchy(root) => &root.name,
        }
    }

    /// See [`SceneNode::listing`].
    pub fn listing(&self) -> String {
        match self {
            OutputScene::Geometry(root) => root.listing(),
            OutputScene::CollisionVolume(root) => root.listing(),
            OutputScene::GenericHierarchy(root) => root.listing(),
        }
    }
}
