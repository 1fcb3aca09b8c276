//! Input meshes and the shapes they are made of.

pub use self::indexed_mesh::{merge_meshes, IndexedMesh, MeshBuilderError};
pub use self::mesh_source::{FanTriangles, MeshSource};
pub use self::polygon_mesh::{PolygonIndices, PolygonMesh};
pub use self::triangle::Triangle;
pub use self::vertex_attributes::{VertexAttributeBuffers, VertexAttributes};

mod indexed_mesh;
mod mesh_source;
mod polygon_mesh;
mod triangle;
mod vertex_attributes;
