//! Errors reported before a partitioning run starts.

use crate::config::OutputKind;
use crate::shape::MeshBuilderError;

/// The run parameters are invalid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The leaf capacity must be at least one triangle.
    #[error("the maximum number of triangles per leaf must be positive.")]
    NonPositiveThreshold,
    /// Verbosity levels range from 0 to 2.
    #[error("unknown verbosity level {0}, expected 0, 1 or 2.")]
    InvalidVerbosity(u8),
    /// The output sink does not produce the requested kind of output.
    #[error("{requested} output was requested but the sink produces {provided} output.")]
    SinkMismatch {
        /// The output kind of the configuration.
        requested: OutputKind,
        /// The output kind of the provided sink.
        provided: OutputKind,
    },
}

/// The input mesh cannot be partitioned.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputShapeError {
    /// The mesh has no primitive.
    #[error("the input mesh has no triangle.")]
    NoTriangles,
    /// A usable triangle mesh could not be derived from the input.
    #[error("invalid input mesh: {0}")]
    Mesh(#[from] MeshBuilderError),
}

/// Any error preventing a partitioning run.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OctreefyError {
    /// See [`ConfigurationError`].
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    /// See [`InputShapeError`].
    #[error("input shape error: {0}")]
    InputShape(#[from] InputShapeError),
}
