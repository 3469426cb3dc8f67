use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building up a network from adjacency input.
///
/// Only the shape of the input is checked: matrices must be square and edge
/// rows must look like edges. Node indices are not bounds-checked and label
/// lengths are not compared to node counts; both pass through to the
/// renderer as given.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Adjacency rows disagree about the node count.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// An edge row is not a `[source, target]` or `[source, target, weight]`
    /// array with integer endpoints.
    #[error("edge row {index} is malformed: {reason}")]
    MalformedEdge { index: usize, reason: String },
}

/// Result type alias for graph-construction operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised by `Document::save` and `Document::draw`.
///
/// There is no retry and no rollback: a failure part way through leaves
/// whatever was already written on disk.
#[derive(Error, Debug)]
pub enum DrawError {
    /// The document could not be encoded as JSON.
    #[error("failed to encode document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTML shell template failed to render.
    #[error("failed to render HTML shell: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Writing one of the output files failed.
    #[error("failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The files were written but the browser could not be launched.
    #[error("failed to open browser: {0}")]
    Browser(#[source] std::io::Error),
}

pub type DrawResult<T> = Result<T, DrawError>;
