pub mod adjacency;
pub mod common;
pub mod display;
pub mod document;
pub mod errors;
pub mod export;
pub mod graph_import;
pub mod label;
pub mod network;

pub use adjacency::{classify_adjacency, is_truthy, Adjacency, AdjacencyKind};
pub use display::Display;
pub use document::Document;
pub use errors::{DrawError, GraphError};
pub use graph_import::NodeData;
pub use label::{Label, LabelKind, LabelSet};
pub use network::{Edge, Layer, LayerOptions, Network, NetworkSet};
