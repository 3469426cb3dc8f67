use indexmap::IndexMap;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::adjacency::{classify_adjacency, matrix_to_edges, rows_to_edges, Adjacency, AdjacencyKind};
use crate::errors::GraphResult;
use crate::label::LabelSet;

/// A directed connection between two 0-based node indices.
///
/// Serializes as `[source, target]`, or `[source, target, weight]` when a
/// weight is attached.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: Option<Value>,
}

impl Serialize for Edge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.weight.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.source)?;
        seq.serialize_element(&self.target)?;
        if let Some(weight) = &self.weight {
            seq.serialize_element(weight)?;
        }
        seq.end()
    }
}

/// One snapshot of a network: its edges plus optional per-layer metadata.
///
/// Layers are immutable once added. The `labels` key is always written,
/// `null` when no labels were given; `nodes` is written only when set.
#[derive(Clone, Debug, Serialize)]
pub struct Layer {
    #[serde(rename = "adjList")]
    pub adj_list: Vec<Edge>,
    pub labels: Option<LabelSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<usize>,
}

/// Per-layer settings for [`Network::add_layer_with`].
#[derive(Clone, Debug, Default)]
pub struct LayerOptions {
    /// Per-node labels scoped to this layer.
    pub labels: Option<LabelSet>,
    /// Explicit node count, for nodes the edge list alone cannot reveal
    /// (isolates, trailing unconnected indices).
    pub nodes: Option<usize>,
    /// Skips the square-shape heuristic when set.
    pub kind: Option<AdjacencyKind>,
}

/// An ordered sequence of layers under one network name.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    pub fn new() -> Self {
        Network::default()
    }

    /// Appends a layer with default options; see [`Network::add_layer_with`].
    pub fn add_layer<A: Into<Adjacency>>(&mut self, adjacency: A) -> GraphResult<()> {
        self.add_layer_with(adjacency, LayerOptions::default())
    }

    /// Normalizes `adjacency` into an edge list and appends it as a new
    /// layer.
    ///
    /// Unless `options.kind` says otherwise, the rows are classified with
    /// [`classify_adjacency`]; matrices are expanded cell by cell, edge
    /// lists are taken verbatim in order.
    pub fn add_layer_with<A: Into<Adjacency>>(
        &mut self,
        adjacency: A,
        options: LayerOptions,
    ) -> GraphResult<()> {
        let adjacency = adjacency.into();
        let rows = adjacency.rows();
        let kind = options.kind.unwrap_or_else(|| classify_adjacency(rows));
        let adj_list = match kind {
            AdjacencyKind::Matrix => matrix_to_edges(rows)?,
            AdjacencyKind::List => rows_to_edges(rows)?,
        };
        debug!(
            "layer {}: {} rows read as {:?}, {} edges",
            self.layers.len(),
            rows.len(),
            kind,
            adj_list.len()
        );
        self.layers.push(Layer {
            adj_list,
            labels: options.labels,
            nodes: options.nodes,
        });
        Ok(())
    }
}

/// Named networks in first-touch order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct NetworkSet {
    networks: IndexMap<String, Network>,
}

impl NetworkSet {
    pub fn new() -> Self {
        NetworkSet::default()
    }

    /// Returns the network registered under `name`, creating an empty one
    /// on first access. Repeated access returns the same entry.
    pub fn get_or_create(&mut self, name: &str) -> &mut Network {
        self.networks.entry(name.to_string()).or_default()
    }

    pub fn insert(&mut self, name: impl Into<String>, network: Network) {
        self.networks.insert(name.into(), network);
    }

    pub fn get(&self, name: &str) -> Option<&Network> {
        self.networks.get(name)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Network)> {
        self.networks.iter()
    }
}
