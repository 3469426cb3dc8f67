use std::collections::HashMap;

use indexmap::IndexMap;
use petgraph::graph::Graph;
use petgraph::EdgeType;
use serde_json::Value;
use tracing::debug;

use crate::adjacency::{Adjacency, AdjacencyKind};
use crate::errors::GraphResult;
use crate::label::{Label, LabelSet};
use crate::network::{LayerOptions, Network};

/// Node payload for graphs handed to [`Network::add_layer_from_graph`].
///
/// `id` is the caller's node identity (string or number); `attributes`
/// become per-node labels on import.
#[derive(Clone, Debug, Default)]
pub struct NodeData {
    pub id: Value,
    pub attributes: IndexMap<String, Value>,
}

impl NodeData {
    pub fn new(id: impl Into<Value>) -> Self {
        NodeData {
            id: id.into(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl Network {
    /// Appends a layer built from a petgraph graph, directed or undirected.
    ///
    /// Nodes are numbered densely from 0 in node-index iteration order.
    /// Each edge becomes `[src, dst]`, with a third entry when its weight
    /// is set. Every attribute key found on any node becomes a label with
    /// one value slot per node, `null` where a node lacks the attribute.
    /// Unless some node carries a literal `name` attribute, a `name` label
    /// is synthesized recording the original id of every node whose id
    /// differs from its assigned index.
    pub fn add_layer_from_graph<Ty: EdgeType>(
        &mut self,
        graph: &Graph<NodeData, Option<f64>, Ty>,
    ) -> GraphResult<()> {
        let node_count = graph.node_count();
        let mut position_of = HashMap::with_capacity(node_count);
        for (position, index) in graph.node_indices().enumerate() {
            position_of.insert(index, position);
        }

        let mut rows = Vec::with_capacity(graph.edge_count());
        for edge in graph.edge_indices() {
            if let Some((source, target)) = graph.edge_endpoints(edge) {
                let mut row = vec![
                    Value::from(position_of[&source]),
                    Value::from(position_of[&target]),
                ];
                if let Some(weight) = graph.edge_weight(edge).copied().flatten() {
                    row.push(Value::from(weight));
                }
                rows.push(row);
            }
        }

        let mut attribute_values: IndexMap<String, Vec<Value>> = IndexMap::new();
        for (position, index) in graph.node_indices().enumerate() {
            for (key, value) in &graph[index].attributes {
                attribute_values
                    .entry(key.clone())
                    .or_insert_with(|| vec![Value::Null; node_count])[position] = value.clone();
            }
        }

        if !attribute_values.contains_key("name") {
            let mut names = vec![Value::Null; node_count];
            for (position, index) in graph.node_indices().enumerate() {
                let id = &graph[index].id;
                if !id_matches_position(id, position) {
                    names[position] = id.clone();
                }
            }
            attribute_values.insert("name".to_string(), names);
        }

        let mut labels = LabelSet::new();
        for (key, values) in attribute_values {
            labels.insert(key, Label::new(values));
        }

        debug!(
            "imported graph: {} nodes, {} edges, {} labels",
            node_count,
            rows.len(),
            labels.len()
        );

        self.add_layer_with(
            Adjacency::new(rows),
            LayerOptions {
                labels: Some(labels),
                nodes: Some(node_count),
                kind: Some(AdjacencyKind::List),
            },
        )
    }
}

/// Whether a node id already names its assigned index, in which case the
/// synthesized `name` label leaves that slot `null`.
fn id_matches_position(id: &Value, position: usize) -> bool {
    match id {
        Value::Number(n) => {
            n.as_u64() == Some(position as u64) || n.as_f64() == Some(position as f64)
        }
        _ => false,
    }
}
