use serde_json::Value;

use crate::errors::{GraphError, GraphResult};
use crate::network::Edge;

/// How a block of adjacency rows should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjacencyKind {
    /// One edge per row: `[source, target]` or `[source, target, weight]`.
    List,
    /// One node per row; cell `(i, j)` is the weight of the edge `i -> j`.
    Matrix,
}

/// Raw adjacency rows. Whether they are an edge list or a matrix is decided
/// by [`classify_adjacency`] unless the caller says so explicitly.
///
/// The rows are owned: once a layer is built from them, nothing the caller
/// does to its own copy can reach the stored layer.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    rows: Vec<Vec<Value>>,
}

impl Adjacency {
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        Adjacency { rows }
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
}

impl<T: Into<Value>> From<Vec<Vec<T>>> for Adjacency {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Adjacency {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl From<Vec<[usize; 2]>> for Adjacency {
    fn from(pairs: Vec<[usize; 2]>) -> Self {
        Adjacency {
            rows: pairs
                .into_iter()
                .map(|[s, t]| vec![Value::from(s), Value::from(t)])
                .collect(),
        }
    }
}

impl From<Vec<(usize, usize, f64)>> for Adjacency {
    fn from(triples: Vec<(usize, usize, f64)>) -> Self {
        Adjacency {
            rows: triples
                .into_iter()
                .map(|(s, t, w)| vec![Value::from(s), Value::from(t), Value::from(w)])
                .collect(),
        }
    }
}

/// Square-shape heuristic for untagged adjacency rows.
///
/// Rows are read as a matrix only when there are more than 3 of them and
/// the first row is exactly as long as there are rows. Short or
/// coincidentally square edge lists are misread on purpose; callers that
/// know better pass an explicit [`AdjacencyKind`].
pub fn classify_adjacency(rows: &[Vec<Value>]) -> AdjacencyKind {
    if rows.len() > 3 {
        if let Some(first) = rows.first() {
            if rows.len() == first.len() {
                return AdjacencyKind::Matrix;
            }
        }
    }
    AdjacencyKind::List
}

/// Whether a matrix cell counts as an edge.
///
/// A cell is truthy when it is present and not `null`, not `false`, not
/// numerically zero and not the empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Converts a square matrix into a directed edge list.
///
/// For every ordered pair `(i, j)` with `i != j` and a truthy cell, one
/// edge `(i, j, cell)` is emitted. Both directions are emitted
/// independently, so a symmetric matrix yields two edges per connection
/// and an asymmetric one stays directed.
pub(crate) fn matrix_to_edges(rows: &[Vec<Value>]) -> GraphResult<Vec<Edge>> {
    let n = rows.len();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(GraphError::ShapeMismatch(format!(
                "matrix row {} has {} columns, expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut edges = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if i == j {
                continue;
            }
            if is_truthy(cell) {
                edges.push(Edge {
                    source: i,
                    target: j,
                    weight: Some(cell.clone()),
                });
            }
        }
    }
    Ok(edges)
}

/// Converts edge rows into edges verbatim, order preserved.
pub(crate) fn rows_to_edges(rows: &[Vec<Value>]) -> GraphResult<Vec<Edge>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            if row.len() < 2 || row.len() > 3 {
                return Err(GraphError::MalformedEdge {
                    index,
                    reason: format!("expected 2 or 3 entries, found {}", row.len()),
                });
            }
            let source = node_index(&row[0]).ok_or_else(|| GraphError::MalformedEdge {
                index,
                reason: format!("source {} is not a node index", row[0]),
            })?;
            let target = node_index(&row[1]).ok_or_else(|| GraphError::MalformedEdge {
                index,
                reason: format!("target {} is not a node index", row[1]),
            })?;
            Ok(Edge {
                source,
                target,
                weight: row.get(2).cloned(),
            })
        })
        .collect()
}

fn node_index(value: &Value) -> Option<usize> {
    value.as_u64().map(|v| v as usize)
}
