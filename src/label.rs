use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// How the renderer should read a label's values.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    Scalar,
    Binary,
    Categorical,
}

/// A per-node attribute.
///
/// `values` holds one entry per node, aligned to node indices; entries are
/// numbers, booleans or strings, homogeneous within one label. `kind` is
/// never inferred here: the caller sets it or the renderer guesses from the
/// values. `categories` names the categories of a categorical label and is
/// passed through untouched otherwise.
///
/// Nothing checks that `values` matches the node count of the owning
/// context; the renderer tolerates a mismatch.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Label {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LabelKind>,
    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Label {
    /// A label with the given values and no explicit kind.
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Label {
            kind: None,
            values: Some(values.into_iter().map(Into::into).collect()),
            categories: None,
        }
    }

    pub fn with_kind(mut self, kind: LabelKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }
}

/// Insertion-ordered collection of labels, keyed by name.
///
/// Missing names are created on first access through
/// [`LabelSet::get_or_create`], so repeated access always lands on the same
/// entry. Entries are never removed, and serialization order is the order
/// in which names were first touched.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct LabelSet {
    labels: IndexMap<String, Label>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label registered under `name`, registering an empty one
    /// on first access.
    pub fn get_or_create(&mut self, name: &str) -> &mut Label {
        self.labels.entry(name.to_string()).or_default()
    }

    pub fn insert(&mut self, name: impl Into<String>, label: Label) {
        self.labels.insert(name.into(), label);
    }

    pub fn get(&self, name: &str) -> Option<&Label> {
        self.labels.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Label)> {
        self.labels.iter()
    }
}
