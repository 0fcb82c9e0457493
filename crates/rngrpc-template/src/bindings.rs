//! Binding tables consumed by the engine
//!
//! Both tables are built once per construct and are read-only afterwards:
//! the builders own the mutation, [`Scalars`] and [`Sequences`] only expose
//! lookups.

use std::collections::BTreeMap;

/// Name to single value bindings for `$name$` markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scalars {
    values: BTreeMap<String, String>,
}

impl Scalars {
    /// Start building a table
    pub fn builder() -> ScalarsBuilder {
        ScalarsBuilder::default()
    }

    /// Value bound to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bound names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Scalars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builder for [`Scalars`]
#[derive(Debug, Default)]
pub struct ScalarsBuilder {
    values: BTreeMap<String, String>,
}

impl ScalarsBuilder {
    /// Bind `name`, replacing any earlier value
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Scalars {
        Scalars {
            values: self.values,
        }
    }
}

/// Name to ordered list bindings for `$*name*$` markers
///
/// A name bound to an empty list is different from an unbound name: the
/// first makes every line referencing it vanish, the second leaves the
/// marker in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequences {
    values: BTreeMap<String, Vec<String>>,
}

impl Sequences {
    /// Start building a table
    pub fn builder() -> SequencesBuilder {
        SequencesBuilder::default()
    }

    /// Elements bound to `name`
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bound sequences
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bound names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K, V, I> FromIterator<(K, I)> for Sequences
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = V>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, values)| (k.into(), values.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

/// Incremental builder for [`Sequences`]
///
/// Walkers append one element per schema child, so the builder is used
/// through `&mut` while the children are visited and frozen with
/// [`SequencesBuilder::build`] at the end.
#[derive(Debug, Default)]
pub struct SequencesBuilder {
    values: BTreeMap<String, Vec<String>>,
}

impl SequencesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one element to `name`
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.entry(name.into()).or_default().push(value.into());
        self
    }

    /// Append several elements to `name`
    pub fn extend<V: Into<String>>(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        self.values
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Sequences {
        Sequences {
            values: self.values,
        }
    }
}
