//! Ordered collection container for cast values.
//!
//! A `collection`-declared field wraps its value in a [`Collection`], a
//! sequence container that preserves insertion order and exposes the usual
//! sequence operations (iteration, map, filter).

use crate::value::Value;

/// An ordered sequence of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    items: Vec<Value>,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an arbitrary value into a collection.
    ///
    /// Arrays contribute their items, objects contribute their values in
    /// key order, an existing collection is taken as-is, null wraps to an
    /// empty collection, and any other value becomes a one-element
    /// collection.
    #[must_use]
    pub fn wrap(value: Value) -> Self {
        match value {
            Value::Null => Self::new(),
            Value::Array(items) => Self { items },
            Value::Object(map) => Self {
                items: map.into_values().collect(),
            },
            Value::Collection(c) => c,
            other => Self { items: vec![other] },
        }
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns the first item, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Returns the last item, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Iterates over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Appends an item.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Returns a new collection with `f` applied to every item.
    #[must_use]
    pub fn map(&self, f: impl FnMut(&Value) -> Value) -> Self {
        Self {
            items: self.items.iter().map(f).collect(),
        }
    }

    /// Returns a new collection keeping only items for which `f` is true.
    #[must_use]
    pub fn filter(&self, mut f: impl FnMut(&Value) -> bool) -> Self {
        Self {
            items: self.items.iter().filter(|v| f(v)).cloned().collect(),
        }
    }

    /// Borrows the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Consumes the collection, returning its items.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }
}

impl From<Vec<Value>> for Collection {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
