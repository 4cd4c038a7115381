//! Immutable association of one key with its ordered elements.

/// A key and the elements that shared it, in source order.
///
/// Produced by `Lookup` and by the grouping operators. Groupings are only
/// appended to while their source group is being built; once handed out they
/// are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, V> {
    key: K,
    elements: Vec<V>,
}

impl<K, V> Grouping<K, V> {
    pub fn new(key: K, elements: Vec<V>) -> Self {
        Self { key, elements }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[V] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.elements.iter()
    }

    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.elements)
    }

    /// Builder-side append; only the owning structure calls this.
    pub fn push(&mut self, value: V) {
        self.elements.push(value);
    }

    /// Trim the backing storage to the exact element count.
    pub fn freeze(&mut self) {
        self.elements.shrink_to_fit();
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Grouping<K, V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
