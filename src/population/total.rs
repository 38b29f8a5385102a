#[cfg(test)]
#[path = "../../tests/unit/population/total_test.rs"]
mod total_test;

use std::cmp::Ordering;

/// A flat, totally ordered view over a collection of elements, built by flattening a
/// partial order with an explicit total comparator. Used by rank/fraction based strategies.
pub struct TotallyOrderedCollection<T> {
    items: Vec<T>,
}

impl<T> TotallyOrderedCollection<T> {
    /// Creates a collection sorting given elements by given total order.
    pub fn from<I>(items: I, order: &dyn Fn(&T, &T) -> Ordering) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter().collect::<Vec<_>>();
        items.sort_by(|a, b| order(a, b));

        Self { items }
    }

    /// Returns all elements in ascending order.
    pub fn all(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns up to `n` best (first under the order) elements.
    pub fn top(&self, n: usize) -> &[T] {
        &self.items[..n.min(self.items.len())]
    }

    /// Returns up to `n` worst (last under the order) elements.
    pub fn bottom(&self, n: usize) -> &[T] {
        let start = self.items.len().saturating_sub(n);
        &self.items[start..]
    }

    /// Returns total amount of elements.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}
