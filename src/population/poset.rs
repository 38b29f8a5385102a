//! A dynamic container of elements ordered by a partial comparator. The container keeps
//! the condensation DAG of the dominance relation: mutually equivalent elements share one
//! node, and directed edges between nodes reflect the before/after outcomes. The
//! non-dominated front ("firsts") and the dominated sink ("lasts") fall out of the edge
//! bookkeeping without any re-sorting.

#[cfg(test)]
#[path = "../../tests/unit/population/poset_test.rs"]
mod poset_test;

use super::{PartialComparator, PartialOrdering};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

#[derive(Clone)]
struct PosetNode<T> {
    items: Vec<T>,
    predecessors: FxHashSet<usize>,
    successors: FxHashSet<usize>,
}

/// A collection of elements organized into equivalence nodes connected by dominance edges.
///
/// Insertion is O(n) comparisons against the current node count, bulk construction is
/// O(n^2); acceptable as population sizes are bounded (tens to low thousands).
pub struct PartiallyOrderedCollection<T> {
    comparator: Arc<dyn PartialComparator<T>>,
    nodes: FxHashMap<usize, PosetNode<T>>,
    // live node ids in insertion order, keeps iteration deterministic
    order: Vec<usize>,
    next_id: usize,
    size: usize,
}

impl<T: Clone> Clone for PartiallyOrderedCollection<T> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            nodes: self.nodes.clone(),
            order: self.order.clone(),
            next_id: self.next_id,
            size: self.size,
        }
    }
}

impl<T> PartiallyOrderedCollection<T> {
    /// Creates an empty collection with given comparator.
    pub fn new(comparator: Arc<dyn PartialComparator<T>>) -> Self {
        Self { comparator, nodes: FxHashMap::default(), order: Vec::default(), next_id: 0, size: 0 }
    }

    /// Creates a collection from given elements performing pairwise insertion.
    pub fn from<I>(items: I, comparator: Arc<dyn PartialComparator<T>>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut collection = Self::new(comparator);
        items.into_iter().for_each(|item| collection.add(item));

        collection
    }

    /// Adds a new element keeping the dominance bookkeeping consistent.
    ///
    /// In debug builds verifies that the comparator is antisymmetric on every compared
    /// pair; release builds trust the comparator contract.
    pub fn add(&mut self, item: T) {
        let mut predecessors = FxHashSet::default();
        let mut successors = FxHashSet::default();

        for &id in self.order.iter() {
            let representative = self.nodes[&id].items.first().expect("all nodes are non-empty");
            let ordering = self.comparator.compare(&item, representative);

            debug_assert_eq!(
                ordering.reversed(),
                self.comparator.compare(representative, &item),
                "partial comparator is not antisymmetric"
            );

            match ordering {
                PartialOrdering::Same => {
                    self.nodes.get_mut(&id).expect("node is known").items.push(item);
                    self.size += 1;
                    return;
                }
                PartialOrdering::Before => {
                    successors.insert(id);
                }
                PartialOrdering::After => {
                    predecessors.insert(id);
                }
                PartialOrdering::NotComparable => {}
            }
        }

        let id = self.next_id;
        self.next_id += 1;

        predecessors.iter().for_each(|predecessor| {
            self.nodes.get_mut(predecessor).expect("node is known").successors.insert(id);
        });
        successors.iter().for_each(|successor| {
            self.nodes.get_mut(successor).expect("node is known").predecessors.insert(id);
        });

        self.nodes.insert(id, PosetNode { items: vec![item], predecessors, successors });
        self.order.push(id);
        self.size += 1;
    }

    /// Removes a single element equal to given one. Returns true if an element was removed.
    ///
    /// No edge reconnection is required: dominance edges between the remaining nodes were
    /// computed pairwise and stay correct independently of the removed element.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(id) = self.order.iter().copied().find(|id| self.nodes[id].items.contains(item)) else {
            return false;
        };

        let node = self.nodes.get_mut(&id).expect("node is known");
        let position = node.items.iter().position(|other| other == item).expect("element is present");
        node.items.remove(position);
        self.size -= 1;

        if node.items.is_empty() {
            self.remove_node(id);
        }

        true
    }

    /// Removes and returns all elements of the current non-dominated front. Repeated calls
    /// peel the collection rank by rank (non-dominated sorting).
    pub fn drain_firsts(&mut self) -> Vec<T> {
        let ids = self
            .order
            .iter()
            .copied()
            .filter(|id| self.nodes[id].predecessors.is_empty())
            .collect::<Vec<_>>();

        let mut items = Vec::new();
        for id in ids {
            let node = self.nodes.get_mut(&id).expect("node is known");
            self.size -= node.items.len();
            items.append(&mut node.items);
            self.remove_node(id);
        }

        items
    }

    /// Returns the non-dominated front: elements of nodes with no incoming edge.
    pub fn firsts(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(
            self.order
                .iter()
                .copied()
                .filter(|id| self.nodes[id].predecessors.is_empty())
                .flat_map(|id| self.nodes[&id].items.iter()),
        )
    }

    /// Returns the dominated sink: elements of nodes with no outgoing edge.
    pub fn lasts(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(
            self.order
                .iter()
                .copied()
                .filter(|id| self.nodes[id].successors.is_empty())
                .flat_map(|id| self.nodes[&id].items.iter()),
        )
    }

    /// Returns all elements in node insertion order.
    pub fn all(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.order.iter().flat_map(|id| self.nodes[id].items.iter()))
    }

    /// Returns total amount of elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the collection has no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the comparator used by the collection.
    pub fn comparator(&self) -> Arc<dyn PartialComparator<T>> {
        self.comparator.clone()
    }

    fn remove_node(&mut self, id: usize) {
        let node = self.nodes.remove(&id).expect("node is known");

        node.predecessors.iter().for_each(|predecessor| {
            if let Some(other) = self.nodes.get_mut(predecessor) {
                other.successors.remove(&id);
            }
        });
        node.successors.iter().for_each(|successor| {
            if let Some(other) = self.nodes.get_mut(successor) {
                other.predecessors.remove(&id);
            }
        });

        self.order.retain(|&other| other != id);
    }
}
