//! This module contains population containers which keep individuals organized by a
//! dominance relation: a partially ordered collection maintaining the Pareto front
//! incrementally, and a totally ordered view used by rank-based strategies.

use std::cmp::Ordering;

mod poset;
pub use self::poset::PartiallyOrderedCollection;

mod total;
pub use self::total::TotallyOrderedCollection;

/// An outcome of a partial comparison between two values.
///
/// Generalizes a total order to Pareto dominance: two values can be mutually
/// incomparable without being equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartialOrdering {
    /// Left value comes before (dominates) the right one.
    Before,
    /// Left value comes after (is dominated by) the right one.
    After,
    /// Both values are equivalent under the comparator.
    Same,
    /// Values cannot be compared.
    NotComparable,
}

impl PartialOrdering {
    /// Returns the outcome seen from the opposite side of the comparison.
    pub fn reversed(&self) -> Self {
        match self {
            PartialOrdering::Before => PartialOrdering::After,
            PartialOrdering::After => PartialOrdering::Before,
            other => *other,
        }
    }
}

/// A comparison abstraction over values which form a partial order.
///
/// Contract: the comparator has to be antisymmetric in outcome (if A is before B,
/// then B is after A) and consistent across calls. Violations are not detected at
/// runtime in release builds, see `PartiallyOrderedCollection::add`.
pub trait PartialComparator<T>: Send + Sync {
    /// Compares two values partially.
    fn compare(&self, left: &T, right: &T) -> PartialOrdering;
}

impl<T, F> PartialComparator<T> for F
where
    F: Fn(&T, &T) -> PartialOrdering + Send + Sync,
{
    fn compare(&self, left: &T, right: &T) -> PartialOrdering {
        (self)(left, right)
    }
}

/// Lifts a total order function to a partial comparator.
pub fn from_total_order<T, F>(order: F) -> impl PartialComparator<T>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    move |left: &T, right: &T| match order(left, right) {
        Ordering::Less => PartialOrdering::Before,
        Ordering::Greater => PartialOrdering::After,
        Ordering::Equal => PartialOrdering::Same,
    }
}
