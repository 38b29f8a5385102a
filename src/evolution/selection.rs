//! Selection strategies which extract representative individuals from a partially
//! ordered population. The same abstraction serves parent selection inside a solver and
//! collaborator selection between the sub-populations of the cooperative solver.

#[cfg(test)]
#[path = "../../tests/unit/evolution/selection_test.rs"]
mod selection_test;

use crate::population::{PartialOrdering, PartiallyOrderedCollection, TotallyOrderedCollection};
use crate::utils::{Float, Random};
use std::cmp::Ordering;
use std::sync::Arc;

/// A pure strategy which extracts a subset of individuals from a population.
pub trait Selector<T>: Send + Sync {
    /// Selects individuals from given population.
    fn select(&self, population: &PartiallyOrderedCollection<T>, random: &dyn Random) -> Vec<T>;
}

/// Selects a single non-dominated individual.
pub struct Best;

impl<T: Clone> Selector<T> for Best {
    fn select(&self, population: &PartiallyOrderedCollection<T>, _: &dyn Random) -> Vec<T> {
        population.firsts().next().cloned().into_iter().collect()
    }
}

/// Selects a single individual from the dominated sink.
pub struct Worst;

impl<T: Clone> Selector<T> for Worst {
    fn select(&self, population: &PartiallyOrderedCollection<T>, _: &dyn Random) -> Vec<T> {
        population.lasts().next().cloned().into_iter().collect()
    }
}

/// Selects a single individual uniformly at random.
pub struct RandomOne;

impl<T: Clone> Selector<T> for RandomOne {
    fn select(&self, population: &PartiallyOrderedCollection<T>, random: &dyn Random) -> Vec<T> {
        let all = population.all().collect::<Vec<_>>();
        if all.is_empty() {
            return Vec::default();
        }

        let idx = random.uniform_int(0, all.len() as i32 - 1) as usize;
        vec![all[idx].clone()]
    }
}

/// Selects the winner of a tournament between `size` individuals sampled with
/// replacement, decided by the population's own comparator.
pub struct Tournament {
    size: usize,
}

impl Tournament {
    /// Creates a new instance of `Tournament`.
    pub fn new(size: usize) -> Self {
        assert!(size > 0);
        Self { size }
    }
}

impl<T: Clone> Selector<T> for Tournament {
    fn select(&self, population: &PartiallyOrderedCollection<T>, random: &dyn Random) -> Vec<T> {
        let all = population.all().collect::<Vec<_>>();
        if all.is_empty() {
            return Vec::default();
        }

        let comparator = population.comparator();
        let last_idx = all.len() as i32 - 1;

        let mut winner = all[random.uniform_int(0, last_idx) as usize];
        for _ in 1..self.size {
            let challenger = all[random.uniform_int(0, last_idx) as usize];
            if comparator.compare(challenger, winner) == PartialOrdering::Before {
                winner = challenger;
            }
        }

        vec![winner.clone()]
    }
}

/// Selects the entire population.
pub struct Complete;

impl<T: Clone> Selector<T> for Complete {
    fn select(&self, population: &PartiallyOrderedCollection<T>, _: &dyn Random) -> Vec<T> {
        population.all().cloned().collect()
    }
}

/// Selects the entire non-dominated front.
pub struct Firsts;

impl<T: Clone> Selector<T> for Firsts {
    fn select(&self, population: &PartiallyOrderedCollection<T>, _: &dyn Random) -> Vec<T> {
        population.firsts().cloned().collect()
    }
}

/// Selects the entire dominated sink.
pub struct Lasts;

impl<T: Clone> Selector<T> for Lasts {
    fn select(&self, population: &PartiallyOrderedCollection<T>, _: &dyn Random) -> Vec<T> {
        population.lasts().cloned().collect()
    }
}

/// A total order function used to flatten a partial order.
pub type TotalOrderFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Selects the top fraction of the population under an explicit total order.
pub struct TopFraction<T> {
    fraction: Float,
    order: TotalOrderFn<T>,
}

impl<T> TopFraction<T> {
    /// Creates a new instance of `TopFraction`.
    pub fn new(fraction: Float, order: TotalOrderFn<T>) -> Self {
        assert!((0. ..=1.).contains(&fraction));
        Self { fraction, order }
    }
}

impl<T: Clone + Send + Sync> Selector<T> for TopFraction<T> {
    fn select(&self, population: &PartiallyOrderedCollection<T>, _: &dyn Random) -> Vec<T> {
        let total = TotallyOrderedCollection::from(population.all().cloned(), &*self.order);
        let n = (total.size() as Float * self.fraction).ceil() as usize;

        total.top(n).to_vec()
    }
}

/// Selects the bottom fraction of the population under an explicit total order.
pub struct BottomFraction<T> {
    fraction: Float,
    order: TotalOrderFn<T>,
}

impl<T> BottomFraction<T> {
    /// Creates a new instance of `BottomFraction`.
    pub fn new(fraction: Float, order: TotalOrderFn<T>) -> Self {
        assert!((0. ..=1.).contains(&fraction));
        Self { fraction, order }
    }
}

impl<T: Clone + Send + Sync> Selector<T> for BottomFraction<T> {
    fn select(&self, population: &PartiallyOrderedCollection<T>, _: &dyn Random) -> Vec<T> {
        let total = TotallyOrderedCollection::from(population.all().cloned(), &*self.order);
        let n = (total.size() as Float * self.fraction).ceil() as usize;

        total.bottom(n).to_vec()
    }
}

/// Unions the selections of two selectors over shared individuals, collapsing
/// duplicates by identity of the shared value.
pub struct Union<U: ?Sized> {
    left: Arc<dyn Selector<Arc<U>>>,
    right: Arc<dyn Selector<Arc<U>>>,
}

impl<U: ?Sized> Union<U> {
    /// Creates a new instance of `Union`.
    pub fn new(left: Arc<dyn Selector<Arc<U>>>, right: Arc<dyn Selector<Arc<U>>>) -> Self {
        Self { left, right }
    }
}

impl<U: Send + Sync + ?Sized> Selector<Arc<U>> for Union<U> {
    fn select(&self, population: &PartiallyOrderedCollection<Arc<U>>, random: &dyn Random) -> Vec<Arc<U>> {
        let mut selected = self.left.select(population, random);

        for item in self.right.select(population, random) {
            if !selected.iter().any(|other| Arc::ptr_eq(other, &item)) {
                selected.push(item);
            }
        }

        selected
    }
}
