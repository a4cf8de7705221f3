//! Session-scoped pheromone trails on unordered point pairs.

use std::collections::HashMap;

use crate::point::Point;
use crate::tour::Tour;

/// Unordered pair key: endpoints sorted by `(x, y)`.
type PairKey = ((i64, i64), (i64, i64));

#[inline]
fn pair_key(a: &Point, b: &Point) -> PairKey {
    let (ka, kb) = (a.key(), b.key());
    if ka <= kb {
        (ka, kb)
    } else {
        (kb, ka)
    }
}

/// Trail weights keyed by unordered point pair.
///
/// Invariants:
/// - Weights are non-negative; `get` reports absent pairs as 0.
/// - Lives for a whole session; call `reset` between independent runs.
#[derive(Clone, Debug, Default)]
pub struct PheromoneTable {
    trails: HashMap<PairKey, f64>,
}

impl PheromoneTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, a: &Point, b: &Point) -> f64 {
        self.trails.get(&pair_key(a, b)).copied().unwrap_or(0.0)
    }

    /// Read a weight, recording the pair at 0 if it was never seen.
    #[inline]
    pub fn inspect(&mut self, a: &Point, b: &Point) -> f64 {
        *self.trails.entry(pair_key(a, b)).or_insert(0.0)
    }

    /// Whether the pair has an entry (possibly 0).
    #[inline]
    pub fn contains(&self, a: &Point, b: &Point) -> bool {
        self.trails.contains_key(&pair_key(a, b))
    }

    /// Overwrite a weight.
    pub fn set(&mut self, a: &Point, b: &Point, weight: f64) {
        self.trails.insert(pair_key(a, b), weight.max(0.0));
    }

    /// Add `amount` to a weight.
    pub fn deposit(&mut self, a: &Point, b: &Point, amount: f64) {
        *self.trails.entry(pair_key(a, b)).or_insert(0.0) += amount.max(0.0);
    }

    /// Add `q / perimeter` to every edge of `tour`, closing edge included.
    pub fn deposit_tour(&mut self, tour: &Tour, q: f64) {
        if tour.perimeter() <= 0 {
            return;
        }
        let amount = q / tour.perimeter() as f64;
        for e in tour.edges() {
            self.deposit(&e.a, &e.b, amount);
        }
    }

    /// Overwrite every edge of `tour` with `weight`.
    pub fn seed_tour(&mut self, tour: &Tour, weight: f64) {
        for e in tour.edges() {
            self.set(&e.a, &e.b, weight);
        }
    }

    pub fn reset(&mut self) {
        self.trails.clear();
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.trails.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Tour {
        Tour::from_order(vec![
            Point::new(0, 0, 0),
            Point::new(0, 10, 1),
            Point::new(10, 10, 2),
            Point::new(10, 0, 3),
        ])
    }

    #[test]
    fn pairs_are_unordered() {
        let (a, b) = (Point::new(1, 2, 0), Point::new(-3, 4, 1));
        let mut t = PheromoneTable::new();
        t.set(&a, &b, 0.5);
        assert_eq!(t.get(&b, &a), 0.5);
        t.deposit(&b, &a, 0.25);
        assert_eq!(t.get(&a, &b), 0.75);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn inspect_materialises_zero() {
        let (a, b) = (Point::new(0, 0, 0), Point::new(1, 1, 1));
        let mut t = PheromoneTable::new();
        assert!(!t.contains(&a, &b));
        assert_eq!(t.inspect(&a, &b), 0.0);
        assert!(t.contains(&a, &b));
        assert_eq!(t.get(&a, &b), 0.0);
    }

    #[test]
    fn tour_deposit_adds_q_over_perimeter_on_every_edge() {
        let tour = square();
        let mut t = PheromoneTable::new();
        t.seed_tour(&tour, 1.0);
        t.deposit_tour(&tour, 1.0);
        let expected = 1.0 + 1.0 / 400.0;
        for e in tour.edges() {
            assert!((t.get(&e.a, &e.b) - expected).abs() < 1e-15);
        }
        // Diagonals untouched.
        let p = tour.ordered_points();
        assert_eq!(t.get(&p[0], &p[2]), 0.0);
        t.reset();
        assert!(t.is_empty());
    }
}
