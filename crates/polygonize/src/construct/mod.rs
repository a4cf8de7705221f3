//! Initial tour construction.
//!
//! - `RandomPermutation`: uniform shuffle of the input.
//! - `NearestNeighbor`: greedy walk by squared distance from the first (or a
//!   random) point.
//! - `AntColony`: pheromone-weighted probabilistic walks; see `ant`.
//!
//! Every result is integrity-checked against the input ordering before it is
//! handed back.

pub mod ant;
pub mod pheromone;

use std::fmt;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::geometry::squared_distance;
use crate::point::{Point, PointSet};
use crate::tour::Tour;

pub use ant::{ant_walk, choose_next, run_colony, AntCfg, PHEROMONE_Q};
pub use pheromone::PheromoneTable;

/// Errors surfaced by tour construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// An ant ran out of reachable points; retrying (or resetting trails) may help.
    #[error("degenerate construction: placed {placed} of {expected} points")]
    Degenerate { placed: usize, expected: usize },
    /// The constructed tour is not a permutation of the input.
    #[error("integrity violation: expected {expected} distinct input points, tour has {found}")]
    IntegrityViolation { expected: usize, found: usize },
    #[error("unknown construction method `{selector}`")]
    InvalidMethodSelector { selector: String },
}

/// How to build the initial tour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstructionMethod {
    RandomPermutation,
    NearestNeighbor { random_start: bool },
    AntColony(AntCfg),
}

impl ConstructionMethod {
    /// Parse a method name (or its menu number). `ants` configures the colony.
    pub fn from_selector(selector: &str, ants: AntCfg) -> Result<Self, ConstructionError> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "1" | "random" | "random-permutation" => Ok(Self::RandomPermutation),
            "2" | "nearest" | "nearest-neighbor" => Ok(Self::NearestNeighbor {
                random_start: false,
            }),
            "nearest-random" => Ok(Self::NearestNeighbor { random_start: true }),
            "3" | "ants" | "ant-colony" => Ok(Self::AntColony(ants)),
            _ => Err(ConstructionError::InvalidMethodSelector {
                selector: selector.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConstructionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RandomPermutation => write!(f, "random-permutation"),
            Self::NearestNeighbor {
                random_start: false,
            } => write!(f, "nearest-neighbor"),
            Self::NearestNeighbor { random_start: true } => write!(f, "nearest-random"),
            Self::AntColony(cfg) => write!(f, "ant-colony({} ants)", cfg.ants),
        }
    }
}

/// Build an initial tour for `points`.
///
/// `pheromone` is only read and written by `AntColony`; it carries trails from
/// earlier colonies of the same session.
pub fn construct_tour<R: Rng>(
    points: &PointSet,
    method: ConstructionMethod,
    rng: &mut R,
    pheromone: &mut PheromoneTable,
) -> Result<Tour, ConstructionError> {
    let tour = match method {
        ConstructionMethod::RandomPermutation => random_permutation(points, rng),
        ConstructionMethod::NearestNeighbor { random_start } => {
            let start = if random_start {
                rng.gen_range(0..points.len())
            } else {
                0
            };
            nearest_neighbor_from(points.points(), start, points.points().into())
        }
        ConstructionMethod::AntColony(cfg) => run_colony(points, cfg, pheromone, rng)?,
    };
    if !tour.integrity_valid() {
        return Err(ConstructionError::IntegrityViolation {
            expected: points.len(),
            found: tour.len(),
        });
    }
    tracing::debug!(
        %method,
        perimeter = tour.perimeter(),
        "constructed"
    );
    Ok(tour)
}

pub fn random_permutation<R: Rng>(points: &PointSet, rng: &mut R) -> Tour {
    let mut order = points.points().to_vec();
    order.shuffle(rng);
    Tour::derived(order, points.points().into())
}

/// Nearest-neighbor walk from `points[0]`.
pub fn nearest_neighbor(points: &PointSet) -> Tour {
    nearest_neighbor_from(points.points(), 0, points.points().into())
}

/// Nearest-neighbor walk from `points[start]`. Ties go to the earliest point in
/// the remaining list, which keeps input order.
pub fn nearest_neighbor_from(points: &[Point], start: usize, origin: Rc<[Point]>) -> Tour {
    let mut remaining = points.to_vec();
    let mut order = Vec::with_capacity(points.len());
    let mut cur = remaining.remove(start);
    order.push(cur);
    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_d = i64::MAX;
        for (idx, cand) in remaining.iter().enumerate() {
            let d = squared_distance(&cur, cand);
            if d < best_d {
                best_d = d;
                best = idx;
            }
        }
        cur = remaining.remove(best);
        order.push(cur);
    }
    Tour::derived(order, origin)
}
