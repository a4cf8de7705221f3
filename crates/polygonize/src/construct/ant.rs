//! Ant-colony construction over the session pheromone table.
//!
//! Model
//! - Cold start: an empty table is seeded with `initial_trail` on the edges of a
//!   random-start nearest-neighbor tour.
//! - Each ant starts at a random point and repeatedly picks the next point with
//!   probability proportional to `pheromone(i, j) / |ij|²`.
//! - A completed ant deposits `q / perimeter` on each of its edges before the
//!   next ant starts.

use std::rc::Rc;

use rand::Rng;

use super::{nearest_neighbor_from, ConstructionError};
use crate::geometry::squared_distance;
use crate::point::{Point, PointSet};
use crate::tour::Tour;

use super::pheromone::PheromoneTable;

/// Deposit constant `Q`.
pub const PHEROMONE_Q: f64 = 1.0;

/// Colony configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntCfg {
    /// Ants to run after the (optional) cold-start seed.
    pub ants: usize,
    /// Deposit constant; each edge of a finished tour gains `q / perimeter`.
    pub q: f64,
    /// Trail written on the seed tour's edges when the table is empty.
    pub initial_trail: f64,
}

impl Default for AntCfg {
    fn default() -> Self {
        Self {
            ants: 10,
            q: PHEROMONE_Q,
            initial_trail: 1.0,
        }
    }
}

/// Run a colony and return the last completed ant's tour.
///
/// Degenerate ants are skipped; if every ant is degenerate the last failure is
/// returned. With `cfg.ants == 0` the seed tour is returned (seeding the table
/// if it was empty).
pub fn run_colony<R: Rng>(
    points: &PointSet,
    cfg: AntCfg,
    pheromone: &mut PheromoneTable,
    rng: &mut R,
) -> Result<Tour, ConstructionError> {
    let origin: Rc<[Point]> = points.points().into();
    let mut last: Option<Tour> = None;
    if pheromone.is_empty() {
        let start = rng.gen_range(0..points.len());
        let seed = nearest_neighbor_from(points.points(), start, Rc::clone(&origin));
        pheromone.seed_tour(&seed, cfg.initial_trail);
        tracing::debug!(perimeter = seed.perimeter(), "colony_seeded");
        last = Some(seed);
    } else if cfg.ants == 0 {
        let start = rng.gen_range(0..points.len());
        last = Some(nearest_neighbor_from(
            points.points(),
            start,
            Rc::clone(&origin),
        ));
    }

    let mut failure = None;
    let mut completed = 0usize;
    for ant in 0..cfg.ants {
        match ant_walk(points.points(), Rc::clone(&origin), pheromone, rng) {
            Ok(tour) => {
                pheromone.deposit_tour(&tour, cfg.q);
                tracing::trace!(ant, perimeter = tour.perimeter(), "ant_complete");
                completed += 1;
                last = Some(tour);
            }
            Err(err) => {
                tracing::warn!(ant, %err, "ant_degenerate");
                failure = Some(err);
            }
        }
    }
    tracing::debug!(ants = cfg.ants, completed, trails = pheromone.len(), "colony_done");
    if completed == 0 {
        if let Some(err) = failure {
            return Err(err);
        }
    }
    last.ok_or(ConstructionError::Degenerate {
        placed: 0,
        expected: points.len(),
    })
}

/// One ant: a full tour, or `Degenerate` if it runs out of reachable points.
///
/// Does not deposit; `run_colony` does that once the tour is complete.
pub fn ant_walk<R: Rng>(
    points: &[Point],
    origin: Rc<[Point]>,
    pheromone: &mut PheromoneTable,
    rng: &mut R,
) -> Result<Tour, ConstructionError> {
    let mut remaining: Vec<Point> = points.to_vec();
    let mut order = Vec::with_capacity(points.len());
    let mut cur = remaining.remove(rng.gen_range(0..remaining.len()));
    order.push(cur);
    while !remaining.is_empty() {
        let Some(idx) = choose_next(&cur, &remaining, pheromone, rng) else {
            return Err(ConstructionError::Degenerate {
                placed: order.len(),
                expected: points.len(),
            });
        };
        cur = remaining.remove(idx);
        order.push(cur);
    }
    Ok(Tour::derived(order, origin))
}

/// Roulette-wheel pick over `remaining` weighted by `pheromone / distance²`.
///
/// Every inspected pair is recorded in the table. Zero-weight candidates are
/// never chosen; `None` when no candidate has positive weight.
pub fn choose_next<R: Rng>(
    cur: &Point,
    remaining: &[Point],
    pheromone: &mut PheromoneTable,
    rng: &mut R,
) -> Option<usize> {
    let mut cumulative: Vec<(f64, usize)> = Vec::with_capacity(remaining.len());
    let mut total = 0.0;
    for (idx, cand) in remaining.iter().enumerate() {
        let trail = pheromone.inspect(cur, cand);
        let desirability = trail * (1.0 / squared_distance(cur, cand) as f64);
        if desirability > 0.0 && desirability.is_finite() {
            total += desirability;
            cumulative.push((total, idx));
        }
    }
    if cumulative.is_empty() {
        return None;
    }
    let r = rng.gen::<f64>() * total;
    cumulative
        .iter()
        .find(|(c, _)| *c > r)
        .or(cumulative.last())
        .map(|&(_, idx)| idx)
}
