//! Simulated annealing on crossing count.
//!
//! Acceptance is inverted relative to textbook annealing: a neighbor with MORE
//! crossings is always accepted, an equal or better one only when a uniform
//! draw exceeds the current probability. The probability starts at 1 and
//! shrinks by `ANNEAL_DECAY` each iteration, so late in the phase almost every
//! move is taken.

use rand::Rng;

use super::{check_integrity, ImproveError, ImproveStats};
use crate::tour::{Neighborhood, Tour};

pub const ANNEAL_INITIAL_PROBABILITY: f64 = 1.0;
/// Multiplier applied to the probability before every iteration.
pub const ANNEAL_DECAY: f64 = 0.98;

/// Run up to `max_iters` annealing iterations from `tour` and return where the
/// walk ended.
///
/// Stops early once the current tour is crossing-free or the probability has
/// decayed to zero. A tour with crossings and no neighbor yields `Stuck`.
pub fn anneal<R: Rng>(
    tour: &Tour,
    max_iters: usize,
    rng: &mut R,
    stats: &mut ImproveStats,
) -> Result<Tour, ImproveError> {
    let (reached, outcome) = anneal_phase(tour, max_iters, rng, stats);
    outcome.map(|()| reached)
}

/// Like `anneal`, but always hands back the tour the walk reached, also when
/// the phase ends in an error.
pub fn anneal_phase<R: Rng>(
    tour: &Tour,
    max_iters: usize,
    rng: &mut R,
    stats: &mut ImproveStats,
) -> (Tour, Result<(), ImproveError>) {
    let mut current = tour.clone();
    let mut probability = ANNEAL_INITIAL_PROBABILITY;
    for _ in 0..max_iters {
        if current.intersection_count() == 0 || probability <= 0.0 {
            break;
        }
        probability *= ANNEAL_DECAY;
        stats.anneal_iterations += 1;
        let hood = Neighborhood::generate(&current);
        stats.neighborhoods += 1;
        let Some(next) = hood.random(rng) else {
            let intersections = current.intersection_count();
            tracing::debug!(iterations = stats.anneal_iterations, intersections, "anneal_stuck");
            return (current, Err(ImproveError::Stuck { intersections }));
        };
        let delta = next.intersection_count() as i64 - current.intersection_count() as i64;
        if delta > 0 || rng.gen::<f64>() > probability {
            let next = next.clone();
            if let Err(err) = check_integrity(&next) {
                return (current, Err(err));
            }
            current = next;
            stats.accepted += 1;
        }
    }
    tracing::debug!(
        iterations = stats.anneal_iterations,
        probability,
        crossings = current.intersection_count(),
        "anneal_done"
    );
    (current, Ok(()))
}
