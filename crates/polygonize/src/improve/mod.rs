//! Local search that drives a tour to zero crossings.
//!
//! Purpose
//! - `Policy`: which neighbor replaces the current tour each step.
//! - `improve_step`: one transition under a policy (annealing runs its whole
//!   phase in one call).
//! - `Improver`: state machine over tours with an optional step budget;
//!   `Improver::finish` reports the tour a run ended on, even when it failed.
//!
//! Termination
//! - Only convergence (zero crossings) ends a run. Nothing guarantees that for
//!   first-improvement, random or least-conflict in general; callers that need a
//!   bound use `Improver::run_with_budget` or `Improver::finish`.

mod anneal;
mod runner;

use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::tour::{Neighborhood, Tour};

pub use anneal::{anneal, anneal_phase, ANNEAL_DECAY, ANNEAL_INITIAL_PROBABILITY};
pub use runner::{ImproveRun, ImproveState, ImproveStats, Improver};

/// Errors surfaced by improvement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImproveError {
    /// No neighbor is available although crossings remain.
    #[error("stuck: {intersections} crossing(s) remain but no 2-exchange neighbor is available")]
    Stuck { intersections: usize },
    /// A move produced a tour that is not a permutation of its parent.
    #[error("integrity violation after a move: tour has {found} points")]
    IntegrityViolation { found: usize },
    #[error("unknown improvement policy `{selector}`")]
    InvalidPolicySelector { selector: String },
    #[error("step budget of {steps} exhausted with {intersections} crossing(s) left")]
    BudgetExhausted { steps: usize, intersections: usize },
}

/// Neighbor selection rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Smallest perimeter.
    BestFirst,
    /// First neighbor generated.
    FirstImprovement,
    /// Fewest crossings.
    LeastConflict,
    /// Uniformly random neighbor.
    Random,
    /// Annealing on crossing count for `max_iters` iterations, then
    /// `LeastConflict`.
    Annealing { max_iters: usize },
}

impl Policy {
    /// Parse a policy name (or its menu number). `anneal_iters` parameterises
    /// `annealing`.
    pub fn from_selector(selector: &str, anneal_iters: usize) -> Result<Self, ImproveError> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "1" | "best-first" | "best" => Ok(Self::BestFirst),
            "2" | "first" | "first-improvement" => Ok(Self::FirstImprovement),
            "3" | "least-conflict" | "less-conflict" => Ok(Self::LeastConflict),
            "4" | "random" | "any" => Ok(Self::Random),
            "5" | "annealing" | "anneal" => Ok(Self::Annealing {
                max_iters: anneal_iters,
            }),
            _ => Err(ImproveError::InvalidPolicySelector {
                selector: selector.to_string(),
            }),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestFirst => write!(f, "best-first"),
            Self::FirstImprovement => write!(f, "first-improvement"),
            Self::LeastConflict => write!(f, "least-conflict"),
            Self::Random => write!(f, "random"),
            Self::Annealing { max_iters } => write!(f, "annealing({max_iters})"),
        }
    }
}

/// One transition of `tour` under `policy`.
///
/// A crossing-free tour is returned unchanged without generating neighbors.
/// `Annealing` runs its full phase; the caller decides what follows.
pub fn improve_step<R: Rng>(
    tour: &Tour,
    policy: Policy,
    rng: &mut R,
) -> Result<Tour, ImproveError> {
    if tour.intersection_count() == 0 {
        return Ok(tour.clone());
    }
    transition(tour, policy, rng, &mut ImproveStats::default())
}

/// Dispatch on the policy; assumes `tour` has crossings.
fn transition<R: Rng>(
    tour: &Tour,
    policy: Policy,
    rng: &mut R,
    stats: &mut ImproveStats,
) -> Result<Tour, ImproveError> {
    let next = match policy {
        Policy::Annealing { max_iters } => anneal(tour, max_iters, rng, stats)?,
        Policy::BestFirst => pick(tour, stats, |h| h.smallest_perimeter().cloned())?,
        Policy::FirstImprovement => pick(tour, stats, |h| h.first().cloned())?,
        Policy::LeastConflict => pick(tour, stats, |h| h.least_intersections().cloned())?,
        Policy::Random => pick(tour, stats, |h| h.random(rng).cloned())?,
    };
    check_integrity(&next)?;
    Ok(next)
}

/// Generate the neighborhood of `tour` and let `select` choose; `Stuck` when
/// nothing is chosen.
fn pick(
    tour: &Tour,
    stats: &mut ImproveStats,
    select: impl FnOnce(&Neighborhood) -> Option<Tour>,
) -> Result<Tour, ImproveError> {
    let hood = Neighborhood::generate(tour);
    stats.neighborhoods += 1;
    let next = select(&hood).ok_or(ImproveError::Stuck {
        intersections: tour.intersection_count(),
    })?;
    stats.accepted += 1;
    Ok(next)
}

fn check_integrity(tour: &Tour) -> Result<(), ImproveError> {
    if tour.integrity_valid() {
        Ok(())
    } else {
        Err(ImproveError::IntegrityViolation { found: tour.len() })
    }
}
