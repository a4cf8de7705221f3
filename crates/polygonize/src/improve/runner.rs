//! Improvement state machine.

use rand::Rng;

use super::{anneal_phase, transition, ImproveError, Policy};
use crate::tour::Tour;

/// Where a run stands after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImproveState {
    Improving,
    /// Zero crossings; terminal.
    Converged,
    /// Crossings remain but the neighborhood is empty.
    Stuck { intersections: usize },
}

/// Counters accumulated over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImproveStats {
    /// Completed transitions (an annealing phase counts as one).
    pub steps: usize,
    /// Neighborhoods generated.
    pub neighborhoods: usize,
    /// Moves accepted, including those inside annealing.
    pub accepted: usize,
    pub anneal_iterations: usize,
}

/// How a run ended: the tour it stopped on, the counters, and the reason it
/// stopped short of convergence (if it did).
#[derive(Clone, Debug)]
pub struct ImproveRun {
    pub tour: Tour,
    pub stats: ImproveStats,
    /// `None` when the run converged.
    pub error: Option<ImproveError>,
}

impl ImproveRun {
    #[inline]
    pub fn converged(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Tour, ImproveError> {
        match self.error {
            None => Ok(self.tour),
            Some(err) => Err(err),
        }
    }
}

/// Drives a tour to zero crossings under a policy.
///
/// After an annealing phase the policy switches to `LeastConflict` for the rest
/// of the run.
pub struct Improver<R: Rng> {
    current: Tour,
    policy: Policy,
    rng: R,
    stats: ImproveStats,
}

impl<R: Rng> Improver<R> {
    pub fn new(tour: Tour, policy: Policy, rng: R) -> Self {
        Self {
            current: tour,
            policy,
            rng,
            stats: ImproveStats::default(),
        }
    }

    #[inline]
    pub fn current(&self) -> &Tour {
        &self.current
    }
    /// Active policy (changes after annealing).
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }
    #[inline]
    pub fn stats(&self) -> ImproveStats {
        self.stats
    }
    pub fn into_tour(self) -> Tour {
        self.current
    }

    pub fn state(&self) -> ImproveState {
        if self.current.intersection_count() == 0 {
            ImproveState::Converged
        } else {
            ImproveState::Improving
        }
    }

    /// One transition. A converged tour returns immediately without touching
    /// the neighborhood; an empty neighborhood reports `Stuck` and keeps the
    /// tour the search had reached.
    pub fn step(&mut self) -> Result<ImproveState, ImproveError> {
        if self.current.intersection_count() == 0 {
            return Ok(ImproveState::Converged);
        }
        let moved = match self.policy {
            Policy::Annealing { max_iters } => {
                let (reached, outcome) =
                    anneal_phase(&self.current, max_iters, &mut self.rng, &mut self.stats);
                self.current = reached;
                self.policy = Policy::LeastConflict;
                outcome
            }
            policy => transition(&self.current, policy, &mut self.rng, &mut self.stats)
                .map(|next| self.current = next),
        };
        match moved {
            Ok(()) => {}
            Err(ImproveError::Stuck { intersections }) => {
                tracing::debug!(step = self.stats.steps, intersections, "stuck");
                return Ok(ImproveState::Stuck { intersections });
            }
            Err(err) => return Err(err),
        }
        self.stats.steps += 1;
        tracing::debug!(
            step = self.stats.steps,
            policy = %self.policy,
            crossings = self.current.intersection_count(),
            perimeter = self.current.perimeter(),
            "step"
        );
        Ok(self.state())
    }

    /// Step until converged. `Stuck` becomes an error.
    pub fn run(self) -> Result<Tour, ImproveError> {
        self.finish(None).into_result()
    }

    /// Like `run`, but gives up after `max_steps` transitions.
    pub fn run_with_budget(self, max_steps: usize) -> Result<Tour, ImproveError> {
        self.finish(Some(max_steps)).into_result()
    }

    /// Step until converged, stuck, or out of budget, and report where the run
    /// stopped.
    pub fn finish(mut self, budget: Option<usize>) -> ImproveRun {
        let error = loop {
            if let Some(max) = budget {
                let intersections = self.current.intersection_count();
                if self.stats.steps >= max && intersections > 0 {
                    break Some(ImproveError::BudgetExhausted {
                        steps: self.stats.steps,
                        intersections,
                    });
                }
            }
            match self.step() {
                Ok(ImproveState::Converged) => {
                    tracing::debug!(stats = ?self.stats, "converged");
                    break None;
                }
                Ok(ImproveState::Stuck { intersections }) => {
                    break Some(ImproveError::Stuck { intersections })
                }
                Ok(ImproveState::Improving) => {}
                Err(err) => break Some(err),
            }
        };
        ImproveRun {
            tour: self.current,
            stats: self.stats,
            error,
        }
    }
}
