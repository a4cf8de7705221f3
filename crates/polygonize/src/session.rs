//! One solving session: the injected RNG plus the pheromone table that
//! successive ant colonies share.
//!
//! Trails persist across `construct` calls until `reset`; independent runs
//! either reset or use a fresh session.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::construct::{construct_tour, ConstructionError, ConstructionMethod, PheromoneTable};
use crate::improve::{ImproveRun, Improver, Policy};
use crate::point::PointSet;
use crate::tour::Tour;

pub struct Session<R: Rng = StdRng> {
    rng: R,
    pheromone: PheromoneTable,
}

impl Session<StdRng> {
    /// Reproducible session from a `u64` seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            pheromone: PheromoneTable::new(),
        }
    }

    /// Build an initial tour; `AntColony` reads and extends the session trails.
    pub fn construct(
        &mut self,
        points: &PointSet,
        method: ConstructionMethod,
    ) -> Result<Tour, ConstructionError> {
        construct_tour(points, method, &mut self.rng, &mut self.pheromone)
    }

    /// Improver that draws from the session RNG.
    pub fn improver(&mut self, tour: Tour, policy: Policy) -> Improver<&mut R> {
        Improver::new(tour, policy, &mut self.rng)
    }

    /// Improve until converged, stuck, or `max_steps` transitions are spent.
    pub fn improve(
        &mut self,
        tour: Tour,
        policy: Policy,
        max_steps: Option<usize>,
    ) -> ImproveRun {
        self.improver(tour, policy).finish(max_steps)
    }

    #[inline]
    pub fn pheromone(&self) -> &PheromoneTable {
        &self.pheromone
    }

    /// Forget all trails.
    pub fn reset(&mut self) {
        tracing::debug!(trails = self.pheromone.len(), "pheromone_reset");
        self.pheromone.reset();
    }
}
