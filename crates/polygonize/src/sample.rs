//! Random lattice point sets (uniform in a box + replay tokens).
//!
//! Model
//! - `count` distinct integer points uniform in `[-bound, bound]²`; a draw that
//!   repeats an earlier coordinate is redrawn.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   the k-th instance of a batch can be regenerated on its own.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::{Point, PointSet, PointSetError, MAX_COORD, MIN_POINTS};

/// Box sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxCfg {
    pub count: usize,
    /// Half side length; coordinates lie in `[-bound, bound]`. At most
    /// `MAX_COORD`.
    pub bound: i64,
}
impl Default for BoxCfg {
    fn default() -> Self {
        Self {
            count: 10,
            bound: 100,
        }
    }
}
impl BoxCfg {
    /// Lattice points in the box, `(2·bound + 1)²` (0 for a negative bound).
    pub fn capacity(&self) -> u64 {
        if self.bound < 0 {
            return 0;
        }
        let side = self.bound.unsigned_abs().saturating_mul(2).saturating_add(1);
        side.saturating_mul(side)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point set for `tok`.
pub fn draw_points(cfg: BoxCfg, tok: ReplayToken) -> Result<PointSet, PointSetError> {
    draw_points_with(cfg, &mut tok.to_std_rng())
}

/// Draw a random point set from a caller-owned RNG.
pub fn draw_points_with<R: Rng>(cfg: BoxCfg, rng: &mut R) -> Result<PointSet, PointSetError> {
    if cfg.count < MIN_POINTS {
        return Err(PointSetError::TooFewPoints { found: cfg.count });
    }
    if cfg.bound > MAX_COORD {
        return Err(PointSetError::BoundOutOfRange { bound: cfg.bound });
    }
    let capacity = cfg.capacity();
    if cfg.count as u64 > capacity {
        return Err(PointSetError::TooManyPoints {
            count: cfg.count,
            capacity,
        });
    }
    let mut seen = HashSet::with_capacity(cfg.count);
    let mut points = Vec::with_capacity(cfg.count);
    while points.len() < cfg.count {
        let x = rng.gen_range(-cfg.bound..=cfg.bound);
        let y = rng.gen_range(-cfg.bound..=cfg.bound);
        if seen.insert((x, y)) {
            points.push(Point::new(x, y, points.len()));
        }
    }
    tracing::trace!(count = cfg.count, bound = cfg.bound, "points_drawn");
    PointSet::new(points)
}
