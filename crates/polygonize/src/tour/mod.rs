//! Candidate tours and their crossing-driven 2-exchange neighborhood.
//!
//! Purpose
//! - `Tour`: immutable cyclic ordering with cached perimeter (sum of squared
//!   edge lengths) and a lazily computed crossing set.
//! - `Neighborhood`: all tours reachable by one 2-exchange that targets a
//!   detected crossing, minus the tour we just came from.
//!
//! Conventions
//! - Edge `k` joins `points[k]` and `points[(k + 1) % n]`.
//! - Adjacent edges are never tested against each other, so shared vertices
//!   are not crossings.

mod neighborhood;
mod types;

pub use neighborhood::Neighborhood;
pub use types::{Crossing, Tour};
