//! Simple polygons through lattice point sets.
//!
//! A tour visits every input point once; the polygon it closes is simple when no
//! two non-adjacent edges intersect. `construct` builds an initial tour,
//! `improve` repairs crossings with 2-exchange moves, `session` ties both to one
//! RNG and pheromone table.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api` is
//!   the curated surface for the CLI and benches.

pub mod api;
pub mod construct;
pub mod geometry;
pub mod improve;
pub mod point;
pub mod sample;
pub mod session;
pub mod tour;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::construct::{AntCfg, ConstructionMethod, PheromoneTable};
    pub use crate::improve::{ImproveState, Improver, Policy};
    pub use crate::point::{Point, PointSet};
    pub use crate::sample::{draw_points, BoxCfg, ReplayToken};
    pub use crate::session::Session;
    pub use crate::tour::{Neighborhood, Tour};
}
