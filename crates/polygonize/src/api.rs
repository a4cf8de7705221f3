//! Curated internal API (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports from outside the crate.

// Points and predicates
pub use crate::geometry::{orientation, segments_intersect, squared_distance, Segment};
pub use crate::point::{Point, PointSet, PointSetError, MAX_COORD, MIN_POINTS};
// Random instances
pub use crate::sample::{draw_points, draw_points_with, BoxCfg, ReplayToken};
// Tours
pub use crate::tour::{Crossing, Neighborhood, Tour};
// Construction
pub use crate::construct::{
    construct_tour, nearest_neighbor, random_permutation, run_colony, AntCfg, ConstructionError,
    ConstructionMethod, PheromoneTable, PHEROMONE_Q,
};
// Improvement
pub use crate::improve::{
    improve_step, ImproveError, ImproveRun, ImproveState, ImproveStats, Improver, Policy,
    ANNEAL_DECAY,
};
pub use crate::session::Session;
