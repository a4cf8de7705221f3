//! Labelled integer points and validated point sets.
//!
//! - `Point`: integer coordinate plus a stable id used for display labels.
//!   Equality and hashing look at the coordinate only.
//! - `PointSet`: the ingestion boundary. At least three points, no two equal,
//!   every coordinate within `MAX_COORD`.

use nalgebra::Vector2;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Smallest point set that can form a polygon.
pub const MIN_POINTS: usize = 3;

/// Largest accepted `|x|` or `|y|`. Squared distances and orientation products
/// of in-range points stay below `2^62`.
pub const MAX_COORD: i64 = 1 << 29;

/// Immutable 2D integer point with a display id.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub pos: Vector2<i64>,
    pub id: usize,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64, id: usize) -> Self {
        Self {
            pos: Vector2::new(x, y),
            id,
        }
    }
    #[inline]
    pub fn x(&self) -> i64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> i64 {
        self.pos.y
    }

    /// Letter label: `A`..`Z` for the first 26 ids, then `A0`..`Z0`, `A1`, ...
    pub fn label(&self) -> String {
        let letter = char::from(b'A' + (self.id % 26) as u8);
        if self.id < 26 {
            letter.to_string()
        } else {
            format!("{letter}{}", self.id / 26 - 1)
        }
    }

    /// Lexicographic key on (x, y); used to normalise unordered pairs and to
    /// compare point multisets.
    #[inline]
    pub fn key(&self) -> (i64, i64) {
        (self.pos.x, self.pos.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pos.x, self.pos.y)
    }
}

/// Errors raised while ingesting or generating point sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointSetError {
    #[error("need at least {MIN_POINTS} points, got {found}")]
    TooFewPoints { found: usize },
    #[error("duplicate point ({x}, {y})")]
    DuplicatePoint { x: i64, y: i64 },
    #[error("cannot place {count} distinct points in a box with {capacity} lattice points")]
    TooManyPoints { count: usize, capacity: u64 },
    #[error("point ({x}, {y}) is outside [-{MAX_COORD}, {MAX_COORD}]")]
    CoordinateOutOfRange { x: i64, y: i64 },
    #[error("box half side {bound} is outside [0, {MAX_COORD}]")]
    BoundOutOfRange { bound: i64 },
}

/// Validated point set: `len() >= 3`, pairwise distinct coordinates.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Result<Self, PointSetError> {
        if points.len() < MIN_POINTS {
            return Err(PointSetError::TooFewPoints {
                found: points.len(),
            });
        }
        if let Some(p) = points
            .iter()
            .find(|p| p.x().unsigned_abs().max(p.y().unsigned_abs()) > MAX_COORD as u64)
        {
            return Err(PointSetError::CoordinateOutOfRange { x: p.x(), y: p.y() });
        }
        let mut keys: Vec<(i64, i64)> = points.iter().map(Point::key).collect();
        keys.sort_unstable();
        if let Some(w) = keys.windows(2).find(|w| w[0] == w[1]) {
            return Err(PointSetError::DuplicatePoint {
                x: w[0].0,
                y: w[0].1,
            });
        }
        Ok(Self { points })
    }

    /// Build from raw coordinates; ids follow input order.
    pub fn from_coords(coords: &[(i64, i64)]) -> Result<Self, PointSetError> {
        let points = coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Point::new(x, y, id))
            .collect();
        Self::new(points)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_wrap_after_z() {
        assert_eq!(Point::new(0, 0, 0).label(), "A");
        assert_eq!(Point::new(0, 0, 25).label(), "Z");
        assert_eq!(Point::new(0, 0, 26).label(), "A0");
        assert_eq!(Point::new(0, 0, 53).label(), "B1");
    }

    #[test]
    fn equality_ignores_id() {
        assert_eq!(Point::new(3, 4, 0), Point::new(3, 4, 9));
        assert_ne!(Point::new(3, 4, 0), Point::new(4, 3, 0));
        assert_eq!(Point::new(-2, 7, 1).to_string(), "(-2, 7)");
    }

    #[test]
    fn point_set_rejects_small_and_duplicate_input() {
        assert_eq!(
            PointSet::from_coords(&[(0, 0), (1, 1)]).unwrap_err(),
            PointSetError::TooFewPoints { found: 2 }
        );
        assert_eq!(
            PointSet::from_coords(&[(0, 0), (1, 1), (0, 0)]).unwrap_err(),
            PointSetError::DuplicatePoint { x: 0, y: 0 }
        );
        let ok = PointSet::from_coords(&[(0, 0), (1, 1), (2, 0)]).unwrap();
        assert_eq!(ok.len(), 3);
        assert_eq!(ok.points()[2].id, 2);
    }

    #[test]
    fn coordinates_are_range_checked() {
        let m = MAX_COORD;
        let edge = PointSet::from_coords(&[(-m, -m), (m, m), (m, -m), (-m, m)]).unwrap();
        assert_eq!(edge.len(), 4);
        assert_eq!(
            PointSet::from_coords(&[(0, 0), (m + 1, 0), (0, 1)]).unwrap_err(),
            PointSetError::CoordinateOutOfRange { x: m + 1, y: 0 }
        );
        assert_eq!(
            PointSet::from_coords(&[(0, 0), (3_000_000_000, 0), (0, 3_000_000_000)]).unwrap_err(),
            PointSetError::CoordinateOutOfRange {
                x: 3_000_000_000,
                y: 0
            }
        );
        assert!(matches!(
            PointSet::from_coords(&[(0, 0), (1, i64::MIN), (0, 1)]),
            Err(PointSetError::CoordinateOutOfRange { .. })
        ));
    }
}
