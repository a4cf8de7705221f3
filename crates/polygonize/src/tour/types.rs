//! Candidate tours with cached perimeter and lazily cached crossings.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::{segments_intersect, squared_distance, Segment};
use crate::point::Point;

/// A pair of non-adjacent tour edges that intersect, by edge index.
///
/// Edge `k` runs from `points[k]` to `points[(k + 1) % n]`; `first < second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub first: usize,
    pub second: usize,
}

impl Crossing {
    /// Positions exchanged by the 2-exchange that undoes this crossing: the end
    /// of the first edge and the start of the second.
    #[inline]
    pub fn swap_positions(&self) -> (usize, usize) {
        (self.first + 1, self.second)
    }
}

/// Ordered cyclic sequence of points.
///
/// Invariants:
/// - Immutable after construction; every move builds a new `Tour`.
/// - `perimeter` is the sum of squared edge lengths including the closing edge,
///   accumulated in `i128` so long tours of far-apart points cannot overflow.
/// - `parent` is the ordering this tour was derived from. It is a shared
///   read-only slice, so holding a tour keeps exactly one ancestor ordering alive.
#[derive(Clone)]
pub struct Tour {
    points: Rc<[Point]>,
    parent: Option<Rc<[Point]>>,
    perimeter: i128,
    crossings: OnceCell<Vec<Crossing>>,
}

impl Tour {
    /// Root tour with no recorded origin.
    pub fn from_order(points: Vec<Point>) -> Self {
        Self::build(points.into(), None)
    }

    /// Tour derived from `parent` (an input ordering or another tour).
    pub fn derived(points: Vec<Point>, parent: Rc<[Point]>) -> Self {
        Self::build(points.into(), Some(parent))
    }

    fn build(points: Rc<[Point]>, parent: Option<Rc<[Point]>>) -> Self {
        let perimeter = perimeter_of(&points);
        Self {
            points,
            parent,
            perimeter,
            crossings: OnceCell::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn ordered_points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn perimeter(&self) -> i128 {
        self.perimeter
    }
    #[inline]
    pub fn parent(&self) -> Option<&[Point]> {
        self.parent.as_deref()
    }

    /// Edge `k` as a segment (`k < len`).
    #[inline]
    pub fn edge(&self, k: usize) -> Segment {
        let n = self.points.len();
        Segment::new(self.points[k], self.points[(k + 1) % n])
    }

    /// All edges in tour order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.points.len()).map(move |k| self.edge(k))
    }

    /// Crossing edge pairs, computed on first use.
    pub fn crossings(&self) -> &[Crossing] {
        self.crossings.get_or_init(|| find_crossings(self))
    }

    #[inline]
    pub fn intersection_count(&self) -> usize {
        self.crossings().len()
    }

    /// Same points as the parent ordering, each exactly once.
    ///
    /// Root tours only check that no point repeats.
    pub fn integrity_valid(&self) -> bool {
        let mut mine: Vec<(i64, i64)> = self.points.iter().map(Point::key).collect();
        mine.sort_unstable();
        if mine.windows(2).any(|w| w[0] == w[1]) {
            return false;
        }
        match &self.parent {
            None => true,
            Some(parent) => {
                if parent.len() != mine.len() {
                    return false;
                }
                let mut theirs: Vec<(i64, i64)> = parent.iter().map(Point::key).collect();
                theirs.sort_unstable();
                mine == theirs
            }
        }
    }

    /// Whether this tour visits points in exactly the order `other`.
    #[inline]
    pub fn same_order(&self, other: &[Point]) -> bool {
        self.points[..] == *other
    }

    /// 2-exchange: a new tour with positions `i` and `j` swapped, whose parent is
    /// this tour.
    pub fn swap_positions(&self, i: usize, j: usize) -> Tour {
        let mut next = self.points.to_vec();
        next.swap(i, j);
        Tour::derived(next, Rc::clone(&self.points))
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(Point::label).collect()
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tour")
            .field("labels", &self.labels())
            .field("perimeter", &self.perimeter)
            .field("crossings", &self.crossings.get().map(Vec::len))
            .finish()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.labels().join(", "))
    }
}

fn perimeter_of(points: &[Point]) -> i128 {
    let n = points.len();
    (0..n)
        .map(|k| i128::from(squared_distance(&points[k], &points[(k + 1) % n])))
        .sum()
}

/// Every non-adjacent edge pair `(i, j)`, `i < j`, that intersects. The pair of
/// edge 0 with the closing edge is adjacent through `points[0]` and skipped.
fn find_crossings(tour: &Tour) -> Vec<Crossing> {
    let n = tour.len();
    let mut out = Vec::new();
    for i in 0..n.saturating_sub(2) {
        let e1 = tour.edge(i);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(&e1, &tour.edge(j)) {
                out.push(Crossing {
                    first: i,
                    second: j,
                });
            }
        }
    }
    out
}
