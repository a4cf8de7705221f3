//! 2-exchange neighborhood restricted to detected crossings.

use rand::Rng;

use super::types::Tour;

/// Neighbors of one tour, in generation order.
///
/// One neighbor per crossing: the tour with the end of the first edge and the
/// start of the second edge exchanged. A neighbor whose ordering equals the
/// source tour's parent is dropped, so a move is never undone immediately.
#[derive(Clone, Debug, Default)]
pub struct Neighborhood {
    tours: Vec<Tour>,
}

impl Neighborhood {
    /// Quadratic in tour length (dominated by the crossing scan of `tour`).
    pub fn generate(tour: &Tour) -> Self {
        let tours = tour
            .crossings()
            .iter()
            .map(|c| {
                let (i, j) = c.swap_positions();
                tour.swap_positions(i, j)
            })
            .filter(|next| tour.parent().is_none_or(|p| !next.same_order(p)))
            .collect();
        Self { tours }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tours.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Tour> {
        self.tours.iter()
    }

    /// First neighbor in generation order.
    #[inline]
    pub fn first(&self) -> Option<&Tour> {
        self.tours.first()
    }

    /// Minimum perimeter; ties keep the earliest.
    pub fn smallest_perimeter(&self) -> Option<&Tour> {
        self.tours.iter().min_by_key(|t| t.perimeter())
    }

    /// Minimum intersection count; ties keep the earliest. Evaluates (and
    /// caches) each neighbor's own crossings.
    pub fn least_intersections(&self) -> Option<&Tour> {
        self.tours.iter().min_by_key(|t| t.intersection_count())
    }

    /// Uniform pick.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&Tour> {
        if self.tours.is_empty() {
            return None;
        }
        Some(&self.tours[rng.gen_range(0..self.tours.len())])
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = &'a Tour;
    type IntoIter = std::slice::Iter<'a, Tour>;
    fn into_iter(self) -> Self::IntoIter {
        self.tours.iter()
    }
}
