//! Star rating markers.

/// Highest rating a card will draw.
pub const MAX_STARS: u32 = 5;

/// Full and half star markers for a numeric rating.
///
/// One full star per whole point, plus a single half star when the
/// remainder is at least 0.5. Outline stars are never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u32,
    pub half: bool,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        if !rating.is_finite() || rating <= 0.0 {
            return Self { full: 0, half: false };
        }
        let rating = rating.min(f64::from(MAX_STARS));
        let full = rating.trunc();
        Self {
            full: full as u32,
            half: rating - full >= 0.5,
        }
    }

    /// Total markers rendered.
    pub fn markers(&self) -> u32 {
        self.full + u32::from(self.half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_and_a_half() {
        assert_eq!(StarRating::from_rating(4.5), StarRating { full: 4, half: true });
    }

    #[test]
    fn whole_number_has_no_half() {
        assert_eq!(StarRating::from_rating(3.0), StarRating { full: 3, half: false });
    }

    #[test]
    fn zero_renders_nothing() {
        assert_eq!(StarRating::from_rating(0.0).markers(), 0);
    }

    #[test]
    fn remainder_below_half_is_dropped() {
        assert_eq!(StarRating::from_rating(3.49), StarRating { full: 3, half: false });
        assert_eq!(StarRating::from_rating(3.99), StarRating { full: 3, half: true });
    }

    #[test]
    fn never_more_than_one_half_star() {
        for tenths in 0..=50 {
            let stars = StarRating::from_rating(f64::from(tenths) / 10.0);
            assert!(stars.markers() <= MAX_STARS);
        }
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(StarRating::from_rating(7.5), StarRating { full: 5, half: false });
        assert_eq!(StarRating::from_rating(-2.0).markers(), 0);
        assert_eq!(StarRating::from_rating(f64::NAN).markers(), 0);
    }
}
