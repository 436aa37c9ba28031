//! Order review draft

use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

/// Star rating and comment being written for an order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Clamped to 0..=5
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.min(MAX_RATING);
    }

    pub fn label(&self) -> Option<&'static str> {
        rating_label(self.rating)
    }

    pub fn can_submit(&self) -> bool {
        self.rating > 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        5 => Some("Excellent!"),
        4 => Some("Great!"),
        3 => Some("Good"),
        2 => Some("Could be better"),
        1 => Some("Poor"),
        _ => None,
    }
}

/// `★★★☆☆` style rendering
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(usize::from(MAX_RATING) - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_clamped() {
        let mut draft = ReviewDraft::default();
        draft.set_rating(9);
        assert_eq!(draft.rating(), 5);
        assert_eq!(draft.label(), Some("Excellent!"));
    }

    #[test]
    fn test_submit_requires_rating() {
        let mut draft = ReviewDraft::default();
        assert!(!draft.can_submit());
        assert_eq!(draft.label(), None);
        draft.set_rating(2);
        assert!(draft.can_submit());
        assert_eq!(draft.label(), Some("Could be better"));
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }
}
