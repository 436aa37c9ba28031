//! Store search and browse filters

use crate::catalog::{self, Store};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum store rating accepted by the filter
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingThreshold(f64);

impl RatingThreshold {
    pub const ANY: RatingThreshold = RatingThreshold(0.0);

    /// Thresholds offered as filter chips
    pub const PRESETS: [RatingThreshold; 3] = [
        RatingThreshold(4.5),
        RatingThreshold(4.0),
        RatingThreshold(3.5),
    ];

    pub fn new(min: f64) -> Self {
        Self(min.clamp(0.0, 5.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn accepts(&self, rating: f64) -> bool {
        rating >= self.0
    }

    pub fn is_any(&self) -> bool {
        self.0 <= 0.0
    }
}

impl fmt::Display for RatingThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            f.write_str("Any")
        } else {
            write!(f, "{:.1}+", self.0)
        }
    }
}

impl FromStr for RatingThreshold {
    type Err = CoreError;

    /// Accepts `4.5` and `4.5+`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('+').unwrap_or(trimmed);
        match number.parse::<f64>() {
            Ok(v) if (0.0..=5.0).contains(&v) => Ok(Self(v)),
            _ => Err(CoreError::InvalidRatingThreshold {
                input: s.to_string(),
            }),
        }
    }
}

/// Delivery speed bucket, keyed on the lower bound of a store's window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryBucket {
    Under20,
    From20To30,
    Over30,
}

impl DeliveryBucket {
    pub fn all() -> &'static [DeliveryBucket] {
        &[
            DeliveryBucket::Under20,
            DeliveryBucket::From20To30,
            DeliveryBucket::Over30,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryBucket::Under20 => "Under 20 min",
            DeliveryBucket::From20To30 => "20-30 min",
            DeliveryBucket::Over30 => "30+ min",
        }
    }

    pub fn of(store: &Store) -> DeliveryBucket {
        match store.delivery_time.min {
            0..=19 => DeliveryBucket::Under20,
            20..=29 => DeliveryBucket::From20To30,
            _ => DeliveryBucket::Over30,
        }
    }
}

/// How browse results are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(&self) -> ViewMode {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Combined search/browse filter; every unset field matches everything
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreFilter {
    pub query: String,
    /// `None` or "All" matches every category
    pub category: Option<String>,
    pub min_rating: RatingThreshold,
    pub delivery: Option<DeliveryBucket>,
    pub area: Option<String>,
}

impl StoreFilter {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, store: &Store) -> bool {
        let query = self.query.trim().to_lowercase();
        let query_ok = query.is_empty()
            || store.name.to_lowercase().contains(&query)
            || store.category.to_lowercase().contains(&query);

        let category_ok = match self.category.as_deref() {
            None | Some("All") | Some("") => true,
            Some(category) => store.category.eq_ignore_ascii_case(category),
        };

        let area_ok = self
            .area
            .as_deref()
            .is_none_or(|area| store.area.eq_ignore_ascii_case(area));

        query_ok
            && category_ok
            && area_ok
            && self.min_rating.accepts(store.rating)
            && self.delivery.is_none_or(|bucket| DeliveryBucket::of(store) == bucket)
    }

    pub fn apply<'a>(&self, stores: &'a [Store]) -> Vec<&'a Store> {
        stores.iter().filter(|s| self.matches(s)).collect()
    }

    /// Filter the mock catalog
    pub fn run(&self) -> Vec<&'static Store> {
        self.apply(catalog::stores())
    }

    pub fn clear(&mut self) {
        *self = Self {
            query: std::mem::take(&mut self.query),
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(stores: &[&Store]) -> Vec<String> {
        stores.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(StoreFilter::default().run().len(), catalog::stores().len());
        assert_eq!(StoreFilter::with_query("   ").run().len(), 4);
    }

    #[test]
    fn test_query_is_case_insensitive_on_name_and_category() {
        assert_eq!(names(&StoreFilter::with_query("PIZZA").run()), vec!["Pizza Paradise"]);
        assert_eq!(
            names(&StoreFilter::with_query("groceries").run()),
            vec!["Fresh Market", "Organic Greens"]
        );
    }

    #[test]
    fn test_rating_threshold_excludes_lower_ratings() {
        let filter = StoreFilter {
            min_rating: RatingThreshold::new(4.8),
            ..StoreFilter::default()
        };
        let found = names(&filter.run());
        assert!(found.contains(&"Fresh Market".to_string()));
        assert!(!found.contains(&"Organic Greens".to_string()));
    }

    #[test]
    fn test_category_all_and_exact() {
        assert_eq!(StoreFilter::with_category("All").run().len(), 4);
        assert_eq!(
            names(&StoreFilter::with_category("Pharmacy").run()),
            vec!["HealthPlus Pharmacy"]
        );
    }

    #[test]
    fn test_delivery_bucket_uses_lower_bound() {
        let filter = StoreFilter {
            delivery: Some(DeliveryBucket::Under20),
            ..StoreFilter::default()
        };
        assert_eq!(names(&filter.run()), vec!["HealthPlus Pharmacy"]);

        let filter = StoreFilter {
            delivery: Some(DeliveryBucket::Over30),
            ..StoreFilter::default()
        };
        assert_eq!(names(&filter.run()), vec!["Organic Greens"]);
    }

    #[test]
    fn test_area_filter() {
        let filter = StoreFilter {
            area: Some("downtown".to_string()),
            ..StoreFilter::default()
        };
        assert_eq!(filter.run().len(), 2);
    }

    #[test]
    fn test_clear_keeps_query() {
        let mut filter = StoreFilter {
            query: "fresh".to_string(),
            category: Some("Food".to_string()),
            min_rating: RatingThreshold::new(4.5),
            ..StoreFilter::default()
        };
        filter.clear();
        assert_eq!(filter.query, "fresh");
        assert!(filter.category.is_none());
        assert!(filter.min_rating.is_any());
    }

    #[test]
    fn test_threshold_parse() {
        assert_eq!("4.5+".parse::<RatingThreshold>().unwrap().value(), 4.5);
        assert!("six".parse::<RatingThreshold>().is_err());
        assert!("7".parse::<RatingThreshold>().is_err());
        assert_eq!(RatingThreshold::new(4.0).to_string(), "4.0+");
    }
}
