//! Filter state for the discovery feed.
//!
//! [`FilterState`] holds the three live filters the derivation engine intersects:
//! free-text search, category, and city. Both dropdown filters carry an explicit
//! `All` variant instead of an empty string sentinel.

use super::event::Category;
use std::fmt;

/// Known cities offered by the city dropdown.
///
/// The city filter accepts any name; cities outside this list simply match
/// whatever catalog events carry that exact name (possibly none).
pub const CITIES: [&str; 5] = ["Bangkok", "Chiang Mai", "Phuket", "Pattaya", "Koh Samui"];

/// Category dropdown / rail selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether an event in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Parses `"All"` (any case) or a category name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(Self::All)
        } else {
            s.parse().ok().map(Self::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(c) => c.fmt(f),
        }
    }
}

/// City dropdown selection.
///
/// Matching is exact and case-sensitive, unlike the search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    Only(String),
}

impl CityFilter {
    #[must_use]
    pub fn matches(&self, city: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == city,
        }
    }

    /// Parses `"All"` as [`CityFilter::All`]; anything else is taken verbatim.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == "All" {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(city) => f.write_str(city),
        }
    }
}

/// Live filter state. Defaults to an empty query and `All` / `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_query: String,
    pub category: CategoryFilter,
    pub city: CityFilter,
}

impl FilterState {
    /// Whether every filter is at its default (the feed shows the whole catalog).
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty()
            && self.category == CategoryFilter::All
            && self.city == CityFilter::All
    }

    /// Resets all three filters, as the "Clear Filters" button does.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("Arts"),
            Some(CategoryFilter::Only(Category::Arts))
        );
        assert_eq!(CategoryFilter::parse("Opera"), None);
    }

    #[test]
    fn city_filter_is_case_sensitive() {
        let filter = CityFilter::parse("Bangkok");
        assert!(filter.matches("Bangkok"));
        assert!(!filter.matches("bangkok"));
        assert!(CityFilter::All.matches("anywhere"));
    }

    #[test]
    fn clear_restores_defaults() {
        let mut filter = FilterState {
            search_query: "yoga".into(),
            category: CategoryFilter::Only(Category::Sports),
            city: CityFilter::parse("Bangkok"),
        };
        assert!(!filter.is_default());
        filter.clear();
        assert!(filter.is_default());
    }
}
