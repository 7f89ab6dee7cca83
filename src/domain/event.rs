//! Event domain model.
//!
//! This module defines the [`Event`] record shown in the discovery feed, along with
//! its [`Location`], [`Organizer`], and the closed [`Category`] enumeration. Events
//! are immutable once loaded into a catalog; anything the user does to an event
//! (saving it, RSVP'ing) lives in the selection store, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event category.
///
/// A closed enumeration: catalog files naming any other category fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Music,
    Sports,
    Food,
    Arts,
    Community,
    Workshops,
    Family,
    Nightlife,
    Travel,
}

impl Category {
    /// All categories in category-rail order.
    pub const ALL: [Self; 9] = [
        Self::Music,
        Self::Sports,
        Self::Food,
        Self::Arts,
        Self::Community,
        Self::Workshops,
        Self::Family,
        Self::Nightlife,
        Self::Travel,
    ];

    /// Short identifier, also the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Music => "Music",
            Self::Sports => "Sports",
            Self::Food => "Food",
            Self::Arts => "Arts",
            Self::Community => "Community",
            Self::Workshops => "Workshops",
            Self::Family => "Family",
            Self::Nightlife => "Nightlife",
            Self::Travel => "Travel",
        }
    }

    /// Human-facing label used by the category rail and the organizer form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Music => "Music & Concerts",
            Self::Sports => "Sports & Outdoor",
            Self::Food => "Markets & Food",
            Self::Arts => "Arts & Culture",
            Self::Community => "Community",
            Self::Workshops => "Workshops",
            Self::Family => "Family & Kids",
            Self::Nightlife => "Nightlife",
            Self::Travel => "Travel",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Music => "🎵",
            Self::Sports => "🏃",
            Self::Food => "🍜",
            Self::Arts => "🎨",
            Self::Community => "🤝",
            Self::Workshops => "💡",
            Self::Family => "🎈",
            Self::Nightlife => "🍸",
            Self::Travel => "🗺️",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses a category by identifier, case-insensitively.
    ///
    /// ```
    /// use eventscout::Category;
    ///
    /// assert_eq!("nightlife".parse::<Category>(), Ok(Category::Nightlife));
    /// assert!("Opera".parse::<Category>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub venue: String,
    pub city: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// Who runs an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    pub avatar: String,
    pub contact: String,
}

/// An event in the discovery catalog.
///
/// The JSON form uses camelCase field names (`startDate`, `imageUrl`,
/// `rsvpCount`, `isPopular`), matching catalog files.
///
/// # Fields
///
/// - `price`: non-negative amount in `currency`; `0.0` means free admission
/// - `rsvp_count`: baseline attendance from the catalog, excluding the current
///   user's own RSVP (see [`crate::app::derive::displayed_rsvp_count`])
/// - `is_popular`: curation flag, independent of `rsvp_count`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub location: Location,
    pub category: Category,
    pub image_url: String,
    pub price: f64,
    pub currency: String,
    pub organizer: Organizer,
    pub rsvp_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    /// Whether admission is free.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Whether the event is curated as popular. An absent flag counts as `false`.
    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.is_popular.unwrap_or(false)
    }

    /// Price label for cards: `"Free"` for zero, otherwise amount and currency.
    ///
    /// ```
    /// # use eventscout::catalog::Catalog;
    /// let catalog = Catalog::sample();
    /// assert_eq!(catalog.get("2").unwrap().price_label(), "Free");
    /// assert_eq!(catalog.get("4").unwrap().price_label(), "100 THB");
    /// ```
    #[must_use]
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else if self.price.fract() == 0.0 {
            format!("{:.0} {}", self.price, self.currency)
        } else {
            format!("{:.2} {}", self.price, self.currency)
        }
    }
}
