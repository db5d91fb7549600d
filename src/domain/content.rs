//! Content records held by the catalog.
//!
//! A record's descriptive fields are fixed once the catalog creates it; the
//! only thing that moves is the view counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::genre::Genre;
use super::rating::AgeRating;

/// Content identifier, assigned by the catalog starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(u32);

impl ContentId {
    /// Wrap a raw identifier
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ContentId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    id: ContentId,
    title: String,
    genre: Genre,
    length_minutes: u32,
    age_rating: AgeRating,
    views: u64,
    added_at: DateTime<Utc>,
}

impl Content {
    /// Build a fresh record with zero views.
    ///
    /// Callers are expected to have validated every field already.
    pub(crate) fn new(
        id: ContentId,
        title: impl Into<String>,
        genre: Genre,
        length_minutes: u32,
        age_rating: AgeRating,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            genre,
            length_minutes,
            age_rating,
            views: 0,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn length_minutes(&self) -> u32 {
        self.length_minutes
    }

    pub fn age_rating(&self) -> AgeRating {
        self.age_rating
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    /// When the catalog created this record
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Count one more view
    pub(crate) fn record_view(&mut self) {
        self.views += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_id_parse_and_display() {
        let id: ContentId = " 42 ".parse().unwrap();
        assert_eq!(id, ContentId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<ContentId>().is_err());
        assert!("-1".parse::<ContentId>().is_err());
    }

    #[test]
    fn test_new_content_starts_with_zero_views() {
        let content = Content::new(ContentId::new(1), "Arcane", Genre::Series, 42, AgeRating::Fifteen);

        assert_eq!(content.id().get(), 1);
        assert_eq!(content.title(), "Arcane");
        assert_eq!(content.genre(), Genre::Series);
        assert_eq!(content.length_minutes(), 42);
        assert_eq!(content.age_rating(), AgeRating::Fifteen);
        assert_eq!(content.views(), 0);
    }

    #[test]
    fn test_record_view_increments_by_one() {
        let mut content = Content::new(ContentId::new(7), "Dune", Genre::Movie, 155, AgeRating::Eleven);

        content.record_view();
        content.record_view();

        assert_eq!(content.views(), 2);
    }

    #[test]
    fn test_content_serializes_flat() {
        let content = Content::new(ContentId::new(3), "CS2 Major", Genre::Live, 180, AgeRating::All);
        let json = serde_json::to_value(&content).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["genre"], "live");
        assert_eq!(json["age_rating"], 0);
        assert_eq!(json["views"], 0);
    }
}
