//! The catalog service.
//!
//! Owns every `Content` record, hands out identities, validates input and
//! answers the genre, trending and playback queries.

use std::cmp::Ordering;

use tracing::{debug, info};

use super::error::{CatalogError, CatalogResult, MAX_LENGTH_MINUTES};
use crate::domain::{AgeRating, Content, ContentId, Genre};

/// In-memory media catalog
#[derive(Debug)]
pub struct CatalogService {
    /// Records in insertion order
    items: Vec<Content>,

    /// Next identity to hand out; never rewound, even after removal
    next_id: u32,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and store a new item, returning a snapshot of it.
    ///
    /// Rules are checked in order and the first violation is returned:
    /// blank title, missing genre, non-positive length, length above
    /// [`MAX_LENGTH_MINUTES`], negative rating, unknown rating tier.
    pub fn add(
        &mut self,
        title: &str,
        genre: impl Into<Option<Genre>>,
        length_minutes: i32,
        age_rating: i32,
    ) -> CatalogResult<Content> {
        let (genre, length_minutes, age_rating) =
            validate(title, genre.into(), length_minutes, age_rating).map_err(|e| {
                debug!(title, error = %e, "Rejected new content");
                e
            })?;

        let id = ContentId::new(self.next_id);
        self.next_id += 1;

        let content = Content::new(id, title, genre, length_minutes, age_rating);
        info!(%id, title, %genre, "Content added");
        self.items.push(content.clone());

        Ok(content)
    }

    /// Snapshot of every item in insertion order
    pub fn catalog(&self) -> Vec<Content> {
        self.items.clone()
    }

    /// Get an item by ID
    pub fn find_by_id(&self, id: ContentId) -> Option<&Content> {
        self.items.iter().find(|c| c.id() == id)
    }

    /// Attempt playback of `content_id` for a viewer of `user_age` years.
    ///
    /// Returns `Ok(false)` when the item does not exist or the viewer is
    /// below its rating; the view counter only moves on `Ok(true)`. A
    /// negative age is an error, but only for an item that exists.
    pub fn play(&mut self, content_id: ContentId, user_age: i32) -> CatalogResult<bool> {
        let Some(content) = self.items.iter_mut().find(|c| c.id() == content_id) else {
            debug!(%content_id, "Play on unknown content");
            return Ok(false);
        };

        let age = u32::try_from(user_age).map_err(|_| CatalogError::NegativeAge { age: user_age })?;

        if !content.age_rating().permits(age) {
            debug!(%content_id, age, rating = %content.age_rating(), "Play denied by age rating");
            return Ok(false);
        }

        content.record_view();
        debug!(%content_id, views = content.views(), "Play recorded");
        Ok(true)
    }

    /// All items of `genre`, sorted by title
    pub fn find_by_genre(&self, genre: Genre) -> Vec<&Content> {
        let mut items: Vec<_> = self.items.iter().filter(|c| c.genre() == genre).collect();
        items.sort_by(|a, b| a.title().cmp(b.title()));
        items
    }

    /// Summed runtime in minutes of every item of `genre`
    pub fn total_runtime_by_genre(&self, genre: Genre) -> u64 {
        self.items
            .iter()
            .filter(|c| c.genre() == genre)
            .map(|c| u64::from(c.length_minutes()))
            .sum()
    }

    /// Up to `n` items ranked by views (most first), ties broken by title.
    ///
    /// `n` must be positive. Asking for more than the catalog holds returns
    /// the whole catalog.
    pub fn top_trending(&self, n: i32) -> CatalogResult<Vec<&Content>> {
        let limit = usize::try_from(n)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(CatalogError::InvalidArgument {
                name: "n",
                value: i64::from(n),
            })?;

        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| trending_order(a, b));
        items.truncate(limit);

        Ok(items)
    }

    /// The most viewed item of `genre`; on equal views the smaller title wins
    pub fn most_viewed_in_genre(&self, genre: Genre) -> Option<&Content> {
        let mut best: Option<&Content> = None;

        for content in self.items.iter().filter(|c| c.genre() == genre) {
            match best {
                Some(current) if trending_order(content, current) != Ordering::Less => {}
                _ => best = Some(content),
            }
        }

        best
    }

    /// Remove an item by ID, reporting whether anything was removed
    pub fn remove_by_id(&mut self, id: ContentId) -> bool {
        if let Some(pos) = self.items.iter().position(|c| c.id() == id) {
            let removed = self.items.remove(pos);
            info!(%id, title = removed.title(), "Content removed");
            true
        } else {
            false
        }
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Trending rank: more views first, then title ascending
fn trending_order(a: &Content, b: &Content) -> Ordering {
    b.views()
        .cmp(&a.views())
        .then_with(|| a.title().cmp(b.title()))
}

fn validate(
    title: &str,
    genre: Option<Genre>,
    length_minutes: i32,
    age_rating: i32,
) -> CatalogResult<(Genre, u32, AgeRating)> {
    if title.trim().is_empty() {
        return Err(CatalogError::BlankTitle);
    }

    let genre = genre.ok_or(CatalogError::MissingGenre)?;

    if length_minutes <= 0 {
        return Err(CatalogError::NonPositiveLength {
            minutes: length_minutes,
        });
    }
    let minutes = length_minutes.unsigned_abs();
    if minutes > MAX_LENGTH_MINUTES {
        return Err(CatalogError::LengthTooLong {
            minutes: length_minutes,
            max: MAX_LENGTH_MINUTES,
        });
    }

    if age_rating < 0 {
        return Err(CatalogError::NegativeRating { rating: age_rating });
    }
    let rating = AgeRating::try_from(age_rating)
        .map_err(|rating| CatalogError::UnknownRating { rating })?;

    Ok((genre, minutes, rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ErrorKind;

    fn seeded() -> CatalogService {
        let mut catalog = CatalogService::new();
        catalog.add("Dune", Genre::Movie, 155, 11).unwrap();
        catalog.add("CS2 Major", Genre::Live, 180, 0).unwrap();
        catalog.add("Arcane", Genre::Series, 42, 15).unwrap();
        catalog
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let catalog = seeded();
        let ids: Vec<u32> = catalog.catalog().iter().map(|c| c.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_boundaries() {
        let mut catalog = CatalogService::new();

        assert!(catalog.add("One minute", Genre::Movie, 1, 0).is_ok());
        assert!(catalog.add("Ten hours", Genre::Movie, 600, 18).is_ok());
        assert_eq!(
            catalog.add("Too long", Genre::Movie, 601, 0).unwrap_err(),
            CatalogError::LengthTooLong { minutes: 601, max: 600 }
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_validation_order_is_fail_fast() {
        let mut catalog = CatalogService::new();

        // Every field is wrong; the title is reported first
        let err = catalog.add(" \t", None, -1, -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTitle);

        let err = catalog.add("Title", None, -1, -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGenre);

        let err = catalog.add("Title", Genre::Movie, -1, -1).unwrap_err();
        assert_eq!(err, CatalogError::NonPositiveLength { minutes: -1 });

        let err = catalog.add("Title", Genre::Movie, 90, -1).unwrap_err();
        assert_eq!(err, CatalogError::NegativeRating { rating: -1 });

        let err = catalog.add("Title", Genre::Movie, 90, 12).unwrap_err();
        assert_eq!(err, CatalogError::UnknownRating { rating: 12 });

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_failed_add_does_not_consume_an_id() {
        let mut catalog = CatalogService::new();
        let _ = catalog.add("", Genre::Movie, 90, 0);
        let content = catalog.add("Real", Genre::Movie, 90, 0).unwrap();
        assert_eq!(content.id(), ContentId::new(1));
    }

    #[test]
    fn test_find_by_id_returns_canonical_record() {
        let mut catalog = seeded();
        catalog.play(ContentId::new(1), 30).unwrap();

        let found = catalog.find_by_id(ContentId::new(1)).unwrap();
        assert_eq!(found.views(), 1);
        assert!(catalog.find_by_id(ContentId::new(99)).is_none());
    }

    #[test]
    fn test_play_unknown_id_skips_age_check() {
        let mut catalog = seeded();
        assert_eq!(catalog.play(ContentId::new(404), -5), Ok(false));
    }

    #[test]
    fn test_play_at_exact_rating_is_allowed() {
        let mut catalog = seeded();
        assert_eq!(catalog.play(ContentId::new(3), 15), Ok(true));
        assert_eq!(catalog.play(ContentId::new(3), 14), Ok(false));
        assert_eq!(catalog.find_by_id(ContentId::new(3)).unwrap().views(), 1);
    }

    #[test]
    fn test_total_runtime_by_genre() {
        let mut catalog = seeded();
        catalog.add("Blade Runner", Genre::Movie, 117, 15).unwrap();

        assert_eq!(catalog.total_runtime_by_genre(Genre::Movie), 272);
        assert_eq!(catalog.total_runtime_by_genre(Genre::Documentary), 0);
    }

    #[test]
    fn test_find_by_genre_is_ordinal() {
        let mut catalog = CatalogService::new();
        catalog.add("alpha", Genre::Movie, 90, 0).unwrap();
        catalog.add("Zulu", Genre::Movie, 90, 0).unwrap();
        catalog.add("Bravo", Genre::Movie, 90, 0).unwrap();

        let titles: Vec<&str> = catalog
            .find_by_genre(Genre::Movie)
            .iter()
            .map(|c| c.title())
            .collect();
        // Uppercase sorts before lowercase
        assert_eq!(titles, vec!["Bravo", "Zulu", "alpha"]);
    }

    #[test]
    fn test_top_trending_rejects_non_positive_n() {
        let catalog = CatalogService::new();
        for n in [0, -2, i32::MIN] {
            let err = catalog.top_trending(n).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_top_trending_caps_at_catalog_size() {
        let catalog = seeded();
        let top = catalog.top_trending(50).unwrap();
        assert_eq!(top.len(), 3);
        // Zero views everywhere, so title order
        let titles: Vec<&str> = top.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Arcane", "CS2 Major", "Dune"]);
    }

    #[test]
    fn test_most_viewed_matches_sorted_first() {
        let mut catalog = CatalogService::new();
        for title in ["Gamma", "Alpha", "Delta", "Beta"] {
            catalog.add(title, Genre::Movie, 90, 0).unwrap();
        }
        catalog.add("Aardvark", Genre::Series, 30, 0).unwrap();
        for (id, plays) in [(1, 2), (3, 2), (4, 1), (5, 9)] {
            for _ in 0..plays {
                catalog.play(ContentId::new(id), 20).unwrap();
            }
        }

        let best = catalog.most_viewed_in_genre(Genre::Movie).unwrap();
        let first = catalog
            .top_trending(i32::MAX)
            .unwrap()
            .into_iter()
            .find(|c| c.genre() == Genre::Movie)
            .unwrap();

        assert_eq!(best.title(), "Delta");
        assert_eq!(best.id(), first.id());
    }

    #[test]
    fn test_remove_never_reuses_ids() {
        let mut catalog = seeded();
        assert!(catalog.remove_by_id(ContentId::new(3)));
        assert!(!catalog.remove_by_id(ContentId::new(3)));

        let next = catalog.add("Severance", Genre::Series, 55, 15).unwrap();
        assert_eq!(next.id(), ContentId::new(4));
    }
}
