//! Domain types for the streambox catalog.
//!
//! This module contains the core data structures:
//! - Content: A catalog entry and its view counter
//! - Genre: Closed set of content categories
//! - AgeRating: Closed set of minimum-age tiers

pub mod content;
pub mod genre;
pub mod rating;

// Re-export commonly used types
pub use content::{Content, ContentId};
pub use genre::Genre;
pub use rating::AgeRating;
