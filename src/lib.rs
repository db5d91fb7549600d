//! streambox - In-memory media catalog
//!
//! Stores content items (title, genre, runtime, age rating), counts views,
//! and answers genre, trending and age-gated playback queries.
//!
//! # Modules
//!
//! - `domain`: Data structures (Content, Genre, AgeRating)
//! - `catalog`: The catalog service, its shared handle and seed import
//! - `config`: Config file and environment resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Query a seeded catalog
//! streambox --seed catalog.yaml genre movie
//!
//! # Interactive session
//! streambox shell
//! > add "Dune" movie 155 11
//! > play 1 18
//! > top -n 3
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;

// Re-export main types at crate root for convenience
pub use catalog::{CatalogError, CatalogResult, CatalogService, ErrorKind, SharedCatalog};
pub use domain::{AgeRating, Content, ContentId, Genre};
