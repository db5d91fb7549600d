//! YAML seed files for preloading a catalog.
//!
//! ```yaml
//! version: "1"
//! items:
//!   - title: Dune
//!     genre: movie
//!     length_minutes: 155
//!     age_rating: 11
//! ```
//!
//! Seed items go through [`CatalogService::add`] like any other input, so a
//! bad item fails with the same error a caller would get. Nothing is ever
//! written back to the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use super::service::CatalogService;
use crate::domain::{ContentId, Genre};

/// Seed file schema
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub version: String,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

/// One item to preload
#[derive(Debug, Clone, Deserialize)]
pub struct SeedItem {
    pub title: String,
    /// Free-form genre name; unknown names are rejected by the catalog
    pub genre: Option<String>,
    pub length_minutes: i32,
    pub age_rating: i32,
}

impl SeedItem {
    fn genre(&self) -> Option<Genre> {
        self.genre.as_deref().and_then(|g| g.parse().ok())
    }
}

impl SeedFile {
    /// Parse a seed document
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse seed YAML")
    }

    /// Load a seed file from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load seed file: {}", path.display()))
    }

    /// Add every item to `catalog`, stopping at the first invalid one
    pub fn apply(&self, catalog: &mut CatalogService) -> Result<Vec<ContentId>> {
        let mut ids = Vec::with_capacity(self.items.len());

        for (index, item) in self.items.iter().enumerate() {
            let content = catalog
                .add(&item.title, item.genre(), item.length_minutes, item.age_rating)
                .with_context(|| format!("Invalid seed item #{} ({:?})", index + 1, item.title))?;
            ids.push(content.id());
        }

        info!(count = ids.len(), "Seed items loaded");
        Ok(ids)
    }
}
