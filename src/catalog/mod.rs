//! The media catalog.
//!
//! - `service`: The single-owner catalog and all its queries
//! - `shared`: Lock-guarded handle for concurrent callers
//! - `seed`: YAML fixtures for preloading a fresh catalog
//! - `error`: Validation failures

pub mod error;
pub mod seed;
pub mod service;
pub mod shared;

pub use error::{CatalogError, CatalogResult, ErrorKind, MAX_LENGTH_MINUTES};
pub use seed::{SeedFile, SeedItem};
pub use service::CatalogService;
pub use shared::SharedCatalog;
