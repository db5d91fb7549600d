//! Configuration for streambox.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (STREAMBOX_SEED, STREAMBOX_TOP_N)
//! 2. Config file (.streambox/config.yaml)
//! 3. Defaults (no seed, top 10)
//!
//! Config file discovery:
//! - Searches current directory and parents for .streambox/config.yaml
//! - Falls back to ~/.streambox/config.yaml
//! - The seed path is relative to the directory holding .streambox/

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default number of items shown by `top`
pub const DEFAULT_TOP_N: usize = 10;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Seed file to preload (relative to the project root)
    pub seed: Option<String>,
    /// Default item count for `top`
    pub top_n: Option<usize>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Seed file to preload, if any
    pub seed: Option<PathBuf>,
    /// Default item count for `top`
    pub top_n: usize,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            seed: None,
            top_n: DEFAULT_TOP_N,
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".streambox").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".streambox").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge a config file (if any) with environment overrides
fn resolve(config_file: Option<PathBuf>) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .streambox/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        resolved.seed = config.catalog.seed.map(|s| resolve_path(base_dir, &s));
        if let Some(top_n) = config.catalog.top_n {
            resolved.top_n = top_n;
        }
    }

    if let Ok(env_seed) = std::env::var("STREAMBOX_SEED") {
        resolved.seed = Some(PathBuf::from(env_seed));
    }
    if let Ok(env_top) = std::env::var("STREAMBOX_TOP_N") {
        resolved.top_n = env_top
            .parse()
            .with_context(|| format!("STREAMBOX_TOP_N is not a number: {}", env_top))?;
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(find_config_file())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
