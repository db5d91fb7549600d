//! Command-line interface for streambox.
//!
//! Every invocation starts from an empty catalog, optionally preloaded from
//! a seed file. One-shot commands query that catalog; `shell` keeps it alive
//! for a whole session read from stdin.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use crate::catalog::{CatalogService, SeedFile, SharedCatalog};
use crate::config;
use crate::domain::{ContentId, Genre};

pub mod render;
pub mod shell;

/// streambox - In-memory media catalog
#[derive(Parser, Debug)]
#[command(name = "streambox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed file to preload (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog in insertion order
    List,

    /// Show details of one item
    Show {
        /// Content ID
        id: ContentId,
    },

    /// List a genre sorted by title, with its total runtime
    Genre {
        /// Genre (movie, series, live, documentary)
        genre: Genre,
    },

    /// Show the most viewed items
    Top {
        /// Number of items (defaults to the configured top_n)
        #[arg(short, long, allow_negative_numbers = true)]
        n: Option<i32>,
    },

    /// Show the most viewed item of a genre
    MostViewed {
        /// Genre (movie, series, live, documentary)
        genre: Genre,
    },

    /// Start an interactive session on stdin
    Shell,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cfg = config::config()?;
        let seed = self.seed.or_else(|| cfg.seed.clone());

        match self.command {
            Commands::Config => show_config(cfg, seed.as_ref()),
            command => {
                let catalog = load_catalog(seed.as_deref())?;
                run_query(command, catalog, cfg.top_n, self.json).await
            }
        }
    }
}

/// Run a catalog command against a freshly loaded catalog
async fn run_query(command: Commands, catalog: CatalogService, top_n: usize, json: bool) -> Result<()> {
    match command {
        Commands::List => {
            print_items(&catalog.catalog(), json)
        }
        Commands::Show { id } => {
            let content = catalog
                .find_by_id(id)
                .ok_or_else(|| anyhow::anyhow!("Content not found: {}", id))?;
            if json {
                println!("{}", render::json(content)?);
            } else {
                print!("{}", render::detail(content));
            }
            Ok(())
        }
        Commands::Genre { genre } => {
            let items = catalog.find_by_genre(genre);
            let minutes = catalog.total_runtime_by_genre(genre);
            if json {
                let body = serde_json::json!({
                    "genre": genre,
                    "total_minutes": minutes,
                    "items": items,
                });
                println!("{}", render::json(&body)?);
            } else {
                print!("{}", render::table(items));
                println!("Runtime: {} min", minutes);
            }
            Ok(())
        }
        Commands::Top { n } => {
            let n = n.unwrap_or_else(|| i32::try_from(top_n).unwrap_or(i32::MAX));
            let items = catalog.top_trending(n)?;
            if json {
                println!("{}", render::json(&items)?);
            } else {
                print!("{}", render::table(items));
            }
            Ok(())
        }
        Commands::MostViewed { genre } => {
            match catalog.most_viewed_in_genre(genre) {
                Some(content) if json => println!("{}", render::json(content)?),
                Some(content) => print!("{}", render::detail(content)),
                None => println!("No {} content", genre),
            }
            Ok(())
        }
        Commands::Shell => {
            let shell = shell::Shell::new(SharedCatalog::from_service(catalog), top_n, json);
            shell.run(BufReader::new(tokio::io::stdin())).await
        }
        Commands::Config => Ok(()),
    }
}

/// Build a fresh catalog, preloaded from `seed` when given
pub fn load_catalog(seed: Option<&Path>) -> Result<CatalogService> {
    let mut catalog = CatalogService::new();

    if let Some(path) = seed {
        SeedFile::from_path(path)?
            .apply(&mut catalog)
            .with_context(|| format!("Failed to seed catalog from {}", path.display()))?;
    }

    Ok(catalog)
}

fn print_items(items: &[crate::domain::Content], json: bool) -> Result<()> {
    if json {
        println!("{}", render::json(items)?);
    } else if items.is_empty() {
        println!("Catalog is empty. Use --seed <file> or 'streambox shell' to add content.");
    } else {
        print!("{}", render::table(items));
    }
    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &config::ResolvedConfig, seed: Option<&PathBuf>) -> Result<()> {
    println!("Config file: {}", cfg.config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "(none - using defaults)".to_string()));
    println!("Seed file:   {}", seed.map(|p| p.display().to_string()).unwrap_or_else(|| "(none)".to_string()));
    println!("Top N:       {}", cfg.top_n);
    Ok(())
}
