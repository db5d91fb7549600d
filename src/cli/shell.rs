//! Interactive catalog session.
//!
//! Reads one command per line, runs it against a single in-memory catalog
//! and prints the result. Bad input is reported and the session carries on;
//! the catalog is gone once the session ends.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::render;
use crate::catalog::SharedCatalog;
use crate::domain::{Content, ContentId, Genre};

/// A single shell line
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Add content to the catalog
    Add {
        /// Title (quote it if it has spaces)
        title: String,

        /// Genre (movie, series, live, documentary)
        genre: String,

        /// Runtime in minutes (1-600)
        #[arg(allow_negative_numbers = true)]
        minutes: i32,

        /// Age rating (0, 7, 11, 15 or 18)
        #[arg(allow_negative_numbers = true)]
        rating: i32,
    },

    /// Play content as a viewer of the given age
    Play {
        id: ContentId,

        #[arg(allow_negative_numbers = true)]
        age: i32,
    },

    /// Remove content by ID
    Remove { id: ContentId },

    /// List the catalog in insertion order
    List,

    /// Show one item
    Show { id: ContentId },

    /// List a genre sorted by title
    Genre { genre: Genre },

    /// Total runtime of a genre
    Runtime { genre: Genre },

    /// Most viewed items
    Top {
        #[arg(short, long, allow_negative_numbers = true)]
        n: Option<i32>,
    },

    /// Most viewed item of a genre
    MostViewed { genre: Genre },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// What the caller should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and keep reading
    Continue(String),

    /// Stop reading
    Quit,
}

/// A shell bound to one catalog
pub struct Shell {
    catalog: SharedCatalog,
    top_n: usize,
    json: bool,
}

impl Shell {
    pub fn new(catalog: SharedCatalog, top_n: usize, json: bool) -> Self {
        Self {
            catalog,
            top_n,
            json,
        }
    }

    /// Read commands until EOF or `quit`
    pub async fn run<R>(&self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await.context("Failed to read command")? {
            match self.execute_line(&line).await {
                Outcome::Continue(out) if out.is_empty() => {}
                Outcome::Continue(out) => println!("{}", out.trim_end()),
                Outcome::Quit => break,
            }
        }

        Ok(())
    }

    /// Run one line. Errors come back as printable text.
    pub async fn execute_line(&self, line: &str) -> Outcome {
        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => return Outcome::Continue(format!("error: {}", e)),
        };
        if tokens.is_empty() || tokens[0].starts_with('#') {
            return Outcome::Continue(String::new());
        }

        let parsed = match ShellLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(e) => return Outcome::Continue(e.to_string()),
        };

        match self.execute(parsed.command).await {
            Ok(Some(out)) => Outcome::Continue(out),
            Ok(None) => Outcome::Quit,
            Err(e) => Outcome::Continue(format!("error: {:#}", e)),
        }
    }

    async fn execute(&self, command: ShellCommand) -> Result<Option<String>> {
        let out = match command {
            ShellCommand::Add {
                title,
                genre,
                minutes,
                rating,
            } => {
                let genre = genre.parse::<Genre>().ok();
                let content = self.catalog.add(&title, genre, minutes, rating).await?;
                if self.json {
                    render::json(&content)?
                } else {
                    format!("Added {} ({})", content.title(), content.id())
                }
            }
            ShellCommand::Play { id, age } => {
                let played = self.catalog.play(id, age).await?;
                if self.json {
                    render::json(&serde_json::json!({ "id": id, "played": played }))?
                } else if played {
                    format!("Playing {}", id)
                } else {
                    format!("Cannot play {}: not found or age restricted", id)
                }
            }
            ShellCommand::Remove { id } => {
                let removed = self.catalog.remove_by_id(id).await;
                if self.json {
                    render::json(&serde_json::json!({ "id": id, "removed": removed }))?
                } else if removed {
                    format!("Removed {}", id)
                } else {
                    format!("No content with ID {}", id)
                }
            }
            ShellCommand::List => {
                let items = self.catalog.catalog().await;
                self.list(&items)?
            }
            ShellCommand::Show { id } => match self.catalog.find_by_id(id).await {
                Some(content) if self.json => render::json(&content)?,
                Some(content) => render::detail(&content),
                None => format!("No content with ID {}", id),
            },
            ShellCommand::Genre { genre } => {
                let items = self.catalog.find_by_genre(genre).await;
                self.list(&items)?
            }
            ShellCommand::Runtime { genre } => {
                let minutes = self.catalog.total_runtime_by_genre(genre).await;
                if self.json {
                    render::json(&serde_json::json!({ "genre": genre, "minutes": minutes }))?
                } else {
                    format!("{}: {} min", genre, minutes)
                }
            }
            ShellCommand::Top { n } => {
                let n = match n {
                    Some(n) => n,
                    None => i32::try_from(self.top_n).unwrap_or(i32::MAX),
                };
                let items = self.catalog.top_trending(n).await?;
                self.list(&items)?
            }
            ShellCommand::MostViewed { genre } => match self.catalog.most_viewed_in_genre(genre).await {
                Some(content) if self.json => render::json(&content)?,
                Some(content) => render::detail(&content),
                None => format!("No {} content", genre),
            },
            ShellCommand::Quit => return Ok(None),
        };

        Ok(Some(out))
    }

    fn list(&self, items: &[Content]) -> Result<String> {
        if self.json {
            render::json(items)
        } else {
            Ok(render::table(items))
        }
    }
}

/// Split a line on whitespace, keeping double-quoted runs together
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        anyhow::bail!("Unterminated quote");
    }
    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}
