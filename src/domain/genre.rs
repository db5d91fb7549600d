//! Genre categories.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Closed set of content categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    /// Feature film
    Movie,

    /// Episodic series
    Series,

    /// Live broadcast
    Live,

    /// Documentary
    Documentary,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 4] = [Genre::Movie, Genre::Series, Genre::Live, Genre::Documentary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Movie => "movie",
            Genre::Series => "series",
            Genre::Live => "live",
            Genre::Documentary => "documentary",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "film" => Ok(Genre::Movie),
            "series" | "show" | "tv" => Ok(Genre::Series),
            "live" | "stream" => Ok(Genre::Live),
            "documentary" | "doc" | "docs" => Ok(Genre::Documentary),
            _ => anyhow::bail!("Unknown genre: {}", s),
        }
    }
}
