//! Age rating tiers.
//!
//! Ratings are a closed set of minimum viewer ages. Anything outside the set
//! is rejected when content enters the catalog.

use serde::{Deserialize, Serialize};

/// Minimum viewer age for a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u32")]
pub enum AgeRating {
    /// Suitable for all ages
    All,
    Seven,
    Eleven,
    Fifteen,
    Eighteen,
}

impl AgeRating {
    /// Every tier, youngest first
    pub const TIERS: [AgeRating; 5] = [
        AgeRating::All,
        AgeRating::Seven,
        AgeRating::Eleven,
        AgeRating::Fifteen,
        AgeRating::Eighteen,
    ];

    /// Minimum age in years
    pub const fn years(self) -> u32 {
        match self {
            AgeRating::All => 0,
            AgeRating::Seven => 7,
            AgeRating::Eleven => 11,
            AgeRating::Fifteen => 15,
            AgeRating::Eighteen => 18,
        }
    }

    /// Whether a viewer of `age` years passes this tier's gate
    pub fn permits(self, age: u32) -> bool {
        age >= self.years()
    }

    /// Look up the tier for an exact number of years
    pub fn from_years(years: u32) -> Option<Self> {
        Self::TIERS.into_iter().find(|tier| tier.years() == years)
    }
}

impl TryFrom<i32> for AgeRating {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Self::from_years)
            .ok_or(value)
    }
}

impl From<AgeRating> for u32 {
    fn from(rating: AgeRating) -> Self {
        rating.years()
    }
}

impl std::fmt::Display for AgeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+", self.years())
    }
}
