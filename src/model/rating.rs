// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Star ratings derived from similarity scores.
//!
//! Query results are bucketed into five ordinal star tiers. Catalog entries
//! have no score and are reported as unscored rather than as one star.

use std::fmt;

const FIVE_STAR_THRESHOLD: f64 = 0.65;
const FOUR_STAR_THRESHOLD: f64 = 0.50;
const THREE_STAR_THRESHOLD: f64 = 0.35;
const TWO_STAR_THRESHOLD: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum StarTier {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl StarTier {
    /// All tiers, highest first, in the order the rating filter cycles.
    pub(crate) const DESCENDING: [StarTier; 5] = [
        StarTier::Five,
        StarTier::Four,
        StarTier::Three,
        StarTier::Two,
        StarTier::One,
    ];

    pub(crate) fn from_score(score: f64) -> Self {
        if score >= FIVE_STAR_THRESHOLD {
            StarTier::Five
        } else if score >= FOUR_STAR_THRESHOLD {
            StarTier::Four
        } else if score >= THREE_STAR_THRESHOLD {
            StarTier::Three
        } else if score >= TWO_STAR_THRESHOLD {
            StarTier::Two
        } else {
            StarTier::One
        }
    }

    pub(crate) fn from_stars(stars: u8) -> Option<Self> {
        match stars {
            1 => Some(StarTier::One),
            2 => Some(StarTier::Two),
            3 => Some(StarTier::Three),
            4 => Some(StarTier::Four),
            5 => Some(StarTier::Five),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn stars(self) -> u8 {
        match self {
            StarTier::One => 1,
            StarTier::Two => 2,
            StarTier::Three => 3,
            StarTier::Four => 4,
            StarTier::Five => 5,
        }
    }

    /// The star-glyph label shown on cards and in the filter control.
    pub(crate) fn glyphs(self) -> &'static str {
        match self {
            StarTier::One => "★",
            StarTier::Two => "★★",
            StarTier::Three => "★★★",
            StarTier::Four => "★★★★",
            StarTier::Five => "★★★★★",
        }
    }
}

impl fmt::Display for StarTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyphs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Rating {
    Unscored,
    Stars(StarTier),
}

impl Rating {
    pub(crate) fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(score) => Rating::Stars(StarTier::from_score(score)),
            None => Rating::Unscored,
        }
    }

    pub(crate) fn tier(self) -> Option<StarTier> {
        match self {
            Rating::Stars(tier) => Some(tier),
            Rating::Unscored => None,
        }
    }
}
