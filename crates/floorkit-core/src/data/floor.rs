//! Floors of the facility.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named spatial partition of the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Floor {
    #[default]
    #[serde(rename = "CYBER STUDIO")]
    CyberStudio,
    #[serde(rename = "GREEN ROOM")]
    GreenRoom,
    #[serde(rename = "GF LEFT WING")]
    GfLeftWing,
    #[serde(rename = "GF RIGHT WING")]
    GfRightWing,
    #[serde(rename = "2F LEFT WING")]
    SecondFloorLeftWing,
    #[serde(rename = "2F RIGHT WING")]
    SecondFloorRightWing,
    #[serde(rename = "H1/F")]
    H1F,
    #[serde(rename = "H2/F")]
    H2F,
    #[serde(rename = "H3/F")]
    H3F,
}

impl Floor {
    /// Every floor, in menu order.
    pub const ALL: [Floor; 9] = [
        Floor::CyberStudio,
        Floor::GreenRoom,
        Floor::GfLeftWing,
        Floor::GfRightWing,
        Floor::SecondFloorLeftWing,
        Floor::SecondFloorRightWing,
        Floor::H1F,
        Floor::H2F,
        Floor::H3F,
    ];

    /// The value stored in the `FLOOR` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CyberStudio => "CYBER STUDIO",
            Self::GreenRoom => "GREEN ROOM",
            Self::GfLeftWing => "GF LEFT WING",
            Self::GfRightWing => "GF RIGHT WING",
            Self::SecondFloorLeftWing => "2F LEFT WING",
            Self::SecondFloorRightWing => "2F RIGHT WING",
            Self::H1F => "H1/F",
            Self::H2F => "H2/F",
            Self::H3F => "H3/F",
        }
    }

    /// URL slug for the floor.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::CyberStudio => "cyber-studio",
            Self::GreenRoom => "green-room",
            Self::GfLeftWing => "gf-left-wing",
            Self::GfRightWing => "gf-right-wing",
            Self::SecondFloorLeftWing => "2f-left-wing",
            Self::SecondFloorRightWing => "2f-right-wing",
            Self::H1F => "h1-f",
            Self::H2F => "h2-f",
            Self::H3F => "h3-f",
        }
    }

    /// Looks up a floor by slug. `greenroom` is accepted as an alias.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().to_ascii_lowercase();
        if slug == "greenroom" {
            return Some(Self::GreenRoom);
        }
        Self::ALL.into_iter().find(|f| f.slug() == slug)
    }

    /// Parses a display name or slug, falling back to the default floor.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown floor '{}', defaulting to {}", value, Self::default());
            Self::default()
        })
    }

    /// Floor name usable in a file name: whitespace runs become `_`, `/` becomes `-`.
    pub fn file_stem(&self) -> String {
        self.as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .replace('/', "-")
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Floor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(trimmed))
            .or_else(|| Self::from_slug(trimmed))
            .ok_or_else(|| format!("unknown floor '{}'", s))
    }
}
