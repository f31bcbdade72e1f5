//! Dimension identifiers and the vertical bounds tied to them.

use std::fmt::{self, Display};

use serde::{Deserialize, Deserializer, de};

/// One of the three dimensions the elevator mechanic runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionId {
    /// The overworld; the only dimension with its own build limit.
    Overworld,
    /// The nether.
    Nether,
    /// The end.
    End,
}

impl DimensionId {
    /// The canonical string key, as used in configs and logs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Overworld => "minecraft:overworld",
            Self::Nether => "minecraft:the_nether",
            Self::End => "minecraft:the_end",
        }
    }

    /// Resolves a canonical string key back to a dimension.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "minecraft:overworld" => Some(Self::Overworld),
            "minecraft:the_nether" => Some(Self::Nether),
            "minecraft:the_end" => Some(Self::End),
            _ => None,
        }
    }
}

impl Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl<'de> Deserialize<'de> for DimensionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::from_key(&key)
            .ok_or_else(|| de::Error::custom(format!("unknown dimension: {key}")))
    }
}

/// The vertical slice of a dimension the scanner is allowed to search.
///
/// The floor is shared by every dimension; the build limit depends on the
/// dimension (see `LiftConfig::bounds_for`). Both bounds are exclusive: a
/// probe at or past either one ends the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalBounds {
    /// Lowest height; probes at or below it are out of the world.
    pub floor: i32,
    /// Height at which building stops; probes at or above it are out of the world.
    pub build_limit: i32,
}
