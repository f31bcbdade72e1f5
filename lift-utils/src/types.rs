// Wrapper types making it harder to accidentally mix block and entity coordinates.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, de};

use crate::math::Vector3;

/// A block-aligned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The block position containing a continuous position.
    ///
    /// Each coordinate is floored, so `-0.5` maps to block `-1`.
    #[must_use]
    pub fn containing(pos: Vector3<f64>) -> Self {
        Self::new(pos.x.floor() as i32, pos.y.floor() as i32, pos.z.floor() as i32)
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// The position one block below this one, saturating at the numeric floor.
    #[must_use]
    pub const fn below(&self) -> Self {
        Self::new(self.0.x, self.0.y.saturating_sub(1), self.0.z)
    }

    /// This position with its y coordinate replaced.
    #[must_use]
    pub const fn with_y(&self, y: i32) -> Self {
        Self::new(self.0.x, y, self.0.z)
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A namespaced identifier such as `minecraft:diamond_block`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path within the namespace.
    pub path: Cow<'static, str>,
}

impl ResourceLocation {
    /// The namespace used by vanilla content.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates a vanilla-namespaced identifier from a static path.
    #[must_use]
    pub const fn vanilla(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    fn valid_namespace(namespace: &str) -> bool {
        namespace
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.'))
    }

    fn valid_path(path: &str) -> bool {
        path.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.' | '/')
        })
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, path)) = s.split_once(':') else {
            return Err(format!("invalid resource location: {s}"));
        };

        if !Self::valid_namespace(namespace) {
            return Err(format!("invalid namespace: {namespace}"));
        }
        if !Self::valid_path(path) {
            return Err(format!("invalid path: {path}"));
        }

        Ok(Self {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
