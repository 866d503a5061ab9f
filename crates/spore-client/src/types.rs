//! Request parameter types for the Spore content service.
//!
//! The service accepts any token for views and asset types; unknown values are
//! reported by the server, not rejected here. The enums exist so callers (and
//! the CLI) can name the documented values without typos.

use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Pagination
// ─────────────────────────────────────────────────────────────────────────────

/// Pagination window forwarded to the server as `{start}/{length}`.
///
/// Neither value is validated or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    /// Index of the first item.
    pub start: u32,
    /// Number of items requested.
    pub length: u32,
}

impl Page {
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// First page of the given size.
    pub fn first(length: u32) -> Self {
        Self::new(0, length)
    }

    /// The window immediately after this one.
    pub fn next(self) -> Self {
        Self::new(self.start.saturating_add(self.length), self.length)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(10)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.length)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search views
// ─────────────────────────────────────────────────────────────────────────────

/// Sort/filter mode for search listings and search feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    TopRated,
    TopRatedNew,
    Newest,
    Featured,
    MaxisMade,
    Random,
    CuteAndCreepy,
}

impl ViewType {
    /// All documented views.
    pub const ALL: [ViewType; 7] = [
        ViewType::TopRated,
        ViewType::TopRatedNew,
        ViewType::Newest,
        ViewType::Featured,
        ViewType::MaxisMade,
        ViewType::Random,
        ViewType::CuteAndCreepy,
    ];

    /// Wire token for this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::TopRated => "TOP_RATED",
            ViewType::TopRatedNew => "TOP_RATED_NEW",
            ViewType::Newest => "NEWEST",
            ViewType::Featured => "FEATURED",
            ViewType::MaxisMade => "MAXIS_MADE",
            ViewType::Random => "RANDOM",
            ViewType::CuteAndCreepy => "CUTE_AND_CREEPY",
        }
    }
}

impl AsRef<str> for ViewType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        ViewType::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| UnknownToken::new("view", s))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Asset types
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of user-created asset, used to narrow search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Ufo,
    Creature,
    Building,
    Vehicle,
}

impl AssetType {
    /// All documented asset types.
    pub const ALL: [AssetType; 4] = [
        AssetType::Ufo,
        AssetType::Creature,
        AssetType::Building,
        AssetType::Vehicle,
    ];

    /// Wire token for this asset type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Ufo => "UFO",
            AssetType::Creature => "CREATURE",
            AssetType::Building => "BUILDING",
            AssetType::Vehicle => "VEHICLE",
        }
    }
}

impl AsRef<str> for AssetType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownToken::new("asset type", s))
    }
}

/// A string that does not name a documented view or asset type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownToken {
    kind: &'static str,
    value: String,
}

impl UnknownToken {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
