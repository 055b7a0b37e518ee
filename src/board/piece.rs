//! Pieces: color, tier, and the tag encoding.
//!
//! A piece is a (color, tier) pair. Color decides who may move it and
//! what counts as an enemy; tier decides which activation ability it
//! carries. Run matching looks at color only.
//!
//! The wire encoding is a short string tag (`"red"`, `"red-quad"`,
//! `"red-star"`, `"red-hexa"`); internally pieces are always the typed
//! pair and only serialize to the tag at the boundary.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stone color. Also identifies the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Wire tag for this color.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Upgrade level of a piece.
///
/// Plain stones have no ability. The other tiers are gained when a run
/// of the matching exact length triggers, and lost when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Plain,
    Quad,
    Star,
    Hexa,
}

impl Tier {
    /// Tier spawned by a triggering run of exact length `len`.
    ///
    /// Triples capture without upgrading, so 3 maps to `None`, as does
    /// anything outside the detected lengths.
    #[must_use]
    pub const fn for_run_len(len: u8) -> Option<Self> {
        match len {
            4 => Some(Tier::Quad),
            5 => Some(Tier::Star),
            6 => Some(Tier::Hexa),
            _ => None,
        }
    }

    /// Tag suffix, empty for plain stones.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Tier::Plain => "",
            Tier::Quad => "-quad",
            Tier::Star => "-star",
            Tier::Hexa => "-hexa",
        }
    }
}

/// A stone on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Owner color.
    pub color: Color,
    /// Upgrade level.
    pub tier: Tier,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(color: Color, tier: Tier) -> Self {
        Self { color, tier }
    }

    /// A plain stone of the given color.
    #[must_use]
    pub const fn plain(color: Color) -> Self {
        Self::new(color, Tier::Plain)
    }

    /// Wire tag, e.g. `"red"` or `"blue-star"`.
    #[must_use]
    pub fn tag(self) -> String {
        format!("{}{}", self.color.tag(), self.tier.suffix())
    }

    /// Parse a wire tag. Returns `None` for unrecognized tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let (color_part, tier_part) = match tag.split_once('-') {
            Some((c, t)) => (c, Some(t)),
            None => (tag, None),
        };

        let color = match color_part {
            "red" => Color::Red,
            "blue" => Color::Blue,
            _ => return None,
        };

        let tier = match tier_part {
            None => Tier::Plain,
            Some("quad") => Tier::Quad,
            Some("star") => Tier::Star,
            Some("hexa") => Tier::Hexa,
            Some(_) => return None,
        };

        Some(Self { color, tier })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.tag(), self.tier.suffix())
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Piece::from_tag(&tag)
            .ok_or_else(|| D::Error::custom(format!("unrecognized piece tag: {tag:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Red.opponent(), Color::Blue);
        assert_eq!(Color::Blue.opponent(), Color::Red);
    }

    #[test]
    fn test_tier_for_run_len() {
        assert_eq!(Tier::for_run_len(3), None);
        assert_eq!(Tier::for_run_len(4), Some(Tier::Quad));
        assert_eq!(Tier::for_run_len(5), Some(Tier::Star));
        assert_eq!(Tier::for_run_len(6), Some(Tier::Hexa));
        assert_eq!(Tier::for_run_len(7), None);
    }

    #[test]
    fn test_tag_round_trip() {
        let pieces = [
            Piece::plain(Color::Red),
            Piece::new(Color::Red, Tier::Quad),
            Piece::new(Color::Blue, Tier::Star),
            Piece::new(Color::Blue, Tier::Hexa),
        ];
        for piece in pieces {
            assert_eq!(Piece::from_tag(&piece.tag()), Some(piece));
        }
    }

    #[test]
    fn test_tag_values() {
        assert_eq!(Piece::plain(Color::Red).tag(), "red");
        assert_eq!(Piece::new(Color::Blue, Tier::Quad).tag(), "blue-quad");
        assert_eq!(Piece::new(Color::Red, Tier::Star).tag(), "red-star");
        assert_eq!(Piece::new(Color::Blue, Tier::Hexa).tag(), "blue-hexa");
    }

    #[test]
    fn test_from_tag_rejects_garbage() {
        assert_eq!(Piece::from_tag("green"), None);
        assert_eq!(Piece::from_tag("red-mega"), None);
        assert_eq!(Piece::from_tag(""), None);
        assert_eq!(Piece::from_tag("quad-red"), None);
    }

    #[test]
    fn test_piece_serializes_as_tag() {
        let piece = Piece::new(Color::Red, Tier::Star);
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, "\"red-star\"");

        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(back, piece);
    }

    #[test]
    fn test_piece_deserialize_rejects_unknown_tag() {
        let result: Result<Piece, _> = serde_json::from_str("\"red-mega\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_color_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), "\"red\"");
        assert_eq!(serde_json::to_string(&Color::Blue).unwrap(), "\"blue\"");
    }
}
