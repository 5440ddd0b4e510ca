//! Color keys

use std::fmt;
use std::str::FromStr;

use flyweight::{Error, PoolKey};
use serde::{Deserialize, Serialize};

/// Intrinsic color of a shape; the pool key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// White
    White,
    /// Black
    Black,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::White,
        Color::Black,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl PoolKey for Color {}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(Error::invalid_key(s, "empty color name"));
        }
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::invalid_key(s, "unknown color"))
    }
}
