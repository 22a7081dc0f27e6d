use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Semantic room type carried by every map node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    #[default]
    #[serde(rename = "NOT_ASSIGNED")]
    Unassigned,
    Enemy,
    Loot,
    Shelter,
    Wenny,
    Boss,
}

impl NodeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unassigned => "NOT_ASSIGNED",
            Self::Enemy => "ENEMY",
            Self::Loot => "LOOT",
            Self::Shelter => "SHELTER",
            Self::Wenny => "WENNY",
            Self::Boss => "BOSS",
        }
    }

    /// One-letter code used in compact floor dumps.
    pub const fn as_char(self) -> char {
        match self {
            Self::Unassigned => 'N',
            Self::Enemy => 'E',
            Self::Loot => 'L',
            Self::Shelter => 'S',
            Self::Wenny => 'W',
            Self::Boss => 'B',
        }
    }

    /// Stable numeric code used by the canonical export encoding.
    pub const fn code(self) -> u8 {
        match self {
            Self::Unassigned => 0,
            Self::Enemy => 1,
            Self::Loot => 2,
            Self::Shelter => 3,
            Self::Wenny => 4,
            Self::Boss => 5,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Mul<f32> for Position {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Lookup failures against a generated map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    IndexOutOfRange { row: usize, column: usize },
    IndexOutOfBounds { index: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { row, column } => {
                write!(f, "node ({row}, {column}) is outside the map grid")
            }
            Self::IndexOutOfBounds { index } => {
                write!(f, "node index {index} is outside the map grid")
            }
        }
    }
}

impl Error for MapError {}
