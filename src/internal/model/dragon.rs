//! The dragon record and its field types.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scale color of a dragon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Green,
    Red,
    Yellow,
    White,
}

impl Color {
    /// All variants, in declaration order. Drives the interactive prompt.
    pub const ALL: [Color; 5] = [
        Color::Black,
        Color::Green,
        Color::Red,
        Color::Yellow,
        Color::White,
    ];
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::White => "white",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "white" => Ok(Color::White),
            other => Err(format!("unknown color '{other}'")),
        }
    }
}

/// Temperament of a dragon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragonCharacter {
    Cunning,
    Wise,
    Chaotic,
    Fickle,
}

impl DragonCharacter {
    /// All variants, in declaration order. Drives the interactive prompt.
    pub const ALL: [DragonCharacter; 4] = [
        DragonCharacter::Cunning,
        DragonCharacter::Wise,
        DragonCharacter::Chaotic,
        DragonCharacter::Fickle,
    ];
}

impl Display for DragonCharacter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            DragonCharacter::Cunning => "cunning",
            DragonCharacter::Wise => "wise",
            DragonCharacter::Chaotic => "chaotic",
            DragonCharacter::Fickle => "fickle",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DragonCharacter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cunning" => Ok(DragonCharacter::Cunning),
            "wise" => Ok(DragonCharacter::Wise),
            "chaotic" => Ok(DragonCharacter::Chaotic),
            "fickle" => Ok(DragonCharacter::Fickle),
            other => Err(format!("unknown character '{other}'")),
        }
    }
}

/// Location of a dragon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The cave a dragon lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragonCave {
    pub depth: f64,
}

/// One record of the collection.
///
/// Ids are assigned by the collection and unique within it. The natural
/// order is by age, then name, then id, which makes the ordering total even
/// though the floating-point fields take no part in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dragon {
    pub id: u64,
    pub name: String,
    pub coordinates: Coordinates,
    pub age: i64,
    pub wingspan: i64,
    pub color: Color,
    pub character: DragonCharacter,
    pub cave: DragonCave,
}

impl Display for Dragon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} (age {}, wingspan {}) {} and {}, at {}, cave depth {}",
            self.id,
            self.name,
            self.age,
            self.wingspan,
            self.color,
            self.character,
            self.coordinates,
            self.cave.depth
        )
    }
}

impl PartialEq for Dragon {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Dragon {}

impl PartialOrd for Dragon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dragon {
    fn cmp(&self, other: &Self) -> Ordering {
        self.age
            .cmp(&other.age)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}
