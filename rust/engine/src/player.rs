use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The two sides of every game. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Seat index: 0 for white, 1 for black.
    pub fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a cell shows in games whose pieces belong to exactly one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupant {
    #[default]
    Empty,
    White,
    Black,
}

impl Occupant {
    pub fn side(self) -> Option<Side> {
        match self {
            Occupant::Empty => None,
            Occupant::White => Some(Side::White),
            Occupant::Black => Some(Side::Black),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }
}

impl From<Side> for Occupant {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Occupant::White,
            Side::Black => Occupant::Black,
        }
    }
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub side: Side,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, side: Side) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            side,
        }
    }
}

/// Outcome of a completed game. Serialized as the winning player object or
/// the literal string `"even"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    Player(Player),
    Even,
}

impl Winner {
    pub fn side(&self) -> Option<Side> {
        match self {
            Winner::Player(p) => Some(p.side),
            Winner::Even => None,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player(p) => write!(f, "{} ({})", p.name, p.side),
            Winner::Even => f.write_str("even"),
        }
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Winner::Player(p) => p.serialize(serializer),
            Winner::Even => serializer.serialize_str("even"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WinnerRepr {
    Tag(String),
    Player(Player),
}

impl<'de> Deserialize<'de> for Winner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match WinnerRepr::deserialize(deserializer)? {
            WinnerRepr::Tag(tag) if tag == "even" => Ok(Winner::Even),
            WinnerRepr::Tag(tag) => Err(D::Error::custom(format!("unknown winner '{tag}'"))),
            WinnerRepr::Player(p) => Ok(Winner::Player(p)),
        }
    }
}
