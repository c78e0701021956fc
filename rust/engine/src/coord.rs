use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Cube coordinate of a hexagonal cell. `x + y + z == 0` for every valid cell.
///
/// Serialized as the canonical `"x,y,z"` string so it can key a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// The six unit steps between neighbouring cells. Even indices are the three
/// line axes; each odd index is the reverse of the one before it.
pub const DIRECTIONS: [Coord; 6] = [
    Coord::new(0, 1, -1),
    Coord::new(0, -1, 1),
    Coord::new(1, 0, -1),
    Coord::new(-1, 0, 1),
    Coord::new(1, -1, 0),
    Coord::new(-1, 1, 0),
];

/// The three line axes, one per pair in [`DIRECTIONS`].
pub const AXES: [Coord; 3] = [DIRECTIONS[0], DIRECTIONS[2], DIRECTIONS[4]];

pub const ORIGIN: Coord = Coord::new(0, 0, 0);

impl Coord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Builds the cell at column `x` of rank `z`.
    pub const fn from_xz(x: i32, z: i32) -> Self {
        Self { x, y: -(x + z), z }
    }

    pub fn is_valid(&self) -> bool {
        i64::from(self.x) + i64::from(self.y) + i64::from(self.z) == 0
    }

    /// Moves `steps` times along `dir`.
    pub fn offset(self, dir: Coord, steps: i32) -> Coord {
        Coord::new(
            self.x + dir.x * steps,
            self.y + dir.y * steps,
            self.z + dir.z * steps,
        )
    }

    pub fn step(self, dir: Coord) -> Coord {
        self.offset(dir, 1)
    }

    pub fn reversed(self) -> Coord {
        Coord::new(-self.x, -self.y, -self.z)
    }

    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        DIRECTIONS.into_iter().map(move |d| self.step(d))
    }

    /// Identifies the straight line through `self` along `axis`: the
    /// component that stays constant while walking that axis.
    pub fn line_offset(self, axis: Coord) -> i32 {
        if axis.x == 0 {
            self.x
        } else if axis.y == 0 {
            self.y
        } else {
            self.z
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(GameError::InvalidCoordinate(s.to_string()));
        }
        let mut values = [0i32; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| GameError::InvalidCoordinate(s.to_string()))?;
        }
        let coord = Coord::new(values[0], values[1], values[2]);
        if !coord.is_valid() {
            return Err(GameError::InvalidCoordinate(s.to_string()));
        }
        Ok(coord)
    }
}

impl TryFrom<String> for Coord {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coord> for String {
    fn from(value: Coord) -> Self {
        value.to_string()
    }
}
