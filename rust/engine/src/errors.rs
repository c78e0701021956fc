use thiserror::Error;

use crate::game::GameType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Malformed board layout: {0}")]
    MalformedLayout(String),
    #[error("Expected {expected} pieces, got {actual}")]
    PieceCount { expected: usize, actual: usize },
    #[error("Unknown {game} setup '{setup}'")]
    UnknownSetup { game: GameType, setup: String },
    #[error("Unknown game '{0}'")]
    UnknownGame(String),
    #[error("Snapshot is for {actual}, expected {expected}")]
    WrongGameType { expected: GameType, actual: GameType },
    #[error("Player {0} is not seated in this game")]
    UnknownPlayer(String),
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Failed to decode snapshot: {0}")]
    Decode(String),
}
