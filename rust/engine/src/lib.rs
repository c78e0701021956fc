//! # hexgames-engine: Rules Engines for Hexagonal Board Games
//!
//! Deterministic rules for Dvonn, Gipf and Tzaar on cube-coordinate hex
//! boards. Every game is driven by a single input, "the current player
//! selected cell (x, y, z)", and can be exported to and restored from a flat
//! JSON-serializable snapshot.
//!
//! ## Core Modules
//!
//! - [`coord`] - Cube coordinates and the six directions
//! - [`board`] - Board shapes and layout construction
//! - [`bag`] - Seeded shuffling for random setups
//! - [`game`] - Turn state machine shared by all games
//! - [`dvonn`] - Stack moves and connectivity pruning
//! - [`gipf`] - Push moves, row detection and GIPF-piece claims
//! - [`tzaar`] - Stack combat with a two-action turn
//! - [`engine`] - The [`engine::Game`] enum for runtime game selection
//! - [`log`] - Timestamped game log entries
//! - [`errors`] - Error types for construction and snapshot import
//!
//! ## Quick Start
//!
//! ```rust
//! use hexgames_engine::coord::Coord;
//! use hexgames_engine::game::HexGame;
//! use hexgames_engine::options::GameOptions;
//! use hexgames_engine::tzaar::{TzaarGame, TzaarSetup};
//!
//! let mut game = TzaarGame::new(TzaarSetup::Standard, &GameOptions::default()).unwrap();
//! assert!(game.clicked(Coord::new(1, -1, 0)));
//! assert!(game.clicked(Coord::new(0, -1, 1)));
//! assert_eq!(game.remaining_pieces()[5], 14);
//! ```
//!
//! ## Reproducible Setups
//!
//! Random setups are shuffled with a seeded ChaCha20 generator:
//!
//! ```rust
//! use hexgames_engine::dvonn::{DvonnGame, DvonnSetup};
//! use hexgames_engine::game::HexGame;
//! use hexgames_engine::options::GameOptions;
//!
//! let options = GameOptions::default().with_seed(7);
//! let a = DvonnGame::new(DvonnSetup::Random, &options).unwrap();
//! let b = DvonnGame::new(DvonnSetup::Random, &options).unwrap();
//! assert_eq!(a.core().board, b.core().board);
//! ```

pub mod bag;
pub mod board;
pub mod coord;
pub mod dvonn;
pub mod engine;
pub mod errors;
pub mod game;
pub mod gipf;
pub mod log;
pub mod options;
pub mod player;
pub mod tzaar;
