use serde_json::Value;

use crate::coord::Coord;
use crate::dvonn::{DvonnGame, DvonnSetup};
use crate::errors::GameError;
use crate::game::{GameState, GameType, HexGame, PlayerStep};
use crate::gipf::{GipfGame, GipfSetup};
use crate::log::LogEntry;
use crate::options::GameOptions;
use crate::player::{Player, Winner};
use crate::tzaar::{TzaarGame, TzaarSetup};

/// Setup name every game accepts.
pub const DEFAULT_SETUP: &str = "standard";

/// One input a player can give: select a cell, or decline an optional
/// follow-up (a Tzaar second action or remaining GIPF claims).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Click(Coord),
    Pass,
}

/// Any of the three games, chosen at runtime.
///
/// # Examples
///
/// ```
/// use hexgames_engine::coord::Coord;
/// use hexgames_engine::engine::Game;
/// use hexgames_engine::game::GameType;
/// use hexgames_engine::options::GameOptions;
///
/// let mut game = Game::new(GameType::Dvonn, "standard", &GameOptions::default()).unwrap();
/// assert!(game.clicked(Coord::new(-4, 2, 2)));
/// assert!(game.clicked(Coord::new(-4, 3, 1)));
/// assert_eq!(game.current_player().name, "Player2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Game {
    Dvonn(DvonnGame),
    Gipf(GipfGame),
    Tzaar(TzaarGame),
}

macro_rules! each_game {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            Game::Dvonn($g) => $body,
            Game::Gipf($g) => $body,
            Game::Tzaar($g) => $body,
        }
    };
}

impl Game {
    /// Creates a game from its type and a setup name such as `"standard"`.
    pub fn new(
        game_type: GameType,
        setup: &str,
        options: &GameOptions,
    ) -> Result<Self, GameError> {
        Ok(match game_type {
            GameType::Dvonn => {
                Game::Dvonn(DvonnGame::new(setup.parse::<DvonnSetup>()?, options)?)
            }
            GameType::Gipf => Game::Gipf(GipfGame::new(setup.parse::<GipfSetup>()?, options)?),
            GameType::Tzaar => {
                Game::Tzaar(TzaarGame::new(setup.parse::<TzaarSetup>()?, options)?)
            }
        })
    }

    pub fn setups(game_type: GameType) -> &'static [&'static str] {
        match game_type {
            GameType::Dvonn => &["manual", "standard", "random"],
            GameType::Gipf => &["basic", "standard"],
            GameType::Tzaar => &["standard", "random"],
        }
    }

    pub fn game_type(&self) -> GameType {
        each_game!(self, g => g.game_type())
    }

    pub fn clicked(&mut self, at: Coord) -> bool {
        each_game!(self, g => g.clicked(at))
    }

    /// Declines the current optional follow-up, if the game offers one.
    pub fn pass(&mut self) -> bool {
        match self {
            Game::Dvonn(_) => false,
            Game::Gipf(g) => g.skip_special_capture(),
            Game::Tzaar(g) => g.pass_action(),
        }
    }

    pub fn can_pass(&self) -> bool {
        match self {
            Game::Dvonn(_) => false,
            Game::Gipf(g) => g.can_skip_gipf(),
            Game::Tzaar(g) => g.can_pass(),
        }
    }

    pub fn apply(&mut self, input: Input) -> bool {
        match input {
            Input::Click(at) => self.clicked(at),
            Input::Pass => self.pass(),
        }
    }

    pub fn is_completed(&self) -> bool {
        each_game!(self, g => g.is_completed())
    }

    pub fn state(&self) -> GameState {
        each_game!(self, g => g.core().state)
    }

    pub fn step(&self) -> PlayerStep {
        each_game!(self, g => g.core().step)
    }

    pub fn current_player(&self) -> &Player {
        each_game!(self, g => g.current_player())
    }

    pub fn winner(&self) -> Option<&Winner> {
        each_game!(self, g => g.winner())
    }

    pub fn log(&self) -> &[LogEntry] {
        each_game!(self, g => &g.core().log)
    }

    pub fn legal_moves(&self) -> &[Coord] {
        each_game!(self, g => &g.core().legal_moves)
    }

    pub fn cells(&self) -> Vec<Coord> {
        each_game!(self, g => g.core().shape.cells().collect())
    }

    pub fn board_notation(&self, at: Coord) -> String {
        each_game!(self, g => g.board_notation(at))
    }

    pub fn should_update(&self) -> bool {
        each_game!(self, g => g.should_update())
    }

    /// Every input that would change the game right now. Cancelling a
    /// selection is left out.
    pub fn candidate_inputs(&self) -> Vec<Input> {
        if self.state() == GameState::Completed {
            return Vec::new();
        }
        let mut inputs: Vec<Input> = if self.step() == PlayerStep::LocationTo {
            self.legal_moves().iter().copied().map(Input::Click).collect()
        } else {
            self.cells()
                .into_iter()
                .filter(|&at| self.clone().clicked(at))
                .map(Input::Click)
                .collect()
        };
        if self.can_pass() {
            inputs.push(Input::Pass);
        }
        inputs
    }

    pub fn export_json(&self) -> Result<Value, GameError> {
        let value = each_game!(self, g => serde_json::to_value(g.export_state()));
        value.map_err(|e| GameError::Decode(e.to_string()))
    }

    /// Overwrites this game with a snapshot of the same game type.
    pub fn import_json(&mut self, value: Value) -> Result<(), GameError> {
        let decode = |e: serde_json::Error| GameError::Decode(e.to_string());
        match self {
            Game::Dvonn(g) => g.import_state(serde_json::from_value(value).map_err(decode)?),
            Game::Gipf(g) => g.import_state(serde_json::from_value(value).map_err(decode)?),
            Game::Tzaar(g) => g.import_state(serde_json::from_value(value).map_err(decode)?),
        }
    }

    /// Rebuilds a game of whatever type the snapshot names.
    pub fn from_json(value: Value) -> Result<Self, GameError> {
        let type_name = value
            .get("gameType")
            .and_then(Value::as_str)
            .ok_or_else(|| GameError::Decode("missing gameType".to_string()))?;
        let game_type: GameType = type_name.parse()?;
        let mut game = Game::new(game_type, DEFAULT_SETUP, &GameOptions::default())?;
        game.import_json(value)?;
        Ok(game)
    }
}
