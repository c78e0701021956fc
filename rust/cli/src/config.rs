use serde::{Deserialize, Serialize};
use std::fs;

use hexgames_engine::engine::Game;
use hexgames_engine::game::GameType;
use hexgames_engine::options::DEFAULT_PLAYER_NAMES;

pub const CONFIG_ENV: &str = "HEXGAMES_CONFIG";
pub const GAME_ENV: &str = "HEXGAMES_GAME";
pub const SETUP_ENV: &str = "HEXGAMES_SETUP";
pub const SEED_ENV: &str = "HEXGAMES_SEED";
pub const MAX_CLICKS_ENV: &str = "HEXGAMES_MAX_CLICKS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub game: GameType,
    pub setup: String,
    pub seed: Option<u64>,
    pub player_names: [String; 2],
    /// Upper bound on inputs per simulated game
    pub max_clicks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub game: ValueSource,
    pub setup: ValueSource,
    pub seed: ValueSource,
    pub player_names: ValueSource,
    pub max_clicks: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            game: ValueSource::Default,
            setup: ValueSource::Default,
            seed: ValueSource::Default,
            player_names: ValueSource::Default,
            max_clicks: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameType::Dvonn,
            setup: "standard".into(),
            seed: None,
            player_names: DEFAULT_PLAYER_NAMES.map(String::from),
            max_clicks: 5_000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves defaults, then the TOML file named by `HEXGAMES_CONFIG`, then
/// `HEXGAMES_*` variables. Command-line flags are applied by the caller.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.game {
            cfg.game = v
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid game '{}'", v)))?;
            sources.game = ValueSource::File;
        }
        if let Some(v) = f.setup {
            cfg.setup = v;
            sources.setup = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_names {
            cfg.player_names = v;
            sources.player_names = ValueSource::File;
        }
        if let Some(v) = f.max_clicks {
            cfg.max_clicks = v;
            sources.max_clicks = ValueSource::File;
        }
    }

    if let Ok(game) = std::env::var(GAME_ENV)
        && !game.is_empty()
    {
        cfg.game = game
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid game '{}'", game)))?;
        sources.game = ValueSource::Env;
    }
    if let Ok(setup) = std::env::var(SETUP_ENV)
        && !setup.is_empty()
    {
        cfg.setup = setup;
        sources.setup = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(max) = std::env::var(MAX_CLICKS_ENV)
        && !max.is_empty()
    {
        cfg.max_clicks = max
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_clicks".into()))?;
        sources.max_clicks = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    game: Option<String>,
    #[serde(default)]
    setup: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_names: Option<[String; 2]>,
    #[serde(default)]
    max_clicks: Option<u32>,
}

/// Whether `setup` names a setup of `game`, ignoring case.
pub fn is_known_setup(game: GameType, setup: &str) -> bool {
    Game::setups(game)
        .iter()
        .any(|s| s.eq_ignore_ascii_case(setup))
}

/// Checks that the configured setup belongs to the configured game. Kept out
/// of loading so command-line flags can still replace either half.
pub fn validate_setup(cfg: &Config) -> Result<(), ConfigError> {
    if !is_known_setup(cfg.game, &cfg.setup) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} has no setup '{}' (expected one of {})",
            cfg.game,
            cfg.setup,
            Game::setups(cfg.game).join(", ")
        )));
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_clicks == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_clicks must be >0".into(),
        ));
    }
    if cfg.player_names.iter().any(|n| n.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 5] = [CONFIG_ENV, GAME_ENV, SETUP_ENV, SEED_ENV, MAX_CLICKS_ENV];

    fn clear_env() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.game, ValueSource::Default);
        assert_eq!(resolved.sources.max_clicks, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "game = \"tzaar\"\nsetup = \"random\"\nseed = 7\nplayer_names = [\"Ann\", \"Bo\"]"
        )
        .unwrap();
        unsafe {
            std::env::set_var(CONFIG_ENV, file.path());
            std::env::set_var(SEED_ENV, "99");
        }

        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.game, GameType::Tzaar);
        assert_eq!(resolved.sources.game, ValueSource::File);
        assert_eq!(resolved.config.setup, "random");
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.player_names, ["Ann".to_string(), "Bo".to_string()]);
        assert_eq!(resolved.sources.player_names, ValueSource::File);
    }

    #[test]
    #[serial]
    fn test_setup_must_belong_to_game() {
        clear_env();
        unsafe {
            std::env::set_var(GAME_ENV, "gipf");
            std::env::set_var(SETUP_ENV, "random");
        }
        let result = load();
        clear_env();
        let cfg = result.unwrap();
        assert_eq!(cfg.setup, "random");
        let message = validate_setup(&cfg).unwrap_err().to_string();
        assert!(message.contains("basic, standard"), "{message}");
    }

    #[test]
    #[serial]
    fn test_invalid_numbers_are_rejected() {
        clear_env();
        unsafe {
            std::env::set_var(MAX_CLICKS_ENV, "lots");
        }
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        unsafe {
            std::env::set_var(MAX_CLICKS_ENV, "0");
        }
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();
    }

    #[test]
    fn test_known_setups_ignore_case() {
        assert!(is_known_setup(GameType::Dvonn, "Manual"));
        assert!(!is_known_setup(GameType::Tzaar, "basic"));
    }
}
