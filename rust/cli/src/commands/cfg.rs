//! `cfg`: prints the resolved configuration with the source of every value.
//!
//! ```json
//! {
//!   "game": { "value": "dvonn", "source": "default" },
//!   "max_clicks": { "value": 5000, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let loaded = config::load_with_sources()
        .and_then(|r| config::validate_setup(&r.config).map(|()| r));
    let resolved = match loaded {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "game": {
            "value": config.game,
            "source": sources.game,
        },
        "setup": {
            "value": config.setup,
            "source": sources.setup,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "player_names": {
            "value": config.player_names,
            "source": sources.player_names,
        },
        "max_clicks": {
            "value": config.max_clicks,
            "source": sources.max_clicks,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
