//! `cfg`: resolved configuration as JSON, each value paired with its source.
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "match_settle_ms": { "value": 420, "source": "default" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;

    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "match_settle_ms": {
            "value": config.match_settle_ms,
            "source": sources.match_settle_ms,
        },
        "mismatch_settle_ms": {
            "value": config.mismatch_settle_ms,
            "source": sources.mismatch_settle_ms,
        },
        "expressions": {
            "value": config.expressions,
            "source": sources.expressions,
        },
        "picker": {
            "value": config.picker,
            "source": sources.picker,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
