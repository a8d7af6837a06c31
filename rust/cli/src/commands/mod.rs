//! Command handlers, one module per subcommand.
//!
//! Each module exposes `handle_<name>_command(...) -> Result<(), CliError>`
//! and takes its output streams as `&mut dyn Write` so tests can capture them.

mod cfg;
mod deal;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use crate::config::{self, Config};
use crate::error::CliError;

/// Resolved configuration, with failures mapped to `CliError::Config`.
pub(crate) fn load_config() -> Result<Config, CliError> {
    config::load().map_err(|e| CliError::Config(e.to_string()))
}
