//! `deal`: shuffle a deck and print it face-up, for inspecting a seed.

use crate::commands::load_config;
use crate::error::CliError;
use crate::formatters::format_layout;
use maketen_engine::engine::MatchEngine;
use std::io::Write;

/// Prints the seed and the face-up layout. Without `--seed` the configured
/// seed is used, then a random one.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let round = cfg
        .round_config()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let engine = MatchEngine::new(round, Some(seed))?;

    writeln!(out, "Seed: {}", seed)?;
    write!(out, "{}", format_layout(&engine))?;
    Ok(())
}
