//! `stats`: aggregate round records from a JSONL file or a directory tree of
//! `.jsonl` / `.jsonl.zst` files.
//!
//! Unparseable lines are counted and reported, not fatal. An unterminated
//! final line is treated as a write cut short and discarded. A record whose
//! pair history disagrees with its stats fails the command after the summary
//! is printed.

use crate::error::CliError;
use crate::io_utils::{collect_record_files, read_text_auto};
use crate::ui;
use maketen_engine::logger::RoundRecord;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
struct StatsState {
    rounds: u64,
    completed: u64,
    moves: u64,
    matches: u64,
    best_streak: u32,
    skipped: u64,
    corrupted: u64,
    inconsistent: u64,
}

impl StatsState {
    fn consume(&mut self, content: &str, err: &mut dyn Write) -> Result<(), CliError> {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            let rec: RoundRecord = match serde_json::from_str(line) {
                Ok(r) => r,
                Err(_) => {
                    if i == lines.len() - 1 && !has_trailing_nl {
                        self.skipped += 1;
                    } else {
                        self.corrupted += 1;
                    }
                    continue;
                }
            };

            let matched_pairs = rec.pairs.iter().filter(|p| p.matched).count() as u32;
            if rec.pairs.len() as u32 != rec.stats.moves
                || matched_pairs != rec.stats.matches_found
            {
                self.inconsistent += 1;
                ui::write_error(
                    err,
                    &format!("Pair history does not match stats in round {}", rec.round_id),
                )?;
                continue;
            }

            self.rounds += 1;
            if rec.completed {
                self.completed += 1;
            }
            self.moves += u64::from(rec.stats.moves);
            self.matches += u64::from(rec.stats.matches_found);
            self.best_streak = self.best_streak.max(rec.stats.best_streak);
        }
        Ok(())
    }
}

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        for file in collect_record_files(path) {
            match read_text_auto(&file) {
                Ok(content) => state.consume(&content, err)?,
                Err(_) => state.corrupted += 1,
            }
        }
    } else {
        let content = read_text_auto(path)
            .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
        state.consume(&content, err)?;
    }

    if state.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.rounds == 0 && (state.corrupted > 0 || state.skipped > 0) {
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let avg_moves = if state.rounds == 0 {
        0.0
    } else {
        state.moves as f64 / state.rounds as f64
    };
    let match_rate = if state.moves == 0 {
        0.0
    } else {
        state.matches as f64 / state.moves as f64
    };
    let summary = serde_json::json!({
        "rounds": state.rounds,
        "completed": state.completed,
        "avg_moves": (avg_moves * 100.0).round() / 100.0,
        "best_streak": state.best_streak,
        "match_rate": (match_rate * 1000.0).round() / 1000.0,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;

    if state.inconsistent > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} record(s) failed validation",
            state.inconsistent
        )));
    }
    Ok(())
}
