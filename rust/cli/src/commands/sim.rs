//! `sim`: automated rounds with a picker, written as JSONL round records.
//!
//! Round `i` is dealt with seed `base + i` and played by a picker seeded the
//! same way, so any single round can be replayed on its own.

use crate::commands::load_config;
use crate::error::CliError;
use maketen_ai::{create_picker, play_round};
use maketen_engine::engine::MatchEngine;
use maketen_engine::logger::RoundLogger;
use maketen_engine::session::Session;
use std::io::Write;
use tracing::{debug, info};

/// Upper bound on pairs per round; only a badly unlucky random picker gets near it.
pub const MAX_MOVES: u32 = 500;

pub fn handle_sim_command(
    rounds: u32,
    picker: Option<String>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = load_config()?;
    let picker_name = picker.unwrap_or_else(|| cfg.picker.clone());
    // fail on an unknown picker before any file is created
    create_picker(&picker_name, 0).map_err(CliError::InvalidInput)?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let round_config = cfg
        .round_config()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let mut logger = output.as_deref().map(RoundLogger::create).transpose()?;

    let mut completed = 0u32;
    let mut total_moves = 0u64;
    let mut best_streak = 0u32;
    for i in 0..rounds {
        let round_seed = base_seed.wrapping_add(u64::from(i));
        let mut session = Session::new(MatchEngine::new(round_config.clone(), Some(round_seed))?);
        let mut picker = create_picker(&picker_name, round_seed).map_err(CliError::InvalidInput)?;
        play_round(&mut session, picker.as_mut(), MAX_MOVES)?;

        let engine = session.engine();
        let stats = engine.stats();
        debug!(round = i, seed = round_seed, moves = stats.moves, "simulated round");
        if engine.is_complete() {
            completed += 1;
        }
        total_moves += u64::from(stats.moves);
        best_streak = best_streak.max(stats.best_streak);

        if let Some(logger) = logger.as_mut() {
            let mut record = engine.record(logger.next_id());
            record.picker = Some(picker.name().to_string());
            logger.write(&record)?;
        }
    }

    let avg_moves = total_moves as f64 / f64::from(rounds);
    info!(rounds, completed, "simulation finished");
    writeln!(
        out,
        "sim: picker={} seed={} rounds={}",
        picker_name, base_seed, rounds
    )?;
    writeln!(out, "Completed: {}/{}", completed, rounds)?;
    writeln!(out, "Average moves: {:.2}", avg_moves)?;
    writeln!(out, "Best streak: {}", best_streak)?;
    if let Some(path) = output {
        writeln!(out, "Records: {}", path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maketen_engine::logger::RoundRecord;
    use serial_test::serial;

    #[test]
    #[serial]
    fn writes_one_record_per_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim").join("out.jsonl");
        let mut out = Vec::new();
        handle_sim_command(
            5,
            Some("memory".into()),
            Some(100),
            Some(path.to_string_lossy().into_owned()),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Completed: 5/5"), "{}", text);

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<RoundRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 5);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.seed, 100 + i as u64);
            assert_eq!(r.picker.as_deref(), Some("memory"));
            assert!(r.completed);
            assert_eq!(r.stats.matches_found, 6);
            assert!(r.round_id.ends_with(&format!("{:06}", i + 1)));
        }
    }

    #[test]
    #[serial]
    fn same_seed_same_summary() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_sim_command(3, Some("random".into()), Some(9), None, &mut a).unwrap();
        handle_sim_command(3, Some("random".into()), Some(9), None, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    #[serial]
    fn rejects_zero_rounds_and_unknown_picker() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_sim_command(0, None, Some(1), None, &mut out),
            Err(CliError::InvalidInput(_))
        ));
        let err = handle_sim_command(1, Some("psychic".into()), Some(1), None, &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown picker"));
    }
}
