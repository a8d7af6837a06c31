//! # Play Command
//!
//! Interactive Make Ten on stdin. The player types a card position to turn a
//! card over; every second card completes a pair, which is shown face-up for
//! the settle delay and then retired or turned back.
//!
//! - `r`/`restart` deals a new round (the old one is recorded as abandoned
//!   once a pair has been played)
//! - `q`/`quit` or EOF ends the session
//! - `--no-delay` skips the real sleep between a pair and its settle
//! - `--record PATH` appends every finished or abandoned round as JSONL

use crate::commands::load_config;
use crate::error::CliError;
use crate::formatters::{format_board, format_event, format_hud};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{PlayInput, parse_play_input};
use maketen_engine::engine::{Ignored, MatchEngine, Reveal};
use maketen_engine::events::RoundEvent;
use maketen_engine::logger::RoundLogger;
use maketen_engine::session::Session;
use std::io::{BufRead, Write};

pub fn handle_play_command(
    seed: Option<u64>,
    no_delay: bool,
    record: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let round = cfg
        .round_config()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let mut session = Session::new(MatchEngine::new(round, Some(seed))?);
    let mut logger = record.as_deref().map(RoundLogger::create).transpose()?;

    writeln!(out, "play: seed={} pairs={}", seed, session.engine().total_pairs())?;

    // true once the current round has been written to the record file
    let mut recorded = false;
    loop {
        write!(out, "\n{}", format_board(&session.engine().board()))?;
        writeln!(out, "{}", format_hud(session.engine()))?;
        if session.engine().is_complete() {
            writeln!(out, "Enter r to play again or q to quit:")?;
        } else {
            writeln!(
                out,
                "Pick a card (1-{}), r to restart, q to quit:",
                session.engine().board().len()
            )?;
        }

        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        let board_len = session.engine().board().len();
        match parse_play_input(&line, board_len) {
            PlayInput::Quit => break,
            PlayInput::Restart => {
                if !recorded && session.engine().stats().moves > 0 {
                    write_record(&mut logger, session.engine())?;
                }
                recorded = false;
                let events = session.restart();
                print_events(&events, session.engine(), out)?;
            }
            PlayInput::Invalid(msg) => {
                ui::display_warning(err, &msg)?;
            }
            PlayInput::Pick(idx) => {
                let id = session.engine().board()[idx].id.clone();
                match session.reveal(&id)? {
                    Reveal::Ignored(reason) => {
                        ui::display_warning(err, &ignored_message(reason, idx))?;
                    }
                    Reveal::First(_) => {}
                    Reveal::Pair { events, .. } => {
                        write!(out, "\n{}", format_board(&session.engine().board()))?;
                        print_events(&events, session.engine(), out)?;
                        out.flush()?;
                        if !no_delay && let Some(delay) = session.time_to_next_settle() {
                            std::thread::sleep(delay);
                        }
                        let settled = session.settle_pending();
                        print_events(&settled, session.engine(), out)?;
                        if session.engine().is_complete() && !recorded {
                            write_record(&mut logger, session.engine())?;
                            recorded = true;
                        }
                    }
                }
            }
        }
    }

    if !recorded && session.engine().stats().moves > 0 {
        write_record(&mut logger, session.engine())?;
    }
    writeln!(out, "Goodbye.")?;
    Ok(())
}

fn ignored_message(reason: Ignored, idx: usize) -> String {
    let what = match reason {
        Ignored::Locked => "cannot be turned while a pair is settling",
        Ignored::Matched => "is already matched",
        Ignored::AlreadyRevealed => "is already face-up",
    };
    format!("Card {} {}", idx + 1, what)
}

fn print_events(
    events: &[RoundEvent],
    engine: &MatchEngine,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for line in events.iter().filter_map(|e| format_event(e, engine)) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_record(logger: &mut Option<RoundLogger>, engine: &MatchEngine) -> Result<(), CliError> {
    if let Some(logger) = logger {
        let id = logger.next_id();
        logger.write(&engine.record(id))?;
    }
    Ok(())
}
