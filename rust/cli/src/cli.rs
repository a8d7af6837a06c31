//! Command-line argument definitions (clap derive).

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "maketen",
    version,
    about = "Make Ten: match expressions that make 10 with their result"
)]
pub struct MakeTenCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a round interactively on stdin
    Play {
        /// Seed for the deck shuffle (default: config, then random)
        #[arg(long)]
        seed: Option<u64>,
        /// Resolve pairs immediately instead of waiting out settle delays
        #[arg(long)]
        no_delay: bool,
        /// Append every finished or abandoned round to this JSONL file
        #[arg(long)]
        record: Option<String>,
    },
    /// Let a picker play many rounds and record the results
    Sim {
        /// Number of rounds to play
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Picker strategy: memory or random (default: config)
        #[arg(long)]
        picker: Option<String>,
        /// Base seed; round i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// JSONL file receiving one record per round
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate round records from a JSONL file or directory
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the face-up layout of a shuffled deck
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display resolved configuration and where each value came from
    Cfg,
}
