//! CLI frontend for the greenbox solo oracle desk.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "greenbox",
    about = "Greenbox: a solo oracle desk for investigative horror campaigns",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the saved campaign
    #[arg(short, long, global = true, default_value = ".greenbox")]
    data_dir: PathBuf,

    /// RNG seed for reproducible rolls
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive desk
    Play,

    /// Ask the oracle a yes/no question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Odds: impossible, no way, unlikely, 50/50, likely, sure thing, has to be
        #[arg(short, long, default_value = "50/50")]
        odds: String,
    },

    /// Roll a die from the tray and log it
    Roll {
        /// Die to roll: d4, d6, d8, d10, d20, d100
        #[arg(default_value = "d100")]
        die: String,
    },

    /// Print the fate chart
    Chart {
        /// Show the bands for a single chaos factor
        #[arg(short, long)]
        chaos: Option<u32>,
    },

    /// Show the campaign at a glance
    Status {
        /// Number of recent log entries to show
        #[arg(short, long, default_value = "5")]
        recent: usize,
    },

    /// Write the campaign to a portable save file
    Export {
        /// Output file path (default: greenbox-campaign.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the campaign with a save file
    Import {
        /// Save file to read
        file: PathBuf,
    },

    /// Discard the campaign and start over from the defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let dir = cli.data_dir.as_path();
    let seed = cli.seed;

    let result = match cli.command {
        Commands::Play => commands::play::run(dir, seed),
        Commands::Ask { question, odds } => commands::ask::run(dir, seed, &odds, &question.join(" ")),
        Commands::Roll { die } => commands::roll::run(dir, seed, &die),
        Commands::Chart { chaos } => commands::chart::run(chaos),
        Commands::Status { recent } => commands::status::run(dir, recent),
        Commands::Export { output } => commands::export::run(dir, output.as_deref()),
        Commands::Import { file } => commands::import::run(dir, &file),
        Commands::Reset { yes } => commands::reset::run(dir, yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
