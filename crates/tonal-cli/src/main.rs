//! tonal - pitch and interval arithmetic from the command line
//!
//! Subcommands:
//! - `tonal pitch <pitch>` - Describe a pitch
//! - `tonal interval <interval>` - Describe an interval
//! - `tonal add <pitch> <interval>` - Transpose up
//! - `tonal sub <pitch> <interval>` - Transpose down
//! - `tonal between <pitch> <pitch>` - Interval between two pitches
//! - `tonal combine <interval> <interval>` - Stack two intervals
//! - `tonal sort <pitch>...` - Sort pitches low to high

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tonal")]
#[command(about = "Pitch and interval arithmetic")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log parsing and transposition details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a pitch (e.g. C#4, eb, Bbb2)
    Pitch {
        pitch: String,
    },

    /// Describe an interval (e.g. M3, P5, +4)
    Interval {
        interval: String,
    },

    /// Transpose a pitch up by an interval
    Add {
        pitch: String,
        interval: String,
    },

    /// Transpose a pitch down by an interval
    Sub {
        pitch: String,
        interval: String,
    },

    /// Name the interval between two pitches
    Between {
        from: String,
        to: String,
    },

    /// Stack two intervals
    Combine {
        first: String,
        second: String,
    },

    /// Sort pitches from low to high
    Sort {
        #[arg(required = true)]
        pitches: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let json = cli.json;
    match cli.command {
        Commands::Pitch { pitch } => {
            commands::emit(&commands::describe_pitch(&pitch)?, json)?;
        }
        Commands::Interval { interval } => {
            commands::emit(&commands::describe_interval(&interval)?, json)?;
        }
        Commands::Add { pitch, interval } => {
            commands::emit(&commands::transpose_up(&pitch, &interval)?, json)?;
        }
        Commands::Sub { pitch, interval } => {
            commands::emit(&commands::transpose_down(&pitch, &interval)?, json)?;
        }
        Commands::Between { from, to } => {
            commands::emit(&commands::between(&from, &to)?, json)?;
        }
        Commands::Combine { first, second } => {
            commands::emit(&commands::combine(&first, &second)?, json)?;
        }
        Commands::Sort { pitches } => {
            commands::emit(&commands::sort(&pitches)?, json)?;
        }
    }

    Ok(())
}
