use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "crucible",
    about = "Verifies code against AI-generated test cases",
    version,
    author,
    long_about = None
)]
pub struct CrucibleCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a source file once in the remote sandbox
    Run {
        /// Path to the source file
        #[arg(short = 's', long)]
        code: PathBuf,

        /// Language of the source file (asked interactively when omitted)
        #[arg(long)]
        language: Option<String>,

        /// Stdin to feed the program
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Generate test cases for a problem without running them
    Synthesize {
        /// Path to a file holding the problem statement
        #[arg(short, long)]
        problem: PathBuf,

        /// Path to the source file
        #[arg(short = 's', long)]
        code: PathBuf,

        /// Write the generated cases to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score code quality across the nine review criteria
    Assess {
        /// Path to a file holding the problem statement
        #[arg(short, long)]
        problem: PathBuf,

        /// Path to the source file
        #[arg(short = 's', long)]
        code: PathBuf,

        /// Sample stdin shown to the reviewer
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Synthesize test cases, run them all, and score the code
    Verify {
        /// Path to a file holding the problem statement
        #[arg(short, long)]
        problem: PathBuf,

        /// Path to the source file
        #[arg(short = 's', long)]
        code: PathBuf,

        /// Language of the source file (asked interactively when omitted)
        #[arg(long)]
        language: Option<String>,

        /// Sample stdin shown to the reviewer
        #[arg(short, long)]
        input: Option<String>,

        /// Write the outcome to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
