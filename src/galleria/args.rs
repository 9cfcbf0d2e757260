use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "galleria")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Filter and search the artwork on a gallery page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use the user-wide configuration instead of ./.galleria
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the values offered by each filter
    #[command(alias = "f")]
    Facets {
        /// Page manifest (JSON with a "gallery" array)
        manifest: PathBuf,
    },

    /// Show the artworks matching a query
    #[command(alias = "ls")]
    Filter {
        /// Page manifest (JSON with a "gallery" array)
        manifest: PathBuf,

        /// Text to find in titles or descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Only this medium
        #[arg(short, long)]
        medium: Option<String>,

        /// Only this year
        #[arg(short, long)]
        year: Option<String>,

        /// Only this series
        #[arg(long)]
        series: Option<String>,
    },

    /// Replay a script of UI events on virtual time
    Session {
        /// Page manifest (JSON with a "gallery" array)
        manifest: PathBuf,

        /// Event script (`at <ms> <action>` per line)
        script: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (debounce-ms, noun)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
