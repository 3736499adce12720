use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use bacteriaguard_core::types::FoodCategory;

/// BacteriaGuard food safety demo, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "bacteriaguard", version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON config file.
    #[arg(short, long, global = true, default_value = "bacteriaguard.json")]
    pub config: PathBuf,

    /// Machine-readable JSON output.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the whole page.
    Site,

    /// Run one simulated scan from Start Scan to the result.
    Scan(ScanArgs),

    /// Education topics.
    Topics(TopicsArgs),

    /// Daily prevention tips.
    Tips,

    /// Symptom options offered by the report form.
    Symptoms,

    /// Food categories offered by the report form.
    Categories,

    /// Submit a food poisoning report.
    Report(ReportArgs),

    /// Manage the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Seed for reproducible results (overrides the config).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the phase delays.
    #[arg(long)]
    pub instant: bool,

    /// Cancel the run after this many milliseconds.
    #[arg(long)]
    pub cancel_after_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct TopicsArgs {
    /// Expand a topic (Read More). Repeatable; 1-based.
    #[arg(short, long)]
    pub expand: Vec<usize>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Type of food or drink (value or label, e.g. `seafood`).
    #[arg(long)]
    pub food: FoodCategory,

    #[arg(long)]
    pub symptoms: Option<String>,

    /// Select a symptom badge. Repeatable.
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Where the food was bought or eaten.
    #[arg(long)]
    pub location: Option<String>,

    /// When it was consumed.
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Photo file name to attach.
    #[arg(long)]
    pub photo: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config.
    Show,
}
