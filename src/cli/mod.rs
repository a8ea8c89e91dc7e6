pub mod commands;

use clap::Parser;

pub use commands::{Commands, CompareArgs, ParseArgs};

/// lintdelta — track static-analysis findings across changes
///
/// Normalizes tsc, ESLint and Checkstyle output into per-file, per-rule
/// summaries and diffs two summaries to catch regressions in CI.
#[derive(Parser, Debug)]
#[command(
    name = "lintdelta",
    version,
    about = "Summarize and compare static analysis results",
    long_about = "lintdelta parses the output of static analysis tools into a unified summary\nand compares two summaries to see what has improved or worsened.\n\nExample:\n  tsc --noEmit | lintdelta parse tsc > after.json\n  lintdelta compare before.json after.json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Ignore .lintdelta.toml config files
    #[arg(long, global = true)]
    pub no_config: bool,
}
