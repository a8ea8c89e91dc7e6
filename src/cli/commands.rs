use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse static analysis tool output into a summary.
    /// Reads stdin when no input file is given.
    #[command(visible_alias = "summarize")]
    Parse(ParseArgs),

    /// Compare two summaries. Exits with code 1 if any file has worsened.
    Compare(CompareArgs),

    /// List available parsers
    List,

    /// Initialize a .lintdelta.toml config file in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Parser name (see `lintdelta list`)
    pub parser: String,

    /// Tool output to parse (defaults to stdin)
    pub input: Option<PathBuf>,

    /// Output format: "json" or "terminal"
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the summary to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Glob patterns of reported files to leave out (can be repeated)
    #[arg(long)]
    pub exclude: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Summary from before the change
    pub before: PathBuf,

    /// Summary from after the change
    pub after: PathBuf,

    /// Only exit with code 1 when a worsened rule has ERROR severity
    #[arg(long)]
    pub ignore_warnings: bool,

    /// Output format: "json" or "terminal"
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the comparison to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
