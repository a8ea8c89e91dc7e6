use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::report::summary::ToolSummary;

/// Open tool output from a file, or stdin when no path is given
pub fn open_source(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            debug!("Reading tool output from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            debug!("Reading tool output from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Load a summary previously written by `lintdelta parse`
pub fn load_summary(path: &Path) -> Result<ToolSummary> {
    let file = File::open(path)
        .with_context(|| format!("failed to open summary file {}", path.display()))?;
    let summary: ToolSummary = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to decode summary {}", path.display()))?;
    debug!(
        "Loaded {} summary from {} ({} files)",
        summary.tool,
        path.display(),
        summary.file_summaries.len()
    );
    Ok(summary)
}
