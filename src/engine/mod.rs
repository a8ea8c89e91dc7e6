pub mod input;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};

use crate::cli::ParseArgs;
use crate::config::LintDeltaConfig;
use crate::parsers::{Extractor, Registry};
use crate::report::compare::ComparisonResult;
use crate::report::summary::ToolSummary;

/// Turns one tool's raw output into a summary: decode, filter excluded
/// paths, aggregate.
pub struct Summarizer {
    extractor: Arc<dyn Extractor>,
    /// None when nothing is excluded
    excluded: Option<GlobSet>,
}

impl Summarizer {
    pub fn new(
        registry: &Registry,
        args: &ParseArgs,
        config: Option<&LintDeltaConfig>,
    ) -> Result<Self> {
        let extractor = registry
            .get(&args.parser)
            .context("failed to get parser")?;

        // Merge exclude patterns from config and CLI
        let mut exclude = args.exclude.clone();
        if let Some(cfg) = config {
            exclude.extend(cfg.parse.exclude.iter().cloned());
        }

        info!("Using parser {}", extractor.name());
        Ok(Self::with_exclude(extractor, &exclude))
    }

    pub fn with_exclude(extractor: Arc<dyn Extractor>, exclude: &[String]) -> Self {
        Summarizer {
            extractor,
            excluded: build_globset(exclude),
        }
    }

    /// Summarize the given input file, or stdin
    pub fn run(&self, input: Option<&Path>) -> Result<ToolSummary> {
        let mut reader = input::open_source(input)?;
        self.summarize(&mut *reader)
    }

    pub fn summarize(&self, reader: &mut dyn Read) -> Result<ToolSummary> {
        let mut findings = self
            .extractor
            .parse(reader)
            .context("failed to parse input")?;
        info!("Raw findings: {}", findings.len());

        if let Some(excluded) = &self.excluded {
            findings.retain(|f| {
                let skip = excluded.is_match(&f.file);
                if skip {
                    debug!("Excluded: {}", f.file);
                }
                !skip
            });
            info!("Findings after exclusions: {}", findings.len());
        }

        let mut summary = ToolSummary::from_findings_checked(&findings)?;

        // A clean run still has to compare against earlier runs of this tool.
        if summary.tool.is_empty() {
            summary.tool = self.extractor.name().to_string();
        }

        info!(
            "Summarized {} findings across {} files",
            summary.total(),
            summary.file_summaries.len()
        );
        Ok(summary)
    }
}

/// Compare two persisted summaries
pub fn compare_files(before: &Path, after: &Path) -> Result<ComparisonResult> {
    let before_summary = input::load_summary(before)?;
    let after_summary = input::load_summary(after)?;

    let comparison = before_summary.compare(&after_summary)?;
    info!(
        "{} worsened, {} improved, {} new, {} removed",
        comparison.worsened_files.len(),
        comparison.improved_files.len(),
        comparison.new_files.len(),
        comparison.removed_files.len()
    );
    Ok(comparison)
}

fn build_globset(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => tracing::warn!("Invalid exclude pattern '{}': {}", pattern, e),
        }
    }

    match builder.build() {
        Ok(set) => Some(set),
        Err(e) => {
            tracing::warn!("Could not build exclude patterns: {}", e);
            None
        }
    }
}
