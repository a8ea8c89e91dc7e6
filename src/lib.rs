//! Normalize static-analysis findings into per-file, per-rule summaries
//! and compute the delta between two summaries of the same tool.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod listing;
pub mod parsers;
pub mod report;

pub use error::{AggregateError, CompareError, DecodeError, RegistryError};
pub use report::{
    ComparisonResult, FileComparison, FileSummary, Finding, RuleComparison, RuleSummary, Severity,
    ToolSummary, Violation,
};
