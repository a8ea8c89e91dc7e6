pub mod checkstyle;
pub mod eslint;
pub mod registry;
pub mod tsc;

use std::io::Read;

use crate::error::DecodeError;
use crate::report::finding::Finding;

pub use registry::Registry;

/// The extractor trait.
/// Each extractor turns one tool's native output into normalized findings.
pub trait Extractor: Send + Sync {
    /// Extractor name (e.g. "tsc", "eslint"); also the `tool` of every finding
    fn name(&self) -> &'static str;

    /// Short description of the output format this extractor reads
    fn description(&self) -> &'static str;

    /// Decode a full report. Never returns partial results on malformed input.
    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Finding>, DecodeError>;

    /// File extensions the underlying tool checks
    fn supported_extensions(&self) -> &'static [&'static str];
}

/// All built-in extractors
pub fn all_extractors() -> Vec<Box<dyn Extractor>> {
    vec![
        Box::new(tsc::TscParser::new()),
        Box::new(eslint::EslintParser),
        Box::new(checkstyle::CheckstyleParser),
    ]
}
