use std::io::{BufReader, Read};

use serde::Deserialize;
use tracing::debug;

use crate::error::DecodeError;
use crate::parsers::Extractor;
use crate::report::finding::{Finding, Severity};

#[derive(Debug, Deserialize)]
struct CheckstyleReport {
    #[serde(rename = "file", default)]
    files: Vec<CheckstyleFile>,
}

#[derive(Debug, Deserialize)]
struct CheckstyleFile {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "error", default)]
    errors: Vec<CheckstyleError>,
}

#[derive(Debug, Deserialize)]
struct CheckstyleError {
    #[serde(rename = "@line", default)]
    line: usize,
    #[serde(rename = "@column", default)]
    column: usize,
    #[serde(rename = "@severity", default)]
    severity: String,
    #[serde(rename = "@message", default)]
    message: String,
    /// Fully qualified check class, used as the rule id
    #[serde(rename = "@source", default)]
    source: String,
}

/// Reads Checkstyle XML reports.
///
/// Only `error` and `warning` entries are kept; `info` and `ignore` are
/// dropped. Entries without a `source` get the rule id `checkstyle`.
pub struct CheckstyleParser;

impl Extractor for CheckstyleParser {
    fn name(&self) -> &'static str {
        "checkstyle"
    }

    fn description(&self) -> &'static str {
        "Checkstyle XML report"
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Finding>, DecodeError> {
        let report: CheckstyleReport =
            quick_xml::de::from_reader(BufReader::new(reader)).map_err(|e| {
                DecodeError::Malformed {
                    tool: "checkstyle",
                    source: Box::new(e),
                }
            })?;

        let mut findings = Vec::new();
        for file in report.files {
            for error in file.errors {
                let severity = match error.severity.as_str() {
                    "error" => Severity::Error,
                    "warning" => Severity::Warning,
                    other => {
                        debug!("checkstyle: skipping {} entry in {}", other, file.name);
                        continue;
                    }
                };

                let rule_id = if error.source.is_empty() {
                    self.name().to_string()
                } else {
                    error.source
                };

                findings.push(Finding::new(
                    self.name(),
                    file.name.as_str(),
                    error.line,
                    error.column,
                    error.message,
                    severity,
                    rule_id,
                ));
            }
        }

        Ok(findings)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".java", ".xml", ".properties"]
    }
}
