use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::DecodeError;
use crate::parsers::Extractor;
use crate::report::finding::{Finding, Severity};
use crate::report::summary::null_as_default;

/// One file entry of `eslint --format json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintFile {
    file_path: String,
    #[serde(default)]
    messages: Vec<EslintMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintMessage {
    /// `null` for fatal parse errors
    #[serde(default)]
    rule_id: Option<String>,
    /// 0 = off, 1 = warning, 2 = error
    #[serde(default)]
    severity: u8,
    #[serde(default)]
    message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    line: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    column: usize,
}

/// Reads ESLint JSON reports
pub struct EslintParser;

impl Extractor for EslintParser {
    fn name(&self) -> &'static str {
        "eslint"
    }

    fn description(&self) -> &'static str {
        "ESLint JSON report (eslint --format json)"
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Finding>, DecodeError> {
        let files: Vec<EslintFile> = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                DecodeError::Read {
                    tool: "eslint",
                    source: e.into(),
                }
            } else {
                DecodeError::Malformed {
                    tool: "eslint",
                    source: Box::new(e),
                }
            }
        })?;

        let mut findings = Vec::new();
        for file in files {
            for msg in file.messages {
                let Some(rule_id) = msg.rule_id.filter(|id| !id.is_empty()) else {
                    debug!("eslint: skipping message without rule in {}", file.file_path);
                    continue;
                };

                let severity = if msg.severity == 2 {
                    Severity::Error
                } else {
                    Severity::Warning
                };

                findings.push(Finding::new(
                    self.name(),
                    file.file_path.as_str(),
                    msg.line,
                    msg.column,
                    msg.message,
                    severity,
                    rule_id,
                ));
            }
        }

        Ok(findings)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".js", ".jsx", ".ts", ".tsx", ".vue"]
    }
}
