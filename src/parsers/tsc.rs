use std::io::{BufRead, BufReader, Read};

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::DecodeError;
use crate::parsers::Extractor;
use crate::report::finding::{Finding, Severity};

/// Reads TypeScript compiler diagnostics, one per line.
///
/// Understands both `file.ts(10,5): error TS2322: ...` and the `--pretty`
/// layout `file.ts:10:5 - error TS2322: ...`. Anything else (code frames,
/// the trailing "Found N errors" line) is skipped.
pub struct TscParser {
    classic: Regex,
    pretty: Regex,
    ansi: Regex,
}

impl TscParser {
    pub fn new() -> Self {
        TscParser {
            classic: Regex::new(r"^(.+)\((\d+),(\d+)\): (error|warning) (TS\d+): (.+)$")
                .expect("tsc classic pattern"),
            pretty: Regex::new(r"^(.+?):(\d+):(\d+) - (error|warning) (TS\d+): (.+)$")
                .expect("tsc pretty pattern"),
            ansi: Regex::new(r"\x1b\[[0-9;]*m").expect("ansi escape pattern"),
        }
    }

    fn parse_line(&self, line: &str) -> Option<Finding> {
        let line = self.ansi.replace_all(line.trim_end_matches('\r'), "");
        let caps = self
            .classic
            .captures(&line)
            .or_else(|| self.pretty.captures(&line))?;
        self.finding_from(&caps)
    }

    fn finding_from(&self, caps: &Captures<'_>) -> Option<Finding> {
        let severity = match &caps[4] {
            "error" => Severity::Error,
            _ => Severity::Warning,
        };
        Some(Finding::new(
            self.name(),
            &caps[1],
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
            &caps[6],
            severity,
            &caps[5],
        ))
    }
}

impl Default for TscParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for TscParser {
    fn name(&self) -> &'static str {
        "tsc"
    }

    fn description(&self) -> &'static str {
        "TypeScript compiler diagnostics (tsc --noEmit)"
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Finding>, DecodeError> {
        let mut findings = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|source| DecodeError::Read {
                tool: "tsc",
                source,
            })?;
            match self.parse_line(&line) {
                Some(finding) => findings.push(finding),
                None => debug!("tsc: skipping line {:?}", line),
            }
        }
        Ok(findings)
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".ts", ".tsx"]
    }
}
