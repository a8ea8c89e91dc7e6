use serde::{Deserialize, Serialize};

/// Severity level of a normalized finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }

    /// Severity carried into a rule comparison. Only an ERROR on the
    /// `after` side can raise it; an ERROR on `before` is never lowered.
    pub fn escalate(before: Severity, after: Severity) -> Severity {
        if after == Severity::Error {
            Severity::Error
        } else {
            before
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single issue reported by a static-analysis tool, normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the extractor that produced this finding, e.g. "eslint"
    pub tool: String,

    /// File path as reported by the tool; used verbatim as a key
    pub file: String,

    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based)
    pub column: usize,

    /// Human-readable message
    pub message: String,

    pub severity: Severity,

    /// Stable rule identifier, e.g. "TS2322" or "no-unused-vars"
    pub rule_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Finding {
    /// Build a finding whose description is its message
    pub fn new(
        tool: impl Into<String>,
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
        severity: Severity,
        rule_id: impl Into<String>,
    ) -> Self {
        let message = message.into();
        Finding {
            tool: tool.into(),
            file: file.into(),
            line,
            column,
            description: message.clone(),
            message,
            severity,
            rule_id: rule_id.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Description, falling back to the message when the tool gave none
    pub fn description(&self) -> &str {
        if self.description.is_empty() {
            &self.message
        } else {
            &self.description
        }
    }
}

/// One occurrence of a rule inside a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<&Finding> for Violation {
    fn from(finding: &Finding) -> Self {
        Violation {
            line: finding.line,
            column: finding.column,
            message: finding.message.clone(),
        }
    }
}
