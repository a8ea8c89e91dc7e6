//! Folding a flat list of findings into the tool → file → rule hierarchy.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AggregateError;
use crate::report::finding::{Finding, Severity, Violation};

/// All findings of one tool, grouped by file then by rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    #[serde(default)]
    pub tool: String,

    /// Sorted by file path
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_summaries: Vec<FileSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub file: String,

    /// Sorted by rule id
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule_summaries: Vec<RuleSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub rule_id: String,

    /// Taken from the first finding of this rule in the file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Taken from the first finding, not the maximum over all of them
    pub severity: Severity,

    /// Always equal to `violations.len()` when built from findings
    pub count: usize,

    /// In input order
    #[serde(default, deserialize_with = "null_as_default")]
    pub violations: Vec<Violation>,
}

impl RuleSummary {
    fn seeded_by(finding: &Finding) -> Self {
        RuleSummary {
            rule_id: finding.rule_id.clone(),
            description: finding.description().to_string(),
            severity: finding.severity,
            count: 0,
            violations: Vec::new(),
        }
    }

    fn record(&mut self, finding: &Finding) {
        self.violations.push(Violation::from(finding));
        self.count = self.violations.len();
    }
}

impl FileSummary {
    /// Sum of the rule counts in this file
    pub fn total(&self) -> usize {
        self.rule_summaries.iter().map(|r| r.count).sum()
    }
}

impl ToolSummary {
    /// Group findings by file and rule.
    ///
    /// The tool name comes from the first finding; later findings are not
    /// checked against it (see [`ToolSummary::from_findings_checked`]).
    /// An empty input gives an empty summary with no tool name.
    pub fn from_findings(findings: &[Finding]) -> Self {
        let Some(first) = findings.first() else {
            return ToolSummary::default();
        };

        let mut files: BTreeMap<&str, BTreeMap<&str, RuleSummary>> = BTreeMap::new();
        for finding in findings {
            files
                .entry(finding.file.as_str())
                .or_default()
                .entry(finding.rule_id.as_str())
                .or_insert_with(|| RuleSummary::seeded_by(finding))
                .record(finding);
        }

        let file_summaries = files
            .into_iter()
            .map(|(file, rules)| FileSummary {
                file: file.to_string(),
                rule_summaries: rules.into_values().collect(),
            })
            .collect();

        ToolSummary {
            tool: first.tool.clone(),
            file_summaries,
        }
    }

    /// Like [`ToolSummary::from_findings`], but refuses findings whose tool
    /// differs from the first one.
    pub fn from_findings_checked(findings: &[Finding]) -> Result<Self, AggregateError> {
        if let Some(first) = findings.first() {
            if let Some(foreign) = findings.iter().find(|f| f.tool != first.tool) {
                return Err(AggregateError::MixedTools {
                    expected: first.tool.clone(),
                    found: foreign.tool.clone(),
                });
            }
        }
        Ok(Self::from_findings(findings))
    }

    /// Total number of violations across all files
    pub fn total(&self) -> usize {
        self.file_summaries.iter().map(FileSummary::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.file_summaries.is_empty()
    }
}

/// Treat an explicit `null` like a missing value. Older summaries write
/// empty lists as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
