//! Diffing two summaries of the same tool.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CompareError;
use crate::report::finding::Severity;
use crate::report::summary::{FileSummary, RuleSummary, ToolSummary};

/// Result of comparing a `before` summary against an `after` summary.
///
/// Files present on both sides with no net change appear in neither
/// `improved_files` nor `worsened_files`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub improved_files: Vec<FileComparison>,
    pub worsened_files: Vec<FileComparison>,
    pub new_files: Vec<String>,
    pub removed_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileComparison {
    pub file: String,
    pub improved_rules: Vec<RuleComparison>,
    pub worsened_rules: Vec<RuleComparison>,
    pub new_rules: Vec<String>,
    pub removed_rules: Vec<String>,
    pub total_before: usize,
    pub total_after: usize,
    pub net_change: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleComparison {
    pub rule_id: String,
    pub count_before: usize,
    pub count_after: usize,
    pub change: i64,
    pub severity: Severity,
}

fn delta(before: usize, after: usize) -> i64 {
    after as i64 - before as i64
}

impl ToolSummary {
    /// Compare `self` (before) with `after`.
    ///
    /// Files and rules are matched by exact path and rule id. The only
    /// failure is a tool name mismatch.
    pub fn compare(&self, after: &ToolSummary) -> Result<ComparisonResult, CompareError> {
        if self.tool != after.tool {
            return Err(CompareError::ToolMismatch {
                before: self.tool.clone(),
                after: after.tool.clone(),
            });
        }

        let before_files = index_files(&self.file_summaries);
        let after_files = index_files(&after.file_summaries);

        let mut result = ComparisonResult::default();

        for (path, before_file) in &before_files {
            match after_files.get(path) {
                Some(after_file) => {
                    let comparison = FileComparison::between(before_file, after_file);
                    if comparison.net_change < 0 {
                        result.improved_files.push(comparison);
                    } else if comparison.net_change > 0 {
                        result.worsened_files.push(comparison);
                    }
                }
                None => result.removed_files.push(path.to_string()),
            }
        }

        result.new_files = after_files
            .keys()
            .filter(|path| !before_files.contains_key(*path))
            .map(|path| path.to_string())
            .collect();

        Ok(result)
    }
}

impl FileComparison {
    fn between(before: &FileSummary, after: &FileSummary) -> Self {
        let before_rules = index_rules(&before.rule_summaries);
        let after_rules = index_rules(&after.rule_summaries);

        let total_before = before.total();
        let total_after = after.total();

        let mut comparison = FileComparison {
            file: before.file.clone(),
            improved_rules: Vec::new(),
            worsened_rules: Vec::new(),
            new_rules: Vec::new(),
            removed_rules: Vec::new(),
            total_before,
            total_after,
            net_change: delta(total_before, total_after),
        };

        for (rule_id, before_rule) in &before_rules {
            let Some(after_rule) = after_rules.get(rule_id) else {
                comparison.removed_rules.push(rule_id.to_string());
                continue;
            };

            let rule = RuleComparison {
                rule_id: rule_id.to_string(),
                count_before: before_rule.count,
                count_after: after_rule.count,
                change: delta(before_rule.count, after_rule.count),
                severity: Severity::escalate(before_rule.severity, after_rule.severity),
            };
            if rule.change < 0 {
                comparison.improved_rules.push(rule);
            } else if rule.change > 0 {
                comparison.worsened_rules.push(rule);
            }
        }

        comparison.new_rules = after_rules
            .keys()
            .filter(|rule_id| !before_rules.contains_key(*rule_id))
            .map(|rule_id| rule_id.to_string())
            .collect();

        comparison
    }
}

impl ComparisonResult {
    /// Any file got worse
    pub fn has_regressions(&self) -> bool {
        !self.worsened_files.is_empty()
    }

    /// Any worsened rule carries ERROR severity
    pub fn has_error_regressions(&self) -> bool {
        self.worsened_files
            .iter()
            .flat_map(|f| &f.worsened_rules)
            .any(|r| r.severity == Severity::Error)
    }

    /// Whether a CI gate should fail. With `ignore_warnings`, only
    /// ERROR-level rule regressions count.
    pub fn should_fail(&self, ignore_warnings: bool) -> bool {
        if ignore_warnings {
            self.has_error_regressions()
        } else {
            self.has_regressions()
        }
    }
}

// Last entry wins when a malformed summary lists a key twice.
fn index_files(files: &[FileSummary]) -> BTreeMap<&str, &FileSummary> {
    files.iter().map(|f| (f.file.as_str(), f)).collect()
}

fn index_rules(rules: &[RuleSummary]) -> BTreeMap<&str, &RuleSummary> {
    rules.iter().map(|r| (r.rule_id.as_str(), r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(rule_id: &str, count: usize, severity: Severity) -> RuleSummary {
        RuleSummary {
            rule_id: rule_id.to_string(),
            description: String::new(),
            severity,
            count,
            violations: Vec::new(),
        }
    }

    fn file(path: &str, rules: Vec<RuleSummary>) -> FileSummary {
        FileSummary {
            file: path.to_string(),
            rule_summaries: rules,
        }
    }

    fn summary(tool: &str, files: Vec<FileSummary>) -> ToolSummary {
        ToolSummary {
            tool: tool.to_string(),
            file_summaries: files,
        }
    }

    #[test]
    fn test_improved_file() {
        let before = summary("eslint", vec![file("a.ts", vec![rule("R1", 5, Severity::Error)])]);
        let after = summary("eslint", vec![file("a.ts", vec![rule("R1", 3, Severity::Error)])]);

        let result = before.compare(&after).unwrap();
        assert!(result.worsened_files.is_empty());
        assert_eq!(result.improved_files.len(), 1);

        let a = &result.improved_files[0];
        assert_eq!(a.file, "a.ts");
        assert_eq!(a.net_change, -2);
        assert_eq!(a.total_before, 5);
        assert_eq!(a.total_after, 3);
        assert_eq!(
            a.improved_rules,
            vec![RuleComparison {
                rule_id: "R1".to_string(),
                count_before: 5,
                count_after: 3,
                change: -2,
                severity: Severity::Error,
            }]
        );
    }

    #[test]
    fn test_worsened_rule_escalates_severity() {
        let before = summary("eslint", vec![file("a.ts", vec![rule("R1", 1, Severity::Warning)])]);
        let after = summary("eslint", vec![file("a.ts", vec![rule("R1", 2, Severity::Error)])]);

        let result = before.compare(&after).unwrap();
        let worsened = &result.worsened_files[0].worsened_rules;
        assert_eq!(worsened.len(), 1);
        assert_eq!(worsened[0].rule_id, "R1");
        assert_eq!(worsened[0].change, 1);
        assert_eq!(worsened[0].severity, Severity::Error);
    }

    #[test]
    fn test_error_not_downgraded() {
        let before = summary("eslint", vec![file("a.ts", vec![rule("R1", 1, Severity::Error)])]);
        let after = summary("eslint", vec![file("a.ts", vec![rule("R1", 4, Severity::Warning)])]);

        let result = before.compare(&after).unwrap();
        assert_eq!(result.worsened_files[0].worsened_rules[0].severity, Severity::Error);
    }

    #[test]
    fn test_new_and_removed_files() {
        let before = summary(
            "eslint",
            vec![
                file("a.ts", vec![rule("R1", 1, Severity::Warning)]),
                file("b.ts", vec![rule("R1", 1, Severity::Warning)]),
            ],
        );
        let after = summary(
            "eslint",
            vec![
                file("a.ts", vec![rule("R1", 1, Severity::Warning)]),
                file("c.ts", vec![rule("R1", 1, Severity::Warning)]),
            ],
        );

        let result = before.compare(&after).unwrap();
        assert_eq!(result.removed_files, vec!["b.ts"]);
        assert_eq!(result.new_files, vec!["c.ts"]);
        // a.ts is unchanged and therefore listed nowhere
        assert!(result.improved_files.is_empty());
        assert!(result.worsened_files.is_empty());
    }

    #[test]
    fn test_tool_mismatch() {
        let before = summary("eslint", vec![]);
        let after = summary("tsc", vec![]);

        assert_eq!(
            before.compare(&after),
            Err(CompareError::ToolMismatch {
                before: "eslint".to_string(),
                after: "tsc".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_summaries_compare_clean() {
        let result = ToolSummary::default().compare(&ToolSummary::default()).unwrap();
        assert_eq!(result, ComparisonResult::default());
    }

    #[test]
    fn test_new_and_removed_rules_drive_net_change() {
        let before = summary(
            "tsc",
            vec![file(
                "a.ts",
                vec![rule("TS1", 2, Severity::Error), rule("TS2", 3, Severity::Error)],
            )],
        );
        let after = summary(
            "tsc",
            vec![file(
                "a.ts",
                vec![rule("TS1", 2, Severity::Error), rule("TS3", 4, Severity::Warning)],
            )],
        );

        let result = before.compare(&after).unwrap();
        let a = &result.worsened_files[0];
        assert_eq!(a.removed_rules, vec!["TS2"]);
        assert_eq!(a.new_rules, vec!["TS3"]);
        // TS1 unchanged: listed in neither rule list
        assert!(a.improved_rules.is_empty());
        assert!(a.worsened_rules.is_empty());
        assert_eq!(a.net_change, 1);
    }

    #[test]
    fn test_mixed_rule_changes_with_zero_net() {
        let before = summary(
            "tsc",
            vec![file(
                "a.ts",
                vec![rule("TS1", 3, Severity::Error), rule("TS2", 1, Severity::Warning)],
            )],
        );
        let after = summary(
            "tsc",
            vec![file(
                "a.ts",
                vec![rule("TS1", 1, Severity::Error), rule("TS2", 3, Severity::Warning)],
            )],
        );

        // Rule-level movement is hidden when the file nets to zero.
        let result = before.compare(&after).unwrap();
        assert!(result.improved_files.is_empty());
        assert!(result.worsened_files.is_empty());
    }

    #[test]
    fn test_outputs_are_sorted() {
        let before = summary(
            "eslint",
            vec![
                file("z.ts", vec![rule("r", 2, Severity::Warning)]),
                file("a.ts", vec![rule("r", 2, Severity::Warning)]),
                file("gone-2.ts", vec![]),
                file("gone-1.ts", vec![]),
            ],
        );
        let after = summary(
            "eslint",
            vec![
                file("new-b.ts", vec![]),
                file("z.ts", vec![rule("r", 1, Severity::Warning)]),
                file("new-a.ts", vec![]),
                file("a.ts", vec![rule("r", 1, Severity::Warning)]),
            ],
        );

        let result = before.compare(&after).unwrap();
        let improved: Vec<_> = result.improved_files.iter().map(|f| f.file.as_str()).collect();
        assert_eq!(improved, ["a.ts", "z.ts"]);
        assert_eq!(result.removed_files, ["gone-1.ts", "gone-2.ts"]);
        assert_eq!(result.new_files, ["new-a.ts", "new-b.ts"]);
    }

    #[test]
    fn test_should_fail_gate() {
        let before = summary(
            "eslint",
            vec![file(
                "a.ts",
                vec![rule("warn", 1, Severity::Warning), rule("err", 1, Severity::Error)],
            )],
        );
        let warn_only = summary(
            "eslint",
            vec![file(
                "a.ts",
                vec![rule("warn", 3, Severity::Warning), rule("err", 1, Severity::Error)],
            )],
        );
        let with_error = summary(
            "eslint",
            vec![file(
                "a.ts",
                vec![rule("warn", 1, Severity::Warning), rule("err", 2, Severity::Error)],
            )],
        );

        let result = before.compare(&warn_only).unwrap();
        assert!(result.should_fail(false));
        assert!(!result.should_fail(true));

        let result = before.compare(&with_error).unwrap();
        assert!(result.should_fail(false));
        assert!(result.should_fail(true));

        let result = before.compare(&before).unwrap();
        assert!(!result.should_fail(false));
    }

    #[test]
    fn test_serialized_shape() {
        let before = summary("tsc", vec![file("a.ts", vec![rule("TS1", 1, Severity::Warning)])]);
        let after = summary("tsc", vec![file("a.ts", vec![rule("TS1", 2, Severity::Warning)])]);

        let json = serde_json::to_value(before.compare(&after).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "improved_files": [],
                "worsened_files": [{
                    "file": "a.ts",
                    "improved_rules": [],
                    "worsened_rules": [{
                        "rule_id": "TS1",
                        "count_before": 1,
                        "count_after": 2,
                        "change": 1,
                        "severity": "WARNING"
                    }],
                    "new_rules": [],
                    "removed_rules": [],
                    "total_before": 1,
                    "total_after": 2,
                    "net_change": 1
                }],
                "new_files": [],
                "removed_files": []
            })
        );
    }
}
