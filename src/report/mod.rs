pub mod compare;
pub mod finding;
pub mod json;
pub mod summary;
pub mod terminal;

pub use compare::{ComparisonResult, FileComparison, RuleComparison};
pub use finding::{Finding, Severity, Violation};
pub use summary::{FileSummary, RuleSummary, ToolSummary};
