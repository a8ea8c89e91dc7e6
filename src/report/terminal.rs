use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::report::compare::{ComparisonResult, FileComparison, RuleComparison};
use crate::report::finding::Severity;
use crate::report::summary::ToolSummary;

/// Render a tool summary to the terminal with colors
pub fn render_summary(summary: &ToolSummary) {
    println!();
    if summary.is_empty() {
        println!("  {}  No findings", "✅".bold());
        println!();
        return;
    }

    println!(
        "  {}  {} — {} findings in {} files",
        "📋".bold(),
        summary.tool.bold(),
        summary.total().to_string().bold(),
        summary.file_summaries.len()
    );
    println!();

    for file in &summary.file_summaries {
        println!("  {} ({})", file.file.bold(), file.total().to_string().dimmed());
        for rule in &file.rule_summaries {
            println!(
                "     {}  {} × {}",
                severity_badge(rule.severity),
                rule.count,
                rule.rule_id
            );
        }
        println!();
    }
}

/// Render a comparison to the terminal with colors
pub fn render_comparison(result: &ComparisonResult) {
    println!();

    if result.worsened_files.is_empty() {
        println!("  {}  No regressions", "✅".bold());
    } else {
        println!(
            "  {}  {} files worsened",
            "❌".bold(),
            result.worsened_files.len().to_string().red().bold()
        );
        for file in &result.worsened_files {
            render_file(file);
        }
    }

    if !result.improved_files.is_empty() {
        println!();
        println!(
            "  {}  {} files improved",
            "📉".bold(),
            result.improved_files.len().to_string().green().bold()
        );
        for file in &result.improved_files {
            render_file(file);
        }
    }

    render_paths("New files", &result.new_files);
    render_paths("Removed files", &result.removed_files);

    println!("{}", "━".repeat(60));
    println!(
        " {} worsened, {} improved, {} new, {} removed",
        result.worsened_files.len(),
        result.improved_files.len(),
        result.new_files.len(),
        result.removed_files.len()
    );
    println!("{}", "━".repeat(60));
    println!();
}

fn render_file(file: &FileComparison) {
    let net = format!("{:+}", file.net_change);
    let net = if file.net_change > 0 {
        net.red().bold().to_string()
    } else {
        net.green().bold().to_string()
    };
    println!();
    println!(
        "  {}  {} → {} ({})",
        file.file.bold(),
        file.total_before,
        file.total_after,
        net
    );

    if !file.worsened_rules.is_empty() || !file.improved_rules.is_empty() {
        println!("{}", rule_table(file));
    }
    if !file.new_rules.is_empty() {
        println!("     new rules: {}", file.new_rules.join(", ").yellow());
    }
    if !file.removed_rules.is_empty() {
        println!("     removed rules: {}", file.removed_rules.join(", ").dimmed());
    }
}

fn render_paths(title: &str, paths: &[String]) {
    if paths.is_empty() {
        return;
    }
    println!();
    println!("  {} ({})", title.bold(), paths.len());
    for path in paths {
        println!("     {}", path.dimmed());
    }
}

/// Worsened then improved rules of one file
pub fn rule_table(file: &FileComparison) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rule", "Severity", "Before", "After", "Change"]);

    for rule in file.worsened_rules.iter().chain(&file.improved_rules) {
        table.add_row(rule_row(rule));
    }
    table
}

fn rule_row(rule: &RuleComparison) -> Vec<Cell> {
    let change_color = if rule.change > 0 { Color::Red } else { Color::Green };
    let severity_color = match rule.severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    vec![
        Cell::new(&rule.rule_id),
        Cell::new(rule.severity).fg(severity_color),
        Cell::new(rule.count_before),
        Cell::new(rule.count_after),
        Cell::new(format!("{:+}", rule.change)).fg(change_color),
    ]
}

fn severity_badge(severity: Severity) -> String {
    let display = format!(" {} ", severity);
    match severity {
        Severity::Error => display.on_red().white().bold().to_string(),
        Severity::Warning => display.on_yellow().black().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_lists_rules() {
        let file = FileComparison {
            file: "a.ts".to_string(),
            improved_rules: vec![RuleComparison {
                rule_id: "no-console".to_string(),
                count_before: 4,
                count_after: 1,
                change: -3,
                severity: Severity::Warning,
            }],
            worsened_rules: vec![RuleComparison {
                rule_id: "eqeqeq".to_string(),
                count_before: 0,
                count_after: 2,
                change: 2,
                severity: Severity::Error,
            }],
            new_rules: Vec::new(),
            removed_rules: Vec::new(),
            total_before: 4,
            total_after: 3,
            net_change: -1,
        };

        let rendered = rule_table(&file).to_string();
        assert!(rendered.contains("eqeqeq"));
        assert!(rendered.contains("no-console"));
        assert!(rendered.contains("+2"));
        assert!(rendered.contains("-3"));
        assert!(rendered.find("eqeqeq") < rendered.find("no-console"));
    }
}
