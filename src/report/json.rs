use anyhow::Result;
use serde::Serialize;

/// Render a summary or comparison as pretty-printed JSON
pub fn render<T: Serialize>(document: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ToolSummary;

    #[test]
    fn test_render_empty_summary() {
        let output = render(&ToolSummary::default()).unwrap();
        assert_eq!(output, "{\n  \"tool\": \"\",\n  \"file_summaries\": []\n}");
    }
}
