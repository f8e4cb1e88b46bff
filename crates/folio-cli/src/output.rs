use std::fmt::Write as _;

use folio_core::TreeItem;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            flatten("", &serde_json::to_value(value)?, &mut lines);
            Ok(lines.join("\n"))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Indented outline of a section tree; the selected section is starred.
pub fn render_outline(items: &[TreeItem], selected: &str) -> String {
    let mut out = String::new();
    let mut stack: Vec<(&TreeItem, usize)> = items.iter().rev().map(|item| (item, 0)).collect();
    while let Some((item, depth)) = stack.pop() {
        let marker = if item.key == selected { '*' } else { '-' };
        let _ = writeln!(out, "{}{marker} {} [{}]", "  ".repeat(depth), item.name, item.key);
        for child in item.children.iter().flatten().rev() {
            stack.push((child, depth + 1));
        }
    }
    out
}

/// `key.path: value` lines for every scalar in `value`.
fn flatten(prefix: &str, value: &Value, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, child) in entries {
                flatten(&join(prefix, key), child, lines);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                flatten(&join(prefix, &index.to_string()), child, lines);
            }
        }
        Value::String(s) => lines.push(format!("{prefix}: {s}")),
        other => lines.push(format!("{prefix}: {other}")),
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{SectionTreeNode, generate_section_tree};
    use pretty_assertions::assert_eq;

    #[test]
    fn text_format_flattens_nested_values() {
        let value = serde_json::json!({
            "current": { "title": "Intro", "entity_list": [] },
            "outcome": { "status": "selected", "section_id": "s1" }
        });
        let rendered = render(&value, OutputFormat::Text).unwrap();
        assert_eq!(
            rendered,
            "current.entity_list: []\ncurrent.title: Intro\noutcome.section_id: s1\noutcome.status: selected"
        );
    }

    #[test]
    fn outline_marks_selection_and_indents_children() {
        let items = generate_section_tree(&[
            SectionTreeNode::leaf("s1", "Intro"),
            SectionTreeNode::branch("s2", "Body", vec![SectionTreeNode::leaf("s2a", "Sub")]),
        ]);
        assert_eq!(
            render_outline(&items, "s2a"),
            "- Intro [s1]\n- Body [s2]\n  * Sub [s2a]\n"
        );
    }
}
