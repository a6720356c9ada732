use ratatui::style::Modifier;
use ratatui::text::Line;
use serde_json::json;
use toolview_tui::tui::widgets::formatters::{DiffSettings, FormatterRegistry};
use toolview_tui::tui::widgets::{WordDiffOptions, diff_words, format_yaml};
use toolview_tui::{Component, Theme, get_formatter};

fn text(lines: &[Line<'static>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

/// Simulates a host re-rendering the tool call as arguments stream in and the
/// result finally arrives.
#[test]
fn streaming_tool_call_renders_through_every_state() {
    let _ = tracing_subscriber::fmt::try_init();

    let theme = Theme::default();
    let formatter = get_formatter("upsert_system");

    let frames = [
        (json!(null), None),
        (json!({"assistantName": ""}), None),
        (json!({"assistantName": "Helper"}), None),
        (
            json!({"assistantName": "Helper", "mainInstruction": "Answer briefly"}),
            None,
        ),
    ];

    let rendered: Vec<Vec<String>> = frames
        .iter()
        .map(|(args, result)| text(&formatter.detailed(args, *result, 60, &theme)))
        .collect();

    assert_eq!(rendered[0], vec!["Waiting for data..."]);
    assert_eq!(rendered[1], vec!["Waiting for data..."]);
    assert_eq!(rendered[2].last().map(String::as_str), Some("Update failed"));
    assert_eq!(rendered[3].last().map(String::as_str), Some("Update failed"));

    let payload = json!({
        "success": true,
        "assistantName": "Helper",
        "mainInstruction": "Answer briefly",
        "inlineOptionsInstruction": "Offer two options",
        "mainOptionsInstruction": "",
        "old": {
            "assistantName": "Assistant",
            "mainInstruction": "Answer in detail",
            "inlineOptionsInstruction": "Offer two options",
            "mainOptionsInstruction": ""
        }
    })
    .to_string();

    let args = json!({"assistantName": "Helper", "mainInstruction": "Answer briefly"});
    let lines = formatter.detailed(&args, Some(&payload), 60, &theme);

    assert_eq!(
        text(&lines),
        vec![
            "assistantName: AssistantHelper",
            "mainInstruction: Answer in detailbriefly",
            "inlineOptionsInstruction: Offer two options",
            "",
            "✓ Assistant Updated Successfully",
        ]
    );

    let removed: Vec<String> = lines
        .iter()
        .flat_map(|l| l.spans.iter())
        .filter(|s| s.style.add_modifier.contains(Modifier::CROSSED_OUT))
        .map(|s| s.content.to_string())
        .collect();
    assert_eq!(removed, vec!["Assistant", "in detail"]);

    let added: Vec<String> = lines
        .iter()
        .flat_map(|l| l.spans.iter())
        .filter(|s| s.style == theme.style(Component::CodeAddition))
        .map(|s| s.content.to_string())
        .collect();
    assert_eq!(added, vec!["Helper", "briefly"]);
}

#[test]
fn registry_applies_diff_settings() {
    let theme = Theme::default();
    let registry = FormatterRegistry::new(DiffSettings {
        options: WordDiffOptions { ignore_case: false },
        max_lines: Some(1),
    });

    let payload = r#"{"success":true,"assistantName":"bot","old":{"assistantName":"Bot"}}"#;
    let lines = registry.get("upsert_system").detailed(
        &json!({"assistantName": "bot"}),
        Some(payload),
        80,
        &theme,
    );

    assert_eq!(
        text(&lines),
        vec![
            "assistantName: Botbot",
            "... (2 more lines)",
            "",
            "✓ Assistant Updated Successfully",
        ]
    );
}

#[test]
fn normalized_payloads_diff_cleanly() {
    let old = format_yaml(r#"{"assistantName":"Bot","mainInstruction":"Be mean"}"#);
    let new = format_yaml("assistantName: Bot\nmainInstruction: BE MEAN\n");

    let segments = diff_words(&old, &new, WordDiffOptions::default());

    assert_eq!(segments.len(), 1);
    assert!(!segments[0].added && !segments[0].removed);
    assert_eq!(segments[0].value, new);
}
