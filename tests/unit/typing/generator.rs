use super::*;
use crate::state::simulator::simulate_timeline;

fn switch(filename: &str) -> TimelineEvent {
    TimelineEvent::SwitchFile {
        filename: filename.to_string(),
        language: "ts".to_string(),
        highlight_lines: None,
    }
}

fn insert(filename: &str, content: &str, highlights: Option<Vec<u32>>) -> TimelineEvent {
    TimelineEvent::InsertText {
        filename: filename.to_string(),
        content: content.to_string(),
        highlight_lines: highlights,
    }
}

fn typed(events: &[TypingEvent]) -> String {
    events.iter().filter_map(TypingEvent::typed_char).collect()
}

#[test]
fn switch_events_carry_post_event_highlights() {
    let snapshots = simulate_timeline(&[switch("f")]);
    let events = generate_typing_events(&snapshots).unwrap();
    assert_eq!(
        events,
        vec![TypingEvent::SwitchFile {
            filename: "f".to_string(),
            language: "ts".to_string(),
            highlight_lines: Some(vec![]),
        }]
    );
}

#[test]
fn first_reveal_types_every_character_in_order() {
    let snapshots = simulate_timeline(&[switch("f"), insert("f", "héllo", Some(vec![1]))]);
    let events = generate_typing_events(&snapshots).unwrap();
    assert_eq!(events.len(), 1 + "héllo".chars().count());
    assert_eq!(typed(&events), "héllo");
    assert!(
        events[1..]
            .iter()
            .all(|e| e.filename() == "f" && e.highlight_lines() == Some(&[1][..]))
    );
}

#[test]
fn untracked_file_materializes_on_first_non_empty_content() {
    let snapshots = simulate_timeline(&[insert("g", "ab", None)]);
    let events = generate_typing_events(&snapshots).unwrap();
    assert_eq!(typed(&events), "ab");
    assert!(events.iter().all(|e| e.filename() == "g"));
}

#[test]
fn incremental_growth_types_only_the_suffix() {
    let snapshots = simulate_timeline(&[
        switch("f"),
        insert("f", "ab", None),
        insert("f", "ab\nc", None),
    ]);
    let events = generate_typing_events(&snapshots).unwrap();
    assert_eq!(typed(&events), "ab\nc");
    assert_eq!(events.len(), 1 + 4);
}

#[test]
fn non_linear_fallback_is_typed_after_the_separator() {
    let snapshots = simulate_timeline(&[
        switch("f"),
        insert("f", "ab", None),
        insert("f", "xyz", None),
    ]);
    let events = generate_typing_events(&snapshots).unwrap();
    assert_eq!(typed(&events), "ab\nxyz");
}

#[test]
fn content_that_does_not_grow_emits_nothing() {
    let mut snapshots = simulate_timeline(&[
        switch("f"),
        insert("f", "abc", None),
        insert("f", "x", None),
    ]);
    // Force a shrink by rewriting the last snapshot's text.
    snapshots[2].state.files.insert("f".to_string(), "ab".to_string());
    let events = generate_typing_events(&snapshots).unwrap();
    assert_eq!(typed(&events), "abc");
}

#[test]
fn growth_that_rewrites_earlier_text_is_a_non_linear_edit() {
    let mut snapshots = simulate_timeline(&[
        switch("f"),
        insert("f", "ab", None),
        insert("f", "abc", None),
    ]);
    snapshots[2].state.files.insert("f".to_string(), "zzzz".to_string());
    let err = generate_typing_events(&snapshots).unwrap_err();
    assert!(matches!(
        err,
        crate::CodecastError::NonLinearEdit {
            previous_len: 2,
            next_len: 4
        }
    ));
}

#[test]
fn typing_events_serialize_char_field() {
    let event = TypingEvent::TypeChar {
        filename: "f".to_string(),
        ch: 'x',
        highlight_lines: None,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "type-char");
    assert_eq!(json["char"], "x");
    let back: TypingEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
