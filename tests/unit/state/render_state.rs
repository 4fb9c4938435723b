use super::*;

fn switch(filename: &str, highlights: Option<Vec<u32>>) -> TimelineEvent {
    TimelineEvent::SwitchFile {
        filename: filename.to_string(),
        language: "ts".to_string(),
        highlight_lines: highlights,
    }
}

fn insert(filename: &str, content: &str, highlights: Option<Vec<u32>>) -> TimelineEvent {
    TimelineEvent::InsertText {
        filename: filename.to_string(),
        content: content.to_string(),
        highlight_lines: highlights,
    }
}

#[test]
fn switch_introduces_file_without_overwriting_content() {
    let s0 = RenderState::default();
    let s1 = apply_event(&s0, &switch("f", None));
    assert_eq!(s1.active_file.as_deref(), Some("f"));
    assert_eq!(s1.file("f"), Some(""));
    assert_eq!(s1.languages["f"], "ts");
    assert_eq!(s1.highlight_lines["f"], Vec::<u32>::new());

    let s2 = apply_event(&s1, &insert("f", "abc", None));
    let s3 = apply_event(&s2, &switch("f", None));
    assert_eq!(s3.file("f"), Some("abc"));
}

#[test]
fn switch_keeps_prior_highlights_unless_given() {
    let s = apply_event(&RenderState::default(), &insert("f", "a", Some(vec![1])));
    let kept = apply_event(&s, &switch("f", None));
    assert_eq!(kept.highlight_lines["f"], vec![1]);
    let replaced = apply_event(&s, &switch("f", Some(vec![2, 3])));
    assert_eq!(replaced.highlight_lines["f"], vec![2, 3]);
}

#[test]
fn insert_extending_current_text_replaces_it() {
    let s = apply_event(&RenderState::default(), &insert("f", "ab", None));
    let s = apply_event(&s, &insert("f", "abc", None));
    assert_eq!(s.file("f"), Some("abc"));
}

#[test]
fn insert_of_a_suffix_appends_on_a_new_line() {
    let s = apply_event(&RenderState::default(), &insert("f", "ab", None));
    let s = apply_event(&s, &insert("f", "c", None));
    assert_eq!(s.file("f"), Some("ab\nc"));
}

#[test]
fn insert_after_trailing_newline_does_not_add_another() {
    let s = apply_event(&RenderState::default(), &insert("f", "ab\n", None));
    let s = apply_event(&s, &insert("f", "c", None));
    assert_eq!(s.file("f"), Some("ab\nc"));
}

#[test]
fn non_linear_snapshot_is_appended_not_replaced() {
    let s = apply_event(&RenderState::default(), &insert("f", "ab", None));
    let s = apply_event(&s, &insert("f", "xyz", None));
    assert_eq!(s.file("f"), Some("ab\nxyz"));
}

#[test]
fn insert_highlights_replace_or_clear() {
    let s = apply_event(&RenderState::default(), &insert("f", "a", Some(vec![1])));
    assert_eq!(s.highlight_lines["f"], vec![1]);
    let s = apply_event(&s, &insert("f", "ab", None));
    assert!(s.highlight_lines["f"].is_empty());
}

#[test]
fn insert_does_not_change_active_file() {
    let s = apply_event(&RenderState::default(), &switch("a", None));
    let s = apply_event(&s, &insert("b", "x", None));
    assert_eq!(s.active_file.as_deref(), Some("a"));
    assert_eq!(s.file("b"), Some("x"));
}

#[test]
fn apply_leaves_input_state_untouched() {
    let s0 = apply_event(&RenderState::default(), &insert("f", "a", None));
    let before = s0.clone();
    let _ = apply_event(&s0, &insert("f", "ab", None));
    assert_eq!(s0, before);
}
