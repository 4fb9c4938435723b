use super::*;

fn timeline() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent::SwitchFile {
            filename: "f".to_string(),
            language: "ts".to_string(),
            highlight_lines: None,
        },
        TimelineEvent::InsertText {
            filename: "f".to_string(),
            content: "ab".to_string(),
            highlight_lines: None,
        },
        TimelineEvent::InsertText {
            filename: "f".to_string(),
            content: "c".to_string(),
            highlight_lines: Some(vec![1]),
        },
    ]
}

#[test]
fn one_snapshot_per_event_with_indices() {
    let events = timeline();
    let snapshots = simulate_timeline(&events);
    assert_eq!(snapshots.len(), events.len());
    for (i, snap) in snapshots.iter().enumerate() {
        assert_eq!(snap.event_index, i);
        assert_eq!(snap.event, events[i]);
    }
}

#[test]
fn snapshots_capture_state_at_each_step() {
    let snapshots = simulate_timeline(&timeline());
    assert_eq!(snapshots[0].state.file("f"), Some(""));
    assert_eq!(snapshots[1].state.file("f"), Some("ab"));
    assert_eq!(snapshots[2].state.file("f"), Some("ab\nc"));
    assert_eq!(snapshots[2].state.highlight_lines["f"], vec![1]);
    assert!(snapshots[1].state.highlight_lines["f"].is_empty());
}

#[test]
fn snapshots_match_a_pure_fold() {
    let events = timeline();
    let snapshots = simulate_timeline(&events);
    let mut state = RenderState::default();
    for (event, snap) in events.iter().zip(&snapshots) {
        state = crate::state::render_state::apply_event(&state, event);
        assert_eq!(snap.state, state);
    }
}

#[test]
fn empty_timeline_has_no_snapshots() {
    assert!(simulate_timeline(&[]).is_empty());
}
