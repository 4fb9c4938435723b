use crate::{state::render_state::RenderState, timeline::events::TimelineEvent};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Independently owned state after one timeline event.
pub struct StateSnapshot {
    /// Zero-based index of `event` in the timeline.
    pub event_index: usize,
    /// The event that produced `state`.
    pub event: TimelineEvent,
    /// State after applying `event`.
    pub state: RenderState,
}

/// Replay `events` from the empty state, producing one snapshot per event.
#[tracing::instrument(skip(events), fields(events = events.len()))]
pub fn simulate_timeline(events: &[TimelineEvent]) -> Vec<StateSnapshot> {
    let mut state = RenderState::default();
    let mut snapshots = Vec::with_capacity(events.len());

    for (event_index, event) in events.iter().enumerate() {
        state.apply_in_place(event);
        snapshots.push(StateSnapshot {
            event_index,
            event: event.clone(),
            state: state.clone(),
        });
    }

    snapshots
}

#[cfg(test)]
#[path = "../../tests/unit/state/simulator.rs"]
mod tests;
