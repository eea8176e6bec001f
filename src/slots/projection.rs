use super::types::{DisplaySlot, PlayerState};

/// Reorders raw server slots for display: most recently suspended first.
///
/// Each element keeps its zero-based index in the input array as
/// `slot_number`. The sort is stable, so slots with equal timestamps keep
/// their server-side relative order. Server state is untouched; this only
/// affects presentation.
#[must_use]
pub fn project_display_order(states: Vec<PlayerState>) -> Vec<DisplaySlot> {
    let mut slots: Vec<DisplaySlot> = states
        .into_iter()
        .enumerate()
        .map(|(slot_number, state)| DisplaySlot { slot_number, state })
        .collect();
    slots.sort_by(|left, right| right.state.suspended_at_ts.cmp(&left.state.suspended_at_ts));
    slots
}
