//! Enrollment-toggle state machine for one `(user, course)` pair.
//!
//! The bookmark button flips optimistically, but an unguarded boolean flip
//! loses track of what to restore when the remote call fails and lets rapid
//! clicks race each other. [`SaveState`] makes both explicit: a toggle moves
//! the state to `Pending` (remembering what it was), further toggles are
//! refused until the in-flight call settles, and the settle is either
//! [`complete`](SaveState::complete) or [`rollback`](SaveState::rollback).

/// Saved/unsaved membership state for one `(user, course)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Unsaved,
    /// A remote call is in flight. `was_saved` is the state to restore if it
    /// fails.
    Pending { was_saved: bool },
    Saved,
}

/// The remote operation a toggle decided on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIntent {
    Save,
    Unsave,
}

impl SaveState {
    /// State as reported by a membership query.
    pub fn from_membership(saved: bool) -> Self {
        if saved {
            SaveState::Saved
        } else {
            SaveState::Unsaved
        }
    }

    /// Whether the bookmark renders as saved. `Pending` reports the
    /// optimistic (post-toggle) value.
    pub fn is_saved(&self) -> bool {
        match *self {
            SaveState::Saved => true,
            SaveState::Unsaved => false,
            SaveState::Pending { was_saved } => !was_saved,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SaveState::Pending { .. })
    }

    /// Start a toggle, flipping the visible state optimistically.
    ///
    /// Returns the remote operation to perform, or `None` while another
    /// toggle for this pair is still in flight — toggles are serialized per
    /// pair.
    pub fn begin_toggle(&mut self) -> Option<ToggleIntent> {
        match *self {
            SaveState::Unsaved => {
                *self = SaveState::Pending { was_saved: false };
                Some(ToggleIntent::Save)
            }
            SaveState::Saved => {
                *self = SaveState::Pending { was_saved: true };
                Some(ToggleIntent::Unsave)
            }
            SaveState::Pending { .. } => None,
        }
    }

    /// The in-flight remote call succeeded; commit the optimistic state.
    pub fn complete(&mut self) {
        if let SaveState::Pending { was_saved } = *self {
            *self = SaveState::from_membership(!was_saved);
        }
    }

    /// The in-flight remote call failed; restore the pre-toggle state.
    pub fn rollback(&mut self) {
        if let SaveState::Pending { was_saved } = *self {
            *self = SaveState::from_membership(was_saved);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_unsaved_saves() {
        let mut state = SaveState::Unsaved;

        assert_eq!(state.begin_toggle(), Some(ToggleIntent::Save));
        assert!(state.is_pending());
        assert!(state.is_saved(), "pending toggle shows the optimistic value");

        state.complete();
        assert_eq!(state, SaveState::Saved);
    }

    #[test]
    fn test_toggle_from_saved_unsaves() {
        let mut state = SaveState::Saved;

        assert_eq!(state.begin_toggle(), Some(ToggleIntent::Unsave));
        assert!(!state.is_saved());

        state.complete();
        assert_eq!(state, SaveState::Unsaved);
    }

    #[test]
    fn test_second_toggle_refused_while_pending() {
        let mut state = SaveState::Unsaved;

        assert!(state.begin_toggle().is_some());
        assert_eq!(state.begin_toggle(), None);
        assert_eq!(state.begin_toggle(), None);

        state.complete();
        assert_eq!(state, SaveState::Saved);
    }

    #[test]
    fn test_rollback_restores_pre_toggle_state() {
        let mut state = SaveState::Saved;
        state.begin_toggle();
        state.rollback();
        assert_eq!(state, SaveState::Saved);

        let mut state = SaveState::Unsaved;
        state.begin_toggle();
        state.rollback();
        assert_eq!(state, SaveState::Unsaved);
    }

    #[test]
    fn test_even_number_of_toggles_is_identity() {
        for initial in [SaveState::Unsaved, SaveState::Saved] {
            let mut state = initial;
            for _ in 0..4 {
                assert!(state.begin_toggle().is_some());
                state.complete();
            }
            assert_eq!(state, initial);

            let mut state = initial;
            for _ in 0..3 {
                assert!(state.begin_toggle().is_some());
                state.complete();
            }
            assert_eq!(state.is_saved(), !initial.is_saved());
        }
    }

    #[test]
    fn test_complete_and_rollback_ignore_settled_states() {
        let mut state = SaveState::Saved;
        state.complete();
        assert_eq!(state, SaveState::Saved);
        state.rollback();
        assert_eq!(state, SaveState::Saved);
    }
}
