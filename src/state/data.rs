// Data tab state management.
// Holds the server-computed snapshot together with the client-measured round
// trip, and resets it when the cache is cleared.

use std::time::Duration;

use ratatui::widgets::ListState;

use crate::api::DataSnapshot;

use super::todos::LoadingState;

/// A fetched snapshot paired with the client-measured round-trip duration.
#[derive(Debug, Clone)]
pub struct SnapshotView {
    pub snapshot: DataSnapshot,
    pub round_trip: Duration,
}

/// Complete state for the Data tab.
#[derive(Debug, Default)]
pub struct DataTabState {
    /// Snapshot lifecycle: idle until the tab is first activated.
    pub snapshot: LoadingState<SnapshotView>,
    /// Selection within the snapshot's item list.
    pub list_state: ListState,
}

impl DataTabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&SnapshotView> {
        self.snapshot.data()
    }

    pub fn set_loading(&mut self) {
        self.snapshot = LoadingState::Loading;
    }

    pub fn set_loaded(&mut self, snapshot: DataSnapshot, round_trip: Duration) {
        self.snapshot = LoadingState::Loaded(SnapshotView {
            snapshot,
            round_trip,
        });
        self.reset_selection();
    }

    pub fn set_error(&mut self, error: String) {
        self.snapshot = LoadingState::Error(error);
        self.list_state.select(None);
    }

    /// Drop the displayed snapshot after a confirmed cache clear. The next
    /// activation fetches a fresh one.
    pub fn reset(&mut self) {
        self.snapshot = LoadingState::Idle;
        self.list_state.select(None);
    }

    pub fn select_next(&mut self) {
        if let Some(view) = self.snapshot.data() {
            let len = view.snapshot.todos.len();
            if len == 0 {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => {
                    if i >= len - 1 {
                        i
                    } else {
                        i + 1
                    }
                }
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(view) = self.snapshot.data() {
            if view.snapshot.todos.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => i.saturating_sub(1),
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    fn reset_selection(&mut self) {
        match self.snapshot.data() {
            Some(view) if !view.snapshot.todos.is_empty() => self.list_state.select(Some(0)),
            _ => self.list_state.select(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Stats;
    use chrono::Utc;

    fn snapshot(from_cache: bool) -> DataSnapshot {
        DataSnapshot {
            todos: Vec::new(),
            stats: Stats {
                total: 0,
                completed: 0,
                pending: 0,
                completion_rate: 0.0,
            },
            generated_at: Utc::now(),
            from_cache,
            load_time: 3.2,
        }
    }

    #[test]
    fn clear_resets_to_idle() {
        let mut state = DataTabState::new();
        state.set_loading();
        state.set_loaded(snapshot(true), Duration::from_millis(40));
        assert!(state.snapshot.is_loaded());

        state.reset();
        assert!(matches!(state.snapshot, LoadingState::Idle));
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn error_clears_loading_flag() {
        let mut state = DataTabState::new();
        state.set_loading();
        assert!(state.snapshot.is_loading());

        state.set_error("HTTP 503: unavailable".to_string());
        assert!(!state.snapshot.is_loading());
    }

    #[test]
    fn loaded_keeps_round_trip() {
        let mut state = DataTabState::new();
        state.set_loaded(snapshot(false), Duration::from_millis(120));

        let view = state.view().unwrap();
        assert!(!view.snapshot.from_cache);
        assert_eq!(view.round_trip, Duration::from_millis(120));
    }
}
