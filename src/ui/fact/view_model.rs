//! Owner of the fact history and the current screen state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;

use crate::config::Config;
use crate::fact::FactError;
use crate::history::{BoundedHistoryStack, HistoryError};
use crate::palette::{random_emoji, random_exclamation, random_gradient};
use crate::ui::mvi::Reducer;

use super::intent::FactIntent;
use super::reducer::FactReducer;
use super::state::{FactEntry, FactViewState};

/// Drives the fact screen.
///
/// Every mutation goes through [`FactReducer`]; the resulting snapshot is
/// kept in [`state`](Self::state) and published to subscribers. The
/// random source is injected so decoration is reproducible under a seed.
pub struct FactViewModel<R> {
    state: FactViewState,
    history: BoundedHistoryStack<FactEntry>,
    max_color_distance: usize,
    rng: R,
    publisher: watch::Sender<FactViewState>,
}

impl FactViewModel<StdRng> {
    /// Build from config, seeding the random source when `seed` is given.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<Self, HistoryError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(
            config.history.capacity,
            config.appearance.max_color_distance,
            rng,
        )
    }
}

impl<R: Rng> FactViewModel<R> {
    pub fn new(
        history_capacity: usize,
        max_color_distance: usize,
        mut rng: R,
    ) -> Result<Self, HistoryError> {
        let history = BoundedHistoryStack::with_capacity(history_capacity)?;
        let state = FactViewState {
            cat_emoji: random_emoji(&mut rng).to_string(),
            background: random_gradient(max_color_distance, &mut rng),
            ..FactViewState::default()
        };
        let (publisher, _) = watch::channel(state.clone());
        Ok(Self {
            state,
            history,
            max_color_distance,
            rng,
            publisher,
        })
    }

    pub fn state(&self) -> &FactViewState {
        &self.state
    }

    /// Receive a snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<FactViewState> {
        self.publisher.subscribe()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Mark a fetch as in flight. Returns false if one already is.
    pub fn begin_fetch(&mut self) -> bool {
        if self.state.is_loading() {
            return false;
        }
        self.dispatch(FactIntent::FetchStarted);
        true
    }

    /// Apply the outcome of a fetch started with [`begin_fetch`](Self::begin_fetch).
    pub fn finish_fetch(&mut self, result: Result<String, FactError>) {
        match result {
            Ok(fact) => {
                let entry = FactEntry {
                    fact,
                    exclamation: random_exclamation(&mut self.rng).to_string(),
                };
                self.history.push(entry.clone());
                tracing::debug!(
                    retained = self.history.len(),
                    capacity = self.history.capacity(),
                    "fact pushed"
                );
                let intent = FactIntent::FetchSucceeded {
                    entry,
                    cat_emoji: random_emoji(&mut self.rng).to_string(),
                    background: random_gradient(self.max_color_distance, &mut self.rng),
                    has_history: self.history.len() > 1,
                };
                self.dispatch(intent);
            }
            Err(err) => {
                tracing::warn!(error = %err, "fact fetch failed");
                let intent = FactIntent::FetchFailed {
                    message: err.user_message().to_string(),
                    restore: self.history.top().cloned(),
                };
                self.dispatch(intent);
            }
        }
    }

    /// Discard the newest fact and show the one before it.
    ///
    /// No-op returning false unless at least two facts are retained.
    pub fn go_back(&mut self) -> bool {
        if self.history.len() <= 1 || self.state.is_loading() {
            return false;
        }
        self.history.pop();
        let Some(entry) = self.history.top().cloned() else {
            return false;
        };
        let has_history = self.history.len() > 1;
        self.dispatch(FactIntent::WentBack { entry, has_history });
        true
    }

    /// Text to share, available once a fact is on screen.
    pub fn share_text(&self) -> Option<String> {
        self.state.current().map(|entry| entry.share_text())
    }

    fn dispatch(&mut self, intent: FactIntent) {
        self.state = FactReducer::reduce(std::mem::take(&mut self.state), intent);
        self.publisher.send_replace(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CAT_EMOJIS, EXCLAMATIONS};
    use crate::ui::fact::state::LoadingState;

    fn model(capacity: usize) -> FactViewModel<StdRng> {
        FactViewModel::new(capacity, 2, StdRng::seed_from_u64(1)).unwrap()
    }

    fn fetch(model: &mut FactViewModel<StdRng>, fact: &str) {
        assert!(model.begin_fetch());
        model.finish_fetch(Ok(fact.to_string()));
    }

    fn shown_fact(model: &FactViewModel<StdRng>) -> Option<String> {
        model.state().current().map(|entry| entry.fact)
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = FactViewModel::new(0, 2, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(HistoryError::ZeroCapacity)));
    }

    #[test]
    fn initial_state_is_decorated_but_empty() {
        let model = model(25);
        let state = model.state();
        assert!(CAT_EMOJIS.contains(&state.cat_emoji.as_str()));
        assert_ne!(state.background.0, state.background.1);
        assert_eq!(state.loading, LoadingState::default());
        assert_eq!(model.share_text(), None);
    }

    #[test]
    fn first_fetch_has_no_history() {
        let mut model = model(25);
        fetch(&mut model, "one");
        assert_eq!(shown_fact(&model).as_deref(), Some("one"));
        assert!(!model.state().has_history);
        assert_eq!(model.history_len(), 1);
    }

    #[test]
    fn second_fetch_enables_history() {
        let mut model = model(25);
        fetch(&mut model, "one");
        fetch(&mut model, "two");
        assert_eq!(shown_fact(&model).as_deref(), Some("two"));
        assert!(model.state().has_history);
    }

    #[test]
    fn go_back_restores_previous_and_disables_at_one() {
        let mut model = model(25);
        fetch(&mut model, "one");
        fetch(&mut model, "two");
        fetch(&mut model, "three");

        assert!(model.go_back());
        assert_eq!(shown_fact(&model).as_deref(), Some("two"));
        assert!(model.state().has_history);

        assert!(model.go_back());
        assert_eq!(shown_fact(&model).as_deref(), Some("one"));
        assert!(!model.state().has_history);

        assert!(!model.go_back());
        assert_eq!(shown_fact(&model).as_deref(), Some("one"));
        assert_eq!(model.history_len(), 1);
    }

    #[test]
    fn go_back_restores_the_original_exclamation() {
        let mut model = model(25);
        fetch(&mut model, "one");
        let first = model.state().current().unwrap();
        fetch(&mut model, "two");
        model.go_back();
        assert_eq!(model.state().current(), Some(first));
    }

    #[test]
    fn history_is_bounded() {
        let mut model = model(3);
        for fact in ["a", "b", "c", "d", "e"] {
            fetch(&mut model, fact);
        }
        assert_eq!(model.history_len(), 3);
        assert!(model.go_back());
        assert!(model.go_back());
        assert_eq!(shown_fact(&model).as_deref(), Some("c"));
        assert!(!model.go_back());
    }

    #[test]
    fn begin_fetch_refuses_while_loading() {
        let mut model = model(25);
        assert!(model.begin_fetch());
        assert!(!model.begin_fetch());
        assert!(model.state().is_loading());
    }

    #[test]
    fn go_back_is_ignored_while_loading() {
        let mut model = model(25);
        fetch(&mut model, "one");
        fetch(&mut model, "two");
        model.begin_fetch();
        assert!(!model.go_back());
        assert_eq!(model.history_len(), 2);
    }

    #[test]
    fn failed_fetch_restores_previous_fact() {
        let mut model = model(25);
        fetch(&mut model, "one");
        model.begin_fetch();
        model.finish_fetch(Err(FactError::Timeout { duration: 10 }));

        assert_eq!(shown_fact(&model).as_deref(), Some("one"));
        assert_eq!(
            model.state().last_error.as_deref(),
            Some("The cat fact service took too long")
        );
        assert_eq!(model.history_len(), 1);

        fetch(&mut model, "two");
        assert_eq!(model.state().last_error, None);
    }

    #[test]
    fn failed_first_fetch_returns_to_empty_prompt() {
        let mut model = model(25);
        model.begin_fetch();
        model.finish_fetch(Err(FactError::Decode {
            message: "bad".to_string(),
        }));
        assert!(!model.state().is_loading());
        assert_eq!(model.share_text(), None);
    }

    #[test]
    fn share_text_joins_fact_and_exclamation() {
        let mut model = model(25);
        fetch(&mut model, "Cats purr.");
        let text = model.share_text().unwrap();
        let exclamation = text.strip_prefix("Cats purr. ").unwrap();
        assert!(EXCLAMATIONS.contains(&exclamation));
    }

    #[test]
    fn subscribers_see_every_snapshot() {
        let mut model = model(25);
        let mut rx = model.subscribe();
        assert!(!rx.has_changed().unwrap());

        model.begin_fetch();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_loading());

        model.finish_fetch(Ok("one".to_string()));
        assert_eq!(*rx.borrow_and_update(), *model.state());
    }

    #[test]
    fn same_seed_same_decoration() {
        let mut a = model(5);
        let mut b = model(5);
        fetch(&mut a, "x");
        fetch(&mut b, "x");
        assert_eq!(a.state(), b.state());
    }
}
