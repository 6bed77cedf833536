//! Reducer for the fact screen.

use crate::ui::mvi::Reducer;

use super::intent::FactIntent;
use super::state::{FactViewState, LoadingState};

pub struct FactReducer;

impl Reducer for FactReducer {
    type State = FactViewState;
    type Intent = FactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FactIntent::FetchStarted => FactViewState {
                loading: LoadingState::Loading,
                ..state
            },

            FactIntent::FetchSucceeded {
                entry,
                cat_emoji,
                background,
                has_history,
            } => FactViewState {
                loading: entry.into(),
                has_history,
                cat_emoji,
                background,
                last_error: None,
            },

            FactIntent::FetchFailed { message, restore } => FactViewState {
                loading: restore.map(LoadingState::from).unwrap_or_default(),
                last_error: Some(message),
                ..state
            },

            // Emoji and colors stay as they are when going back.
            FactIntent::WentBack { entry, has_history } => FactViewState {
                loading: entry.into(),
                has_history,
                last_error: None,
                ..state
            },
        }
    }
}
