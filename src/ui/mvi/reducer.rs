//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Turns `(State, Intent)` into the next `State`.
///
/// Reducers never touch the network, the clock or a random source: any
/// such input is resolved by the caller and carried inside the intent,
/// which keeps every transition reproducible in tests.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
