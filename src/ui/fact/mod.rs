//! Fact screen: state, intents, reducer and the owning view model.

mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::FactIntent;
pub use reducer::FactReducer;
pub use state::{FactEntry, FactViewState, LoadingState};
pub use view_model::FactViewModel;
