//! Intents for the fact screen.

use crate::palette::Rgb;
use crate::ui::fact::state::FactEntry;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the fact reducer.
///
/// Random picks (emoji, colors, exclamation) and history lookups are
/// resolved by the view model before dispatch.
#[derive(Debug, Clone)]
pub enum FactIntent {
    /// A fetch was started.
    FetchStarted,
    /// A fetch completed and its entry was pushed onto the history.
    FetchSucceeded {
        entry: FactEntry,
        cat_emoji: String,
        background: (Rgb, Rgb),
        has_history: bool,
    },
    /// A fetch failed; `restore` is what was on screen before it started.
    FetchFailed {
        message: String,
        restore: Option<FactEntry>,
    },
    /// Back-navigation revealed an older entry.
    WentBack { entry: FactEntry, has_history: bool },
}

impl Intent for FactIntent {}
