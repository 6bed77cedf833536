//! State of the fact screen.

use crate::palette::{Rgb, GRADIENT_COLORS};
use crate::ui::mvi::UiState;

/// One fetched fact together with the exclamation it was shown with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactEntry {
    pub fact: String,
    pub exclamation: String,
}

impl FactEntry {
    /// Text handed to the clipboard when sharing.
    pub fn share_text(&self) -> String {
        format!("{} {}", self.fact, self.exclamation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingState {
    Loading,
    Done { fact: String, exclamation: String },
}

impl Default for LoadingState {
    fn default() -> Self {
        LoadingState::Done {
            fact: String::new(),
            exclamation: String::new(),
        }
    }
}

impl From<FactEntry> for LoadingState {
    fn from(entry: FactEntry) -> Self {
        LoadingState::Done {
            fact: entry.fact,
            exclamation: entry.exclamation,
        }
    }
}

/// Snapshot rendered by the UI after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct FactViewState {
    pub loading: LoadingState,
    /// True when back-navigation has somewhere to go.
    pub has_history: bool,
    pub cat_emoji: String,
    pub background: (Rgb, Rgb),
    /// Message of the most recent failed fetch.
    pub last_error: Option<String>,
}

impl Default for FactViewState {
    fn default() -> Self {
        Self {
            loading: LoadingState::default(),
            has_history: false,
            cat_emoji: String::new(),
            background: (GRADIENT_COLORS[0], GRADIENT_COLORS[1]),
            last_error: None,
        }
    }
}

impl UiState for FactViewState {}

impl FactViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self.loading, LoadingState::Loading)
    }

    /// The fact currently on screen, if any.
    pub fn current(&self) -> Option<FactEntry> {
        match &self.loading {
            LoadingState::Done { fact, exclamation } if !fact.is_empty() => Some(FactEntry {
                fact: fact.clone(),
                exclamation: exclamation.clone(),
            }),
            _ => None,
        }
    }
}
