use rand::rngs::StdRng;
use std::time::{Duration, Instant};

use crate::clipboard::{self, ClipboardHandler};
use crate::fact::FactError;
use crate::ui::fact::{FactViewModel, FactViewState};

/// How long a footer status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    expires_at: Instant,
}

pub struct App {
    should_quit: bool,
    view_model: FactViewModel<StdRng>,
    status: Option<StatusMessage>,
    clipboard: Option<ClipboardHandler>,
}

impl App {
    pub fn new(view_model: FactViewModel<StdRng>) -> Self {
        Self {
            should_quit: false,
            view_model,
            status: None,
            clipboard: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn fact_state(&self) -> &FactViewState {
        self.view_model.state()
    }

    pub fn history_len(&self) -> usize {
        self.view_model.history_len()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Returns true if the caller should start a fetch task.
    pub fn begin_fetch(&mut self) -> bool {
        let started = self.view_model.begin_fetch();
        if started {
            self.status = None;
        }
        started
    }

    pub fn on_fact_loaded(&mut self, result: Result<String, FactError>) {
        let failed = result.is_err();
        self.view_model.finish_fetch(result);
        if failed {
            if let Some(message) = self.view_model.state().last_error.clone() {
                self.notify(message, StatusKind::Error);
            }
        }
    }

    pub fn go_back(&mut self) {
        if self.view_model.go_back() {
            self.status = None;
        }
    }

    pub fn can_share(&self) -> bool {
        self.view_model.share_text().is_some()
    }

    pub fn share(&mut self) {
        let Some(text) = self.view_model.share_text() else {
            return;
        };
        match clipboard::share(&mut self.clipboard, &text) {
            Ok(()) => {
                tracing::info!("fact copied to clipboard");
                self.notify("Copied to clipboard".to_string(), StatusKind::Info);
            }
            Err(err) => {
                tracing::warn!(error = %err, "share failed");
                self.notify(err, StatusKind::Error);
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.expire_status(Instant::now());
    }

    fn notify(&mut self, text: String, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text,
            kind,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| now >= status.expires_at)
        {
            self.status = None;
        }
    }
}
