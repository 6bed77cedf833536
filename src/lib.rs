//! Random cat facts in the terminal.
//!
//! The reusable core is [`history::BoundedHistoryStack`] and
//! [`sampler::choose_two`]; the rest wires them to an HTTP fact source
//! and a ratatui front end.

pub mod clipboard;
pub mod config;
pub mod fact;
pub mod history;
pub mod logging;
pub mod palette;
pub mod sampler;
pub mod ui;
