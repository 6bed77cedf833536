//! Fetching of random cat facts.

mod client;
mod error;
mod source;

pub use client::CatFactClient;
pub use error::FactError;
pub use source::FactSource;
