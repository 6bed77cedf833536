//! Boundary trait for anything that can produce a fact.

use async_trait::async_trait;

use super::error::FactError;

/// Asynchronous provider of short fact strings.
///
/// The UI only depends on this trait, so tests and alternative backends
/// can stand in for the HTTP client.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch one random fact.
    async fn fetch_fact(&self) -> Result<String, FactError>;
}
