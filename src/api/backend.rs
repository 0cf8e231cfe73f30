use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

/// Anything that can answer "what do I have in common with this handle?".
///
/// The TUI only sees this trait, so tests can swap in a canned backend.
#[async_trait]
pub trait CompareBackend: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// Runs one comparison for an already-cleaned handle.
    ///
    /// Ok carries the parsed JSON body. Its shape belongs to the server and is
    /// not interpreted here.
    async fn compare(&self, handle: &str) -> Result<Value, ApiError>;
}
