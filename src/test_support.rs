//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::{ApiError, CompareBackend};

/// A backend that answers every comparison with the same canned outcome
/// and remembers which handles it was asked about.
pub struct FixedBackend {
    outcome: Result<Value, ApiError>,
    pub calls: Mutex<Vec<String>>,
}

impl FixedBackend {
    pub fn ok(body: Value) -> Self {
        Self {
            outcome: Ok(body),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompareBackend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn compare(&self, handle: &str) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(handle.to_string());
        self.outcome.clone()
    }
}

/// Creates a test App whose backend always succeeds.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(FixedBackend::ok(
        json!({"common_interests": "como estas?"}),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_backend_records_calls() {
        let backend = FixedBackend::failing(ApiError::Network("refused".to_string()));
        let result = tokio_test::block_on(backend.compare("jdoe"));
        assert_eq!(result, Err(ApiError::Network("refused".to_string())));
        assert_eq!(backend.calls(), vec!["jdoe".to_string()]);
    }
}
