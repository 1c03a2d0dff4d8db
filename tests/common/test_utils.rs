use super::mocks::MockLlmClient;
use axum::Router;
use genpages::{
    config::QrConfig,
    inference::InferenceService,
    server::{self, handlers::AppState},
};
use std::sync::Arc;

/// Router wired to the given mock; the mock is returned for request inspection
pub fn create_test_app(llm: MockLlmClient) -> (Router, Arc<MockLlmClient>) {
    let llm = Arc::new(llm);
    let state = AppState::new(InferenceService::new(llm.clone()), QrConfig::default());
    (server::router(state), llm)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 8080
  logs:
    level: "debug"

llm:
  provider: "openai"
  base_url: "http://localhost:4000/v1"
  api_key: "file-api-key"
  model: "gemini-2.5-flash"
  timeout_secs: 10

qr:
  size: 150
"#;

/// Only overrides a single field; everything else should fall back to defaults
pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 9000
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

llm:
  provider: "unknown"
"#;
