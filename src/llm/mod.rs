mod client;
mod types;

pub use client::{GeminiClient, LlmClient, OpenAiClient, create_llm_client};
pub use types::*;
