use crate::{
    Error, Result,
    llm::{GenerateRequest, LlmClient},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Fixed instruction sent with every message; constrains the model to a bare,
/// inline-styled `<div>` fragment.
pub const HTML_SYSTEM_INSTRUCTION: &str = "\
You must return ONLY raw HTML.
Do NOT use markdown.
Do NOT wrap the answer in ```html.
The response must start with <div and end with </div>.
Use inline styles only.
Return nothing except the HTML.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub inference_text: String,
    pub inference_tokens: u32,
}

pub struct InferenceService {
    llm: Arc<dyn LlmClient>,
}

impl InferenceService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn run(&self, message: &str) -> Result<InferenceResult> {
        if message.is_empty() {
            return Err(Error::EmptyMessage);
        }

        info!("Running inference for message of {} bytes", message.len());

        let response = self
            .llm
            .generate(GenerateRequest {
                system_instruction: HTML_SYSTEM_INSTRUCTION.to_string(),
                message: message.to_string(),
            })
            .await?;

        debug!(tokens = response.total_tokens, "Inference completed");

        Ok(InferenceResult {
            inference_text: strip_code_fence(&response.text).to_string(),
            inference_tokens: response.total_tokens,
        })
    }
}

/// Removes a markdown fence (```html ... ```) around the whole answer. Text
/// without a surrounding fence is returned unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };

    // Drop an info string ("html") directly after the opening fence.
    let info_len = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    let inner = match body[info_len..].chars().next() {
        Some('<' | '\n' | '\r') => &body[info_len..],
        _ => body,
    };

    inner.trim()
}
