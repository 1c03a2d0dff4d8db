use super::types::*;
use crate::{
    Error, Result,
    config::{LlmConfig, LlmProvider},
};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

/// Builds the client for the configured provider. Called once at start-up.
pub fn create_llm_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
    let client: Arc<dyn LlmClient> = match config.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config.clone())?),
        LlmProvider::Openai => Arc::new(OpenAiClient::new(config.clone())?),
    };
    Ok(client)
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.resolved_base_url(),
            api_key: config.api_key,
            model: config.model,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            model = %self.model,
            message_len = request.message.len(),
            "Sending generateContent request"
        );

        let body = GenerateContentRequest::from_request(&request);
        let response = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = response.json().await?;

        let text = response.text().ok_or_else(|| {
            let reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            Error::llm(format!("Response contained no text ({reason})"))
        })?;
        let total_tokens = response.total_tokens();

        debug!(total_tokens, text_len = text.len(), "Received generateContent response");

        Ok(GenerateResponse { text, total_tokens })
    }
}

/// Chat-completions client for OpenAI-compatible gateways.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    api_base: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let api_base = config.resolved_base_url();
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key)
            .with_api_base(&api_base);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let client = Client::with_config(openai_config).with_http_client(http);

        Ok(Self {
            client,
            api_base,
            model: config.model,
        })
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        debug!(
            model = %self.model,
            url = %self.chat_completions_url(),
            "Creating chat completion"
        );

        let system = openai_types::ChatCompletionRequestSystemMessageArgs::default()
            .content(openai_types::ChatCompletionRequestSystemMessageContent::Text(
                request.system_instruction,
            ))
            .build()?;
        let user = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                request.message,
            ))
            .build()?;

        let messages: Vec<openai_types::ChatCompletionRequestMessage> =
            vec![system.into(), user.into()];

        let openai_request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(openai_request).await?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::llm("Chat completion contained no content"))?;
        let total_tokens = response.usage.map(|u| u.total_tokens).unwrap_or_default();

        Ok(GenerateResponse { text, total_tokens })
    }
}
