use async_trait::async_trait;
use genpages::{
    Error, Result,
    llm::{GenerateRequest, GenerateResponse, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client returning a fixed answer for every request
#[derive(Debug)]
pub struct MockLlmClient {
    pub response: GenerateResponse,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new(text: &str, total_tokens: u32) -> Self {
        Self {
            response: GenerateResponse {
                text: text.to_string(),
                total_tokens,
            },
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        Ok(self.response.clone())
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new("<div style=\"color: teal\">Hello</div>", 42)
    }
}
