use serde::{Deserialize, Serialize};

pub const NOT_JSON_ERROR: &str = "Request must be JSON";
pub const MISSING_MSG_ERROR: &str = "Request must have 'msg' field";

#[derive(Debug, Deserialize)]
pub struct AiHtmlForm {
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QrForm {
    #[serde(default)]
    pub info: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
