use super::templates::{AiHtmlTemplate, IndexTemplate, QrGeneratorTemplate};
use super::types::{AiHtmlForm, ErrorResponse, MISSING_MSG_ERROR, NOT_JSON_ERROR, QrForm};
use crate::{
    config::QrConfig,
    inference::{InferenceResult, InferenceService},
    qr::build_qr_url,
};
use axum::{
    Form,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<InferenceService>,
    pub qr: Arc<QrConfig>,
}

impl AppState {
    pub fn new(inference: InferenceService, qr: QrConfig) -> Self {
        Self {
            inference: Arc::new(inference),
            qr: Arc::new(qr),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}

pub async fn ai_html_page() -> impl IntoResponse {
    AiHtmlTemplate::default()
}

pub async fn ai_html_submit(State(state): State<AppState>, Form(form): Form<AiHtmlForm>) -> Response {
    let msg = form.msg.unwrap_or_default();
    if msg.is_empty() {
        warn!("AI HTML form submitted without a message");
        let page = AiHtmlTemplate {
            error: Some("Please enter a message.".to_string()),
            ..Default::default()
        };
        return (StatusCode::BAD_REQUEST, page).into_response();
    }

    match state.inference.run(&msg).await {
        Ok(result) => AiHtmlTemplate {
            msg,
            ai_answer: Some(result.inference_text),
            ai_token_usage: Some(result.inference_tokens),
            error: None,
        }
        .into_response(),
        Err(e) => {
            error!("AI HTML generation failed: {}", e);
            let page = AiHtmlTemplate {
                msg,
                error: Some(format!("Generation failed: {}", e)),
                ..Default::default()
            };
            (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
        }
    }
}

pub async fn qr_generator_page() -> impl IntoResponse {
    QrGeneratorTemplate::default()
}

pub async fn qr_generator_submit(State(state): State<AppState>, Form(form): Form<QrForm>) -> Response {
    let info = form.info.unwrap_or_default();
    if info.is_empty() {
        warn!("QR form submitted without data");
        let page = QrGeneratorTemplate {
            error: Some("Please enter the text to encode.".to_string()),
            ..Default::default()
        };
        return (StatusCode::BAD_REQUEST, page).into_response();
    }

    let qr_url = build_qr_url(&state.qr, &info);
    info!("Built QR code URL for {} bytes of data", info.len());

    QrGeneratorTemplate {
        info,
        qr_url: Some(qr_url),
        error: None,
    }
    .into_response()
}

pub async fn api_inference(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InferenceResult>, ApiError> {
    if !is_json_content_type(&headers) {
        return Err(bad_request(NOT_JSON_ERROR));
    }

    let data: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected malformed JSON body: {}", e);
        bad_request(NOT_JSON_ERROR)
    })?;

    let msg = data
        .get("msg")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .ok_or_else(|| bad_request(MISSING_MSG_ERROR))?;

    info!("Received inference API request");

    match state.inference.run(msg).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_client_error() => Err(bad_request(MISSING_MSG_ERROR)),
        Err(e) => {
            error!("Inference API request failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Inference failed: {}", e))),
            ))
        }
    }
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    #[rstest]
    #[case("application/json", true)]
    #[case("application/json; charset=utf-8", true)]
    #[case("Application/JSON", true)]
    #[case("application/problem+json", true)]
    #[case("application/x-www-form-urlencoded", false)]
    #[case("text/plain", false)]
    #[case("text/json", false)]
    fn test_is_json_content_type(#[case] content_type: &str, #[case] expected: bool) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());

        assert_eq!(is_json_content_type(&headers), expected);
    }

    #[test]
    fn test_missing_content_type_is_not_json() {
        assert!(!is_json_content_type(&HeaderMap::new()));
    }
}
