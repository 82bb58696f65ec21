use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ApiResponse {
    pub fn error(message: Option<&str>, code: StatusCode) -> Self {
        Self {
            status: "error".to_string(),
            message: message.map(|m| m.to_string()),
            code: Some(code.as_u16()),
        }
    }
}
