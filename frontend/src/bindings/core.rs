use std::fmt;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::FormData;

// ============================================================================
// Endpoints
// ============================================================================

pub const GET_FILES_URL: &str = "/api/getfiles";
pub const UPLOAD_URL: &str = "/api/upload";
pub const ANALYSE_URL: &str = "/api/analyse";

// ============================================================================
// Errors
// ============================================================================

/// Failure of a backend call, as seen by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No HTTP response at all (offline, CORS, aborted)
    Network(String),
    /// The backend answered with a non-success status
    Status { status: u16, message: String },
    /// The body was not the JSON we expected
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { message, .. } => write!(f, "{}", message),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body sent by the backend and by the host server.
///
/// The backend uses `{"error": ".."}` for its own failures; request validation
/// errors come back as `{"detail": ..}` instead.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.is_empty()) {
            return Some(error.clone());
        }
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Human-readable message for a failed response body
pub fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

// ============================================================================
// Raw Responses
// ============================================================================

/// Status and body of a completed HTTP exchange.
///
/// Kept separate from the fetch itself so the interpretation of a response can
/// be exercised without a browser.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a success body, or turn a failure status into `ApiError::Status`
    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status {
                status: self.status,
                message: error_message_from_body(self.status, &self.body),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// ============================================================================
// Fetch Helpers
// ============================================================================

pub async fn get(url: &str) -> Result<RawResponse, ApiError> {
    let resp = Request::get(url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    Ok(RawResponse { status, body })
}

/// POST a multipart form. The browser sets the boundary header itself.
pub async fn post_form(url: &str, form: &FormData) -> Result<RawResponse, ApiError> {
    let resp = Request::post(url).body(form.clone())?.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    Ok(RawResponse { status, body })
}

pub fn new_form() -> Result<FormData, ApiError> {
    FormData::new().map_err(|e| ApiError::Network(format!("FormData unavailable: {:?}", e)))
}

// ============================================================================
// Browser Helpers
// ============================================================================

/// Blocking `window.alert`
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Write `text` to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| {
            e.as_string()
                .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
                .unwrap_or_else(|| format!("{:?}", e))
        })
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
