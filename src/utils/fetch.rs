//! HTTP transport.
//!
//! [`HttpTransport`] is the seam between the API client and the network.
//! [`BrowserTransport`] implements it with the Fetch API; tests supply a
//! scripted transport instead.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;
use crate::utils::dom;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON POST and hands back whatever came back, whatever the status.
///
/// Only failures that produce no response at all are errors here; status
/// handling belongs to the caller.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, FetchError>;
}

/// Fetch API transport.
///
/// Requests are CORS with `credentials: include` so the backend's session
/// cookies travel with them. No timeout is applied; the browser's own
/// limits govern how long a request may hang.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl HttpTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, FetchError> {
        let window = dom::window().ok_or(FetchError::NoWindow)?;

        let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_credentials(RequestCredentials::Include);
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| FetchError::RequestCreationFailed)?;

        let result = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::NetworkError(js_error_message(&e)))?;

        let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
        let status = resp.status();

        let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
            .await
            .map_err(|_| FetchError::ResponseReadFailed)?;

        let body = text.as_string().ok_or(FetchError::InvalidContent)?;
        Ok(HttpResponse { status, body })
    }
}

/// Best-effort message from a rejected fetch promise (usually a `TypeError`).
fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let resp = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(resp(200).is_success());
        assert!(resp(204).is_success());
        assert!(!resp(199).is_success());
        assert!(!resp(300).is_success());
        assert!(!resp(422).is_success());
        assert!(!resp(500).is_success());
    }
}
