//! Single-shot request execution and error normalization.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

const REQUEST_ID_HEADER: &str = "X-Splunk-Request-Id";

/// Send a request once and turn any non-2xx response into [`ClientError::ApiError`].
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let (http, request) = builder.build_split();
    let request = request?;
    let method = request.method().clone();
    debug!(%method, url = %request.url(), "Sending Splunk request");

    let response = http.execute(request).await?;
    let status = response.status();
    debug!(%method, url = %response.url(), status = status.as_u16(), "Splunk responded");

    if status.is_success() {
        Ok(response)
    } else {
        Err(api_error(response).await)
    }
}

/// Read a response body as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("{url}: failed to parse body: {e}")))
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    ClientError::ApiError {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        url,
        message: splunk_message(&body),
        body,
        request_id,
    }
}

/// Join Splunk's `messages[]` into one line; fall back to the raw body.
fn splunk_message(body: &str) -> String {
    match serde_json::from_str::<SplunkMessages>(body) {
        Ok(parsed) if !parsed.messages.is_empty() => parsed
            .messages
            .iter()
            .map(|msg| format!("{}: {}", msg.message_type, msg.text))
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.trim().to_string(),
    }
}
