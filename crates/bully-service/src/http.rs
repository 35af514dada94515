use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ServiceError;

/// POST a JSON body and decode a JSON reply, mapping every failure onto
/// `ServiceError`.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: &[(&str, &str)],
    body: &B,
) -> Result<T, ServiceError> {
    let mut builder = client.post(url).json(body);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let resp = builder.send().await?;
    handle_response(resp).await
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|e| ServiceError::Malformed(format!("json decode: {e}")))
    } else {
        Err(parse_error_with_status(status, resp).await)
    }
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> ServiceError {
    let body = resp.text().await.unwrap_or_default();
    // Gemini nests the message under error.message; Ollama uses a flat error string.
    let msg = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v["error"]["message"]
                .as_str()
                .or_else(|| v["error"].as_str())
                .map(String::from)
        })
        .unwrap_or(body);
    ServiceError::Status {
        status: status.as_u16(),
        body: msg,
    }
}
