use crate::config::FrontendConfig;
use crate::token::{LocalTokenStore, TokenVault};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::OnceCell;
use thiserror::Error;
use yew::prelude::*;

const JSON_CONTENT_TYPE: &str = "application/json";

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::Decode(_) => None,
        }
    }

    /// Message for display, or `fallback` when the error carries nothing useful.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Thin JSON client for the Classroom REST API.
///
/// Every request reads the bearer token from the shared [`TokenVault`], so a
/// login or logout is visible to the next call without reconfiguring anything.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    tokens: TokenVault,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.tokens.same_vault(&other.tokens)
    }
}

impl ApiClient {
    /// Create a new API client with the provided base URL and token owner.
    pub fn new(base_url: &str, tokens: TokenVault) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            tokens,
        }
    }

    /// Client backed by browser `localStorage`, as configured at build time.
    pub fn from_config(config: &FrontendConfig) -> Self {
        let store = LocalTokenStore::new(config.token_storage_key());
        Self::new(config.api_base(), TokenVault::new(store))
    }

    /// The page-wide client. Created on first use.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::from_config(&FrontendConfig::new()))
                .clone()
        })
    }

    pub fn tokens(&self) -> &TokenVault {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn json_request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, self.api_url(path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        match self.tokens.current() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.json_request(Method::GET, path)).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.json_request(Method::POST, path).json(payload);
        let body = self.send(request).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.json_request(Method::PUT, path).json(payload);
        let body = self.send(request).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(self.json_request(Method::DELETE, path)).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Posts a multipart form. Neither the JSON content type nor the bearer
    /// token is attached; the form sets its own boundary header.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        let request = self.client.post(self.api_url(path)).multipart(form);
        let body = self.send(request).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let content_type = declared_content_type(response.headers());
        let text = response.text().await?;
        let body = read_body(content_type.as_deref(), text)?;

        if status.is_success() {
            Ok(body)
        } else {
            let message = failure_message(status, &body);
            log::debug!("backend answered {status}: {message}");
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn declared_content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Interprets a response body: JSON when declared as such and non-empty,
/// otherwise the raw text. An empty non-JSON body becomes `null`.
pub(crate) fn read_body(content_type: Option<&str>, text: String) -> Result<Value, ApiError> {
    let is_json = content_type.is_some_and(|value| value.contains(JSON_CONTENT_TYPE));
    if is_json && !text.is_empty() {
        return Ok(serde_json::from_str(&text)?);
    }
    if text.is_empty() {
        Ok(Value::Null)
    } else {
        Ok(Value::String(text))
    }
}

/// Message for a non-2xx response: the body's `message`, its `error`, the raw
/// text, the status reason phrase, then the bare code.
pub(crate) fn failure_message(status: StatusCode, body: &Value) -> String {
    classroom_shared::models::surfaced_message(body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// The client provided by the nearest `ContextProvider<ApiClient>`, or the
/// page-wide one when there is none.
#[hook]
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::shared)
}
