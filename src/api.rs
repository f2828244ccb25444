use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::models::UsersResponse;
use crate::query::QueryState;

const API_BASE_URL: &str = match option_env!("USERS_API_BASE_URL") {
    Some(value) => value,
    None => "https://kep.uz",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let fallback = match status {
        400 => "bad request".to_string(),
        404 => "not found".to_string(),
        429 => "too many requests".to_string(),
        500..=599 => "server error".to_string(),
        _ => format!("HTTP {status}"),
    };

    let message = if text.trim().is_empty() { fallback } else { text };

    ApiError::Http { status, message }
}

/// Один GET на одно значение `QueryState`; параметры целиком берутся
/// из его канонической строки запроса.
pub(crate) async fn fetch_users(query: &QueryState) -> Result<UsersResponse, ApiError> {
    let url = format!("{}?{}", endpoint("/api/users"), query.to_query_string());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}
