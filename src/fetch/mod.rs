mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, Response};
use serde::Serialize;

use crate::error::ApiError;

fn build_request(method: Method, url: &str) -> Result<Request, ApiError> {
    let url = url
        .parse()
        .map_err(|e| ApiError::Decode(format!("invalid URL '{url}': {e}")))?;
    Ok(Request::new(method, url))
}

/// Sends a GET and returns the response if its status is a success.
pub async fn get<C: HttpClient>(client: &C, url: &str) -> Result<Response, ApiError> {
    let req = build_request(Method::GET, url)?;
    let resp = client.execute(req).await?;
    ensure_success(resp).await
}

/// Sends `body` as JSON with a POST. The status is not checked, so callers
/// can map specific failures themselves.
pub async fn post_json<C: HttpClient, B: Serialize + ?Sized>(
    client: &C,
    url: &str,
    body: &B,
) -> Result<Response, ApiError> {
    let mut req = build_request(Method::POST, url)?;
    let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    req.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *req.body_mut() = Some(bytes.into());
    Ok(client.execute(req).await?)
}

/// Turns a non-success response into [`ApiError::Status`] carrying the body.
pub async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
