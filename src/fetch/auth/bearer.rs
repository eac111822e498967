use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue, InvalidHeaderValue};

/// An [`HttpClient`] wrapper that sends the session token as
/// `Authorization: Bearer <token>` on every request.
pub struct BearerAuth<C> {
    inner: C,
    value: HeaderValue,
}

impl<C> BearerAuth<C> {
    /// Fails if the token contains bytes that cannot appear in a header.
    pub fn new(inner: C, token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        Ok(Self { inner, value })
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for BearerAuth<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut().insert(AUTHORIZATION, self.value.clone());
        self.inner.execute(req).await
    }
}
