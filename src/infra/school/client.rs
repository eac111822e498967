use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::fetch::{self, HttpClient};
use crate::model::ApiExamResult;
use crate::services::ResultsApi;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// [`ResultsApi`] over HTTP against the school results server.
pub struct SchoolApiClient<C> {
    base_url: String,
    http: C,
}

impl<C: HttpClient> SchoolApiClient<C> {
    pub fn new(base_url: impl Into<String>, http: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }
}

#[async_trait]
impl<C: HttpClient> ResultsApi for SchoolApiClient<C> {
    #[tracing::instrument(skip(self, password), fields(base_url = %self.base_url))]
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let resp = fetch::post_json(&self.http, &url, &LoginRequest { email, password }).await?;

        let status = resp.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            warn!(status = status.as_u16(), "Login rejected");
            return Err(ApiError::InvalidCredentials);
        }
        let resp = fetch::ensure_success(resp).await?;

        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("login response: {e}")))?;
        Ok(body.token)
    }

    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    async fn student_results(&self, student_id: &str) -> Result<Vec<ApiExamResult>, ApiError> {
        let url = format!("{}/api/results/student/{}", self.base_url, student_id);
        let resp = fetch::get(&self.http, &url).await?;

        let exams: Vec<ApiExamResult> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("results response: {e}")))?;

        debug!(exam_count = exams.len(), "Fetched student results");
        Ok(exams)
    }
}
