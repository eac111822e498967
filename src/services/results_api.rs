//! Trait for talking to a results server.

use crate::error::ApiError;
use crate::model::ApiExamResult;

/// Abstraction over the school results backend.
#[async_trait::async_trait]
pub trait ResultsApi: Send + Sync {
    /// Exchanges credentials for a session token (a JWT).
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    /// Returns every published exam for a student, in server order.
    async fn student_results(&self, student_id: &str) -> Result<Vec<ApiExamResult>, ApiError>;
}
