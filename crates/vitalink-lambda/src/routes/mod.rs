pub mod assessments;
pub mod health;
pub mod health_metrics;
pub mod questionnaire;
pub mod risk_scores;

use uuid::Uuid;

use crate::error::ApiError;

/// Reject the nil uuid as a user id; it is what unset ids default to.
pub(crate) fn require_user(user_id: Uuid) -> Result<Uuid, ApiError> {
    if user_id.is_nil() {
        return Err(ApiError::BadRequest("user id must not be nil".to_string()));
    }
    Ok(user_id)
}
