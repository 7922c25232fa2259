use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use vitalink_audit::events::{AuditAction, AuditEvent, ResourceType};
use vitalink_core::models::risk_score::{sort_newest_first, RiskScore};
use vitalink_core::object_keys;
use vitalink_storage::error::StorageError;
use vitalink_storage::records;
use vitalink_storage::store::ObjectStore;

use crate::error::ApiError;
use crate::routes::require_user;
use crate::state::AppState;

/// All of a user's risk scores, newest first.
pub async fn list_risk_scores<S: ObjectStore>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<RiskScore>>, ApiError> {
    let user_id = require_user(user_id)?;
    Ok(Json(load_user_scores(state.store.as_ref(), user_id).await?))
}

/// The most recent risk score, as shown on the dashboard.
pub async fn latest_risk_score<S: ObjectStore>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RiskScore>, ApiError> {
    let user_id = require_user(user_id)?;
    load_user_scores(state.store.as_ref(), user_id)
        .await?
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no risk scores for user {user_id}")))
}

pub async fn get_risk_score<S: ObjectStore>(
    State(state): State<AppState<S>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RiskScore>, ApiError> {
    let user_id = require_user(user_id)?;
    let key = object_keys::risk_score(user_id, id);
    let score: RiskScore = records::load_json(state.store.as_ref(), &key).await?;

    AuditEvent::new(AuditAction::Viewed, ResourceType::RiskScore, id, user_id).emit();
    Ok(Json(score))
}

async fn load_user_scores<S: ObjectStore>(
    store: &S,
    user_id: Uuid,
) -> Result<Vec<RiskScore>, ApiError> {
    let keys = store
        .list(&object_keys::user_risk_scores_prefix(user_id))
        .await?;

    let mut scores = Vec::with_capacity(keys.len());
    for key in &keys {
        if let Err(e) = object_keys::record_id(key) {
            tracing::warn!(key = %key, error = %e, "skipping non-record object");
            continue;
        }
        match records::load_json::<_, RiskScore>(store, key).await {
            Ok(score) => scores.push(score),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(key = %key, error = %e, "skipping unreadable risk score");
            }
            // Removed since listing, e.g. by a released submission
            Err(StorageError::NotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }

    sort_newest_first(&mut scores);
    Ok(scores)
}
