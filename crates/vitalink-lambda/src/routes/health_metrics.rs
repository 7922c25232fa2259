use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use vitalink_audit::events::{AuditAction, AuditEvent, ResourceType};
use vitalink_core::models::health_metric::HealthMetric;
use vitalink_core::object_keys;
use vitalink_storage::records;
use vitalink_storage::store::ObjectStore;

use crate::error::ApiError;
use crate::routes::require_user;
use crate::state::AppState;

pub async fn get_health_metric<S: ObjectStore>(
    State(state): State<AppState<S>>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<HealthMetric>, ApiError> {
    let user_id = require_user(user_id)?;
    let key = object_keys::health_metric(user_id, id);
    let metric: HealthMetric = records::load_json(state.store.as_ref(), &key).await?;

    AuditEvent::new(AuditAction::Viewed, ResourceType::HealthMetric, id, user_id).emit();
    Ok(Json(metric))
}
