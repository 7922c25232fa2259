use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use vitalink_audit::events::{AuditAction, AuditEvent, ResourceType};
use vitalink_core::models::health_metric::HealthMetric;
use vitalink_core::models::risk_score::RiskScore;
use vitalink_core::models::submission::Submission;
use vitalink_core::object_keys;
use vitalink_scoring::symptoms::is_catalog_symptom;
use vitalink_scoring::{
    assess, score_breakdown, QuestionnaireForm, QuestionnaireResponse, RiskAssessment,
    ScoreBreakdown,
};
use vitalink_storage::error::StorageError;
use vitalink_storage::records;
use vitalink_storage::store::ObjectStore;

use crate::error::ApiError;
use crate::routes::require_user;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AssessmentPreview {
    questionnaire: QuestionnaireResponse,
    breakdown: ScoreBreakdown,
    assessment: RiskAssessment,
}

#[derive(Deserialize)]
pub struct SubmitAssessment {
    /// Client-generated id that makes retries of the same form idempotent.
    #[serde(default)]
    submission_id: Option<Uuid>,
    questionnaire: QuestionnaireForm,
}

/// Score a form without storing anything.
pub async fn preview_assessment(Json(form): Json<QuestionnaireForm>) -> Json<AssessmentPreview> {
    let questionnaire = form.normalize();
    let breakdown = score_breakdown(&questionnaire);
    let assessment = assess(&questionnaire);
    Json(AssessmentPreview {
        questionnaire,
        breakdown,
        assessment,
    })
}

/// Score a form and store the questionnaire and its risk score.
///
/// The submission marker is claimed first with an insert-once write, so a
/// replayed submission never stores a second assessment: it returns the
/// risk score written by the first attempt (`200`), or `409` while that
/// attempt has not finished writing. If storing the records fails, the
/// claim is released and the same submission id can be retried.
pub async fn submit_assessment<S: ObjectStore>(
    State(state): State<AppState<S>>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<SubmitAssessment>,
) -> Result<(StatusCode, Json<RiskScore>), ApiError> {
    let user_id = require_user(user_id)?;
    let submission_id = request.submission_id.unwrap_or_else(Uuid::new_v4);
    let store = state.store.as_ref();

    let questionnaire = request.questionnaire.normalize();
    let off_catalog = questionnaire
        .symptoms
        .iter()
        .filter(|s| !is_catalog_symptom(s))
        .count();
    if off_catalog > 0 {
        tracing::debug!(%submission_id, off_catalog, "symptoms outside the catalog");
    }

    let assessment = assess(&questionnaire);
    tracing::debug!(
        %submission_id,
        overall_score = assessment.overall_score,
        risk_level = %assessment.risk_level,
        "assessment computed"
    );

    let now = jiff::Timestamp::now();
    let metric = HealthMetric::new(user_id, submission_id, questionnaire, now);
    let score = RiskScore::new(&metric, assessment, now);
    let marker = Submission {
        submission_id,
        user_id,
        health_metric_id: metric.id,
        risk_score_id: score.id,
        created_at: now,
    };

    let marker_key = object_keys::submission(user_id, submission_id);
    match records::insert_json(store, &marker_key, &marker).await {
        Ok(()) => {}
        Err(StorageError::AlreadyExists { .. }) => {
            let existing = replayed_score(store, user_id, &marker_key).await?;
            return Ok((StatusCode::OK, Json(existing)));
        }
        Err(e) => return Err(e.into()),
    }

    if let Err(e) = store_records(store, &metric, &score).await {
        release_submission(store, &metric, &score, &marker_key).await;
        return Err(e.into());
    }

    AuditEvent::new(
        AuditAction::Created,
        ResourceType::HealthMetric,
        metric.id,
        user_id,
    )
    .emit();
    AuditEvent::new(AuditAction::Created, ResourceType::RiskScore, score.id, user_id)
        .with_details(json!({
            "submission_id": submission_id,
            "health_metric_id": metric.id,
            "overall_score": score.assessment.overall_score,
            "risk_level": score.assessment.risk_level,
        }))
        .emit();

    tracing::info!(
        %user_id,
        %submission_id,
        risk_score_id = %score.id,
        risk_level = %score.assessment.risk_level,
        "assessment stored"
    );

    Ok((StatusCode::CREATED, Json(score)))
}

async fn store_records<S: ObjectStore>(
    store: &S,
    metric: &HealthMetric,
    score: &RiskScore,
) -> Result<(), StorageError> {
    let user_id = metric.user_id;
    records::save_json(store, &object_keys::health_metric(user_id, metric.id), metric).await?;
    records::save_json(store, &object_keys::risk_score(user_id, score.id), score).await
}

/// Undo a submission whose records could not all be stored, so a retry with
/// the same submission id can claim it again. The marker is removed last.
async fn release_submission<S: ObjectStore>(
    store: &S,
    metric: &HealthMetric,
    score: &RiskScore,
    marker_key: &str,
) {
    let user_id = metric.user_id;
    let keys = [
        object_keys::risk_score(user_id, score.id),
        object_keys::health_metric(user_id, metric.id),
    ];
    for key in &keys {
        if let Err(e) = store.delete(key).await {
            tracing::error!(key = %key, error = %e, "failed to remove partial record");
            // Keep the marker so the orphan stays discoverable
            return;
        }
    }

    match store.delete(marker_key).await {
        Ok(()) => tracing::warn!(
            submission_id = %metric.submission_id,
            "submission released after a failed write"
        ),
        Err(e) => tracing::error!(
            key = %marker_key,
            error = %e,
            "failed to release submission marker"
        ),
    }
}

/// Resolve a submission that was already claimed to its stored risk score.
async fn replayed_score<S: ObjectStore>(
    store: &S,
    user_id: Uuid,
    marker_key: &str,
) -> Result<RiskScore, ApiError> {
    let marker: Submission = records::load_json(store, marker_key).await?;
    let score_key = object_keys::risk_score(user_id, marker.risk_score_id);

    let score: RiskScore = match records::load_json(store, &score_key).await {
        Ok(score) => score,
        Err(StorageError::NotFound { .. }) => {
            tracing::warn!(
                submission_id = %marker.submission_id,
                "submission replayed before its risk score was stored"
            );
            return Err(ApiError::Conflict(format!(
                "submission {} is still being processed",
                marker.submission_id
            )));
        }
        Err(e) => return Err(e.into()),
    };

    AuditEvent::new(
        AuditAction::Replayed,
        ResourceType::Submission,
        marker.submission_id,
        user_id,
    )
    .with_details(json!({ "risk_score_id": score.id }))
    .emit();

    Ok(score)
}
