//! Object key conventions.
//!
//! Pure string functions with no storage dependency. These define the canonical
//! layout of records in the Vitalink bucket. Every record lives under its
//! owner's user id so a user's history can be listed by prefix.

use uuid::Uuid;

use crate::error::CoreError;

pub const HEALTH_METRICS_PREFIX: &str = "health-metrics/";
pub const RISK_SCORES_PREFIX: &str = "risk-scores/";
pub const SUBMISSIONS_PREFIX: &str = "submissions/";

pub fn health_metric(user_id: Uuid, id: Uuid) -> String {
    format!("{HEALTH_METRICS_PREFIX}{user_id}/{id}.json")
}

pub fn risk_score(user_id: Uuid, id: Uuid) -> String {
    format!("{RISK_SCORES_PREFIX}{user_id}/{id}.json")
}

pub fn user_risk_scores_prefix(user_id: Uuid) -> String {
    format!("{RISK_SCORES_PREFIX}{user_id}/")
}

pub fn submission(user_id: Uuid, submission_id: Uuid) -> String {
    format!("{SUBMISSIONS_PREFIX}{user_id}/{submission_id}.json")
}

/// Extract the record id from a key such as `risk-scores/<user>/<id>.json`.
pub fn record_id(key: &str) -> Result<Uuid, CoreError> {
    let file = key
        .rsplit('/')
        .next()
        .and_then(|name| name.strip_suffix(".json"))
        .ok_or_else(|| CoreError::InvalidKey(key.to_string()))?;
    Ok(Uuid::parse_str(file)?)
}
