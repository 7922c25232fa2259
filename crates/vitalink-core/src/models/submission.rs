use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Marker written once per form submission.
///
/// Stored with insert-once semantics under the client's submission id, so a
/// retried submission resolves to the records written the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub submission_id: Uuid,
    pub user_id: Uuid,
    pub health_metric_id: Uuid,
    pub risk_score_id: Uuid,
    pub created_at: jiff::Timestamp,
}
