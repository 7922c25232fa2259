use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use vitalink_scoring::RiskAssessment;

use super::health_metric::HealthMetric;

/// A stored risk assessment, linked to the questionnaire that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskScore {
    pub id: Uuid,
    pub user_id: Uuid,
    pub health_metric_id: Uuid,
    pub submission_id: Uuid,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub analysis_notes: String,
    pub created_at: jiff::Timestamp,
}

impl RiskScore {
    pub fn new(
        metric: &HealthMetric,
        assessment: RiskAssessment,
        created_at: jiff::Timestamp,
    ) -> Self {
        let analysis_notes = analysis_notes(created_at, metric.questionnaire.symptoms.len());
        Self {
            id: Uuid::new_v4(),
            user_id: metric.user_id,
            health_metric_id: metric.id,
            submission_id: metric.submission_id,
            assessment,
            analysis_notes,
            created_at,
        }
    }
}

/// `Assessment completed on 2025-03-14. 2 symptoms reported.`
pub fn analysis_notes(completed_at: jiff::Timestamp, symptom_count: usize) -> String {
    format!(
        "Assessment completed on {}. {symptom_count} symptoms reported.",
        completed_at.strftime("%Y-%m-%d"),
    )
}

/// Order newest first, as the dashboard reads them.
pub fn sort_newest_first(scores: &mut [RiskScore]) {
    scores.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
}
