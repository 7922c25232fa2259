use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use vitalink_scoring::questionnaire::{QuestionnaireResponse, Selection};

/// A stored questionnaire, kept for audit next to the risk score it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthMetric {
    pub id: Uuid,
    pub user_id: Uuid,
    pub submission_id: Uuid,
    pub questionnaire: QuestionnaireResponse,
    /// Condition summary followed by the patient's free-text notes.
    pub notes: String,
    pub created_at: jiff::Timestamp,
}

impl HealthMetric {
    pub fn new(
        user_id: Uuid,
        submission_id: Uuid,
        questionnaire: QuestionnaireResponse,
        created_at: jiff::Timestamp,
    ) -> Self {
        let notes = condition_summary(&questionnaire);
        Self {
            id: Uuid::new_v4(),
            user_id,
            submission_id,
            questionnaire,
            notes,
            created_at,
        }
    }
}

/// One-line summary of the condition answers, e.g.
/// `Hypertension: yes, Diabetes: not specified, Heartbeat: fast, Cholesterol: high. <notes>`.
pub fn condition_summary(questionnaire: &QuestionnaireResponse) -> String {
    fn answer<T: Selection>(value: T) -> &'static str {
        value.wire_name().unwrap_or("not specified")
    }

    format!(
        "Hypertension: {}, Diabetes: {}, Heartbeat: {}, Cholesterol: {}. {}",
        answer(questionnaire.hypertension_status),
        answer(questionnaire.diabetes_status),
        answer(questionnaire.heartbeat_feeling),
        answer(questionnaire.cholesterol_status),
        questionnaire.notes.as_deref().unwrap_or_default(),
    )
    .trim()
    .to_string()
}
