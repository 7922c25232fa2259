//! vitalink-scoring
//!
//! Health risk scoring engine. Pure functions without I/O or shared state.
//! Turns a self-reported questionnaire into a bounded overall score, a risk
//! tier, three derived sub-risks and the tier's recommendation list.

pub mod level;
pub mod questionnaire;
pub mod recommendations;
pub mod scoring;
pub mod sub_risk;
pub mod symptoms;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use level::{classify_risk_level, RiskLevel};
pub use questionnaire::{QuestionnaireForm, QuestionnaireResponse};
pub use recommendations::build_recommendations;
pub use scoring::{compute_overall_score, score_breakdown, ScoreBreakdown};
pub use sub_risk::{derive_sub_risks, SubRisks};

/// The engine's output for one questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    /// Clamped to `[0, 100]`.
    pub overall_score: u8,
    pub risk_level: RiskLevel,
    pub cardiac_risk: f64,
    pub diabetes_risk: f64,
    pub stroke_risk: f64,
    /// Ordered by priority; the first entry is displayed first.
    pub recommendations: Vec<String>,
}

/// Score a questionnaire.
///
/// Runs the stages in their only valid order: overall score, tier, sub-risks,
/// recommendations. Sub-risks and recommendations read the earlier stages'
/// outputs, never the raw questionnaire.
pub fn assess(response: &QuestionnaireResponse) -> RiskAssessment {
    let overall_score = compute_overall_score(response);
    let risk_level = classify_risk_level(overall_score);
    let sub_risks = derive_sub_risks(overall_score);
    let recommendations = build_recommendations(risk_level);

    RiskAssessment {
        overall_score,
        risk_level,
        cardiac_risk: sub_risks.cardiac,
        diabetes_risk: sub_risks.diabetes,
        stroke_risk: sub_risks.stroke,
        recommendations,
    }
}
