use axum::Json;
use serde::Serialize;

use vitalink_scoring::recommendations::recommendations;
use vitalink_scoring::symptoms::SYMPTOM_CATALOG;
use vitalink_scoring::RiskLevel;

#[derive(Serialize)]
pub struct RiskLevelInfo {
    level: RiskLevel,
    label: &'static str,
    min_score: u8,
    max_score: u8,
    recommendations: &'static [&'static str],
}

pub async fn list_symptoms() -> Json<&'static [&'static str]> {
    Json(SYMPTOM_CATALOG)
}

pub async fn list_risk_levels() -> Json<Vec<RiskLevelInfo>> {
    let levels = RiskLevel::ALL
        .into_iter()
        .map(|level| {
            let band = level.band();
            RiskLevelInfo {
                level,
                label: level.label(),
                min_score: *band.start(),
                max_score: *band.end(),
                recommendations: recommendations(level),
            }
        })
        .collect();
    Json(levels)
}
