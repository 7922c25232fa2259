use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const CARDIAC_MULTIPLIER: f64 = 1.1;
pub const DIABETES_MULTIPLIER: f64 = 0.9;
pub const STROKE_MULTIPLIER: f64 = 0.85;

const SUB_RISK_CAP: f64 = 100.0;

/// Domain-specific estimates scaled from the overall score.
///
/// Values are left unrounded; rounding is up to whoever displays them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubRisks {
    pub cardiac: f64,
    pub diabetes: f64,
    pub stroke: f64,
}

/// Scale the overall score into the three sub-risks, capped at 100.
///
/// No lower cap: the score is non-negative and every multiplier is positive.
pub fn derive_sub_risks(overall_score: u8) -> SubRisks {
    let score = f64::from(overall_score);
    SubRisks {
        cardiac: (score * CARDIAC_MULTIPLIER).min(SUB_RISK_CAP),
        diabetes: (score * DIABETES_MULTIPLIER).min(SUB_RISK_CAP),
        stroke: (score * STROKE_MULTIPLIER).min(SUB_RISK_CAP),
    }
}
