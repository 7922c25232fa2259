use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::questionnaire::{
    CholesterolStatus, DiabetesStatus, ExerciseFrequency, HeartbeatFeeling, HypertensionStatus,
    QuestionnaireResponse, SmokingStatus,
};

/// Upper bound of the overall score.
pub const MAX_SCORE: u8 = 100;

/// Points added per selected symptom.
pub const POINTS_PER_SYMPTOM: i32 = 5;

/// Points contributed by each rule group, before clamping.
///
/// Each group reads its own field only; the groups are summed, so evaluation
/// order has no effect on the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub age: i32,
    pub hypertension: i32,
    pub diabetes: i32,
    pub heartbeat: i32,
    pub cholesterol: i32,
    pub smoking: i32,
    /// Negative for daily exercise.
    pub exercise: i32,
    pub symptoms: i32,
}

impl ScoreBreakdown {
    /// Unclamped sum of every group.
    pub fn raw_total(&self) -> i64 {
        [
            self.age,
            self.hypertension,
            self.diabetes,
            self.heartbeat,
            self.cholesterol,
            self.smoking,
            self.exercise,
            self.symptoms,
        ]
        .iter()
        .map(|points| i64::from(*points))
        .sum()
    }

    /// The total clamped to `[0, MAX_SCORE]`.
    pub fn clamped(&self) -> u8 {
        // The clamp guarantees the value fits in a u8.
        self.raw_total().clamp(0, i64::from(MAX_SCORE)) as u8
    }
}

/// Evaluate every rule group for a questionnaire.
pub fn score_breakdown(response: &QuestionnaireResponse) -> ScoreBreakdown {
    ScoreBreakdown {
        age: age_points(response.age),
        hypertension: hypertension_points(response.hypertension_status),
        diabetes: diabetes_points(response.diabetes_status),
        heartbeat: heartbeat_points(response.heartbeat_feeling),
        cholesterol: cholesterol_points(response.cholesterol_status),
        smoking: smoking_points(response.smoking_status),
        exercise: exercise_points(response.exercise_frequency),
        symptoms: symptom_points(response.symptoms.len()),
    }
}

/// Overall risk score in `[0, 100]`.
pub fn compute_overall_score(response: &QuestionnaireResponse) -> u8 {
    score_breakdown(response).clamped()
}

/// Bands are exclusive: a 70-year-old scores 25, not 25 + 15 + 10.
fn age_points(age: Option<u32>) -> i32 {
    match age.unwrap_or(0) {
        66.. => 25,
        51..=65 => 15,
        41..=50 => 10,
        _ => 0,
    }
}

fn hypertension_points(status: HypertensionStatus) -> i32 {
    match status {
        HypertensionStatus::Yes => 25,
        HypertensionStatus::Suspected => 12,
        HypertensionStatus::No | HypertensionStatus::Unspecified => 0,
    }
}

fn diabetes_points(status: DiabetesStatus) -> i32 {
    match status {
        DiabetesStatus::Type1 | DiabetesStatus::Type2 => 25,
        DiabetesStatus::Prediabetic => 12,
        DiabetesStatus::Unsure => 5,
        DiabetesStatus::No | DiabetesStatus::Unspecified => 0,
    }
}

fn heartbeat_points(feeling: HeartbeatFeeling) -> i32 {
    match feeling {
        HeartbeatFeeling::Irregular => 20,
        HeartbeatFeeling::Fast => 15,
        HeartbeatFeeling::Slow => 10,
        HeartbeatFeeling::Unsure => 5,
        HeartbeatFeeling::Normal | HeartbeatFeeling::Unspecified => 0,
    }
}

fn cholesterol_points(status: CholesterolStatus) -> i32 {
    match status {
        CholesterolStatus::High => 20,
        CholesterolStatus::Borderline => 10,
        CholesterolStatus::Normal | CholesterolStatus::Unsure | CholesterolStatus::Unspecified => 0,
    }
}

fn smoking_points(status: SmokingStatus) -> i32 {
    match status {
        SmokingStatus::Current => 20,
        SmokingStatus::Former => 5,
        SmokingStatus::Never | SmokingStatus::Unspecified => 0,
    }
}

fn exercise_points(frequency: ExerciseFrequency) -> i32 {
    match frequency {
        ExerciseFrequency::Never => 10,
        ExerciseFrequency::Rarely => 5,
        ExerciseFrequency::Daily => -10,
        ExerciseFrequency::Weekly | ExerciseFrequency::Unspecified => 0,
    }
}

fn symptom_points(count: usize) -> i32 {
    i32::try_from(count)
        .unwrap_or(i32::MAX)
        .saturating_mul(POINTS_PER_SYMPTOM)
}
