//! Questionnaire input types and form normalization.
//!
//! The raw form arrives as strings exactly as the browser held them.
//! [`QuestionnaireForm::normalize`] turns it into a typed
//! [`QuestionnaireResponse`] and never fails: anything it cannot read
//! resolves to "absent" or `Unspecified`, which score zero points.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// A single-choice questionnaire field with a fixed set of wire names.
pub trait Selection: Copy + PartialEq + 'static {
    /// Recognized option values, in form order.
    const OPTIONS: &'static [(&'static str, Self)];

    /// Value used for empty or unrecognized input.
    const UNSPECIFIED: Self;

    /// Resolve a raw form value. Case-insensitive, surrounding whitespace ignored.
    fn from_form(raw: &str) -> Self {
        let raw = raw.trim();
        Self::OPTIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(raw))
            .map(|(_, value)| *value)
            .unwrap_or(Self::UNSPECIFIED)
    }

    /// The wire name, or `None` for `Unspecified`.
    fn wire_name(self) -> Option<&'static str> {
        Self::OPTIONS
            .iter()
            .find(|(_, value)| *value == self)
            .map(|(name, _)| *name)
    }
}

/// Wire values deserialize through [`Selection::from_form`], so stored and
/// submitted JSON accept the same spellings the form does.
macro_rules! deserialize_selection {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let raw = String::deserialize(deserializer)?;
                    Ok(<$ty as Selection>::from_form(&raw))
                }
            }
        )+
    };
}

deserialize_selection!(
    HypertensionStatus,
    DiabetesStatus,
    HeartbeatFeeling,
    CholesterolStatus,
    SmokingStatus,
    AlcoholConsumption,
    ExerciseFrequency,
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HypertensionStatus {
    /// Diagnosed.
    Yes,
    Suspected,
    No,
    #[default]
    Unspecified,
}

impl Selection for HypertensionStatus {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("yes", Self::Yes),
        ("suspected", Self::Suspected),
        ("no", Self::No),
    ];
    const UNSPECIFIED: Self = Self::Unspecified;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DiabetesStatus {
    Type1,
    Type2,
    Prediabetic,
    No,
    Unsure,
    #[default]
    Unspecified,
}

impl Selection for DiabetesStatus {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("type1", Self::Type1),
        ("type2", Self::Type2),
        ("prediabetic", Self::Prediabetic),
        ("no", Self::No),
        ("unsure", Self::Unsure),
    ];
    const UNSPECIFIED: Self = Self::Unspecified;
}

/// How the patient's heartbeat feels at the time of filling the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HeartbeatFeeling {
    Normal,
    /// Fast or palpitations.
    Fast,
    Slow,
    Irregular,
    Unsure,
    #[default]
    Unspecified,
}

impl Selection for HeartbeatFeeling {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("normal", Self::Normal),
        ("fast", Self::Fast),
        ("slow", Self::Slow),
        ("irregular", Self::Irregular),
        ("unsure", Self::Unsure),
    ];
    const UNSPECIFIED: Self = Self::Unspecified;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CholesterolStatus {
    /// Diagnosed high cholesterol.
    High,
    Borderline,
    Normal,
    Unsure,
    #[default]
    Unspecified,
}

impl Selection for CholesterolStatus {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("high", Self::High),
        ("borderline", Self::Borderline),
        ("normal", Self::Normal),
        ("unsure", Self::Unsure),
    ];
    const UNSPECIFIED: Self = Self::Unspecified;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
    #[default]
    Unspecified,
}

impl Selection for SmokingStatus {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("never", Self::Never),
        ("former", Self::Former),
        ("current", Self::Current),
    ];
    const UNSPECIFIED: Self = Self::Unspecified;
}

/// Collected and stored, not scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AlcoholConsumption {
    None,
    Occasional,
    Moderate,
    Heavy,
    #[default]
    Unspecified,
}

impl Selection for AlcoholConsumption {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", Self::None),
        ("occasional", Self::Occasional),
        ("moderate", Self::Moderate),
        ("heavy", Self::Heavy),
    ];
    const UNSPECIFIED: Self = Self::Unspecified;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ExerciseFrequency {
    Never,
    Rarely,
    Weekly,
    Daily,
    #[default]
    Unspecified,
}

impl Selection for ExerciseFrequency {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("never", Self::Never),
        ("rarely", Self::Rarely),
        ("weekly", Self::Weekly),
        ("daily", Self::Daily),
    ];
    const UNSPECIFIED: Self = Self::Unspecified;
}

/// A normalized questionnaire, built once per form submission.
///
/// Missing fields deserialize to their defaults (absent / `Unspecified`),
/// so a partially filled questionnaire is always accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct QuestionnaireResponse {
    /// Years. `None` scores the same as an age of 0.
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub hypertension_status: HypertensionStatus,
    pub diabetes_status: DiabetesStatus,
    pub heartbeat_feeling: HeartbeatFeeling,
    pub cholesterol_status: CholesterolStatus,
    pub smoking_status: SmokingStatus,
    pub alcohol_consumption: AlcoholConsumption,
    pub exercise_frequency: ExerciseFrequency,
    pub symptoms: BTreeSet<String>,
    /// Free text, stored for audit only.
    pub notes: Option<String>,
}

/// The questionnaire as submitted by the form, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct QuestionnaireForm {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub hypertension: String,
    pub diabetes: String,
    pub heartbeat_feeling: String,
    pub cholesterol: String,
    pub smoking_status: String,
    pub alcohol_consumption: String,
    pub exercise_frequency: String,
    pub symptoms: Vec<String>,
    pub notes: String,
}

impl QuestionnaireForm {
    pub fn normalize(&self) -> QuestionnaireResponse {
        let notes = self.notes.trim();

        QuestionnaireResponse {
            age: parse_age(&self.age),
            weight_kg: parse_measurement(&self.weight),
            height_cm: parse_measurement(&self.height),
            hypertension_status: HypertensionStatus::from_form(&self.hypertension),
            diabetes_status: DiabetesStatus::from_form(&self.diabetes),
            heartbeat_feeling: HeartbeatFeeling::from_form(&self.heartbeat_feeling),
            cholesterol_status: CholesterolStatus::from_form(&self.cholesterol),
            smoking_status: SmokingStatus::from_form(&self.smoking_status),
            alcohol_consumption: AlcoholConsumption::from_form(&self.alcohol_consumption),
            exercise_frequency: ExerciseFrequency::from_form(&self.exercise_frequency),
            symptoms: self
                .symptoms
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

/// Read the leading integer of a free-text age (`"45"`, `"45.7"`, `"45 years"`).
///
/// Empty, non-numeric and negative input yields `None`. Digit runs too long
/// for a `u32` saturate rather than being discarded.
pub fn parse_age(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let digits = &unsigned[..digits_len];
    if negative {
        // "-0" is still zero
        return digits.bytes().all(|b| b == b'0').then_some(0);
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn parse_measurement(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
