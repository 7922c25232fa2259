use vitalink_scoring::questionnaire::{
    parse_age, AlcoholConsumption, CholesterolStatus, DiabetesStatus, ExerciseFrequency,
    HeartbeatFeeling, HypertensionStatus, QuestionnaireForm, QuestionnaireResponse, Selection,
    SmokingStatus,
};
use vitalink_scoring::symptoms::{is_catalog_symptom, SYMPTOM_CATALOG};
use vitalink_scoring::{assess, compute_overall_score};

#[test]
fn age_parsing() {
    assert_eq!(parse_age("45"), Some(45));
    assert_eq!(parse_age("  45  "), Some(45));
    assert_eq!(parse_age("45.7"), Some(45));
    assert_eq!(parse_age("45 years"), Some(45));
    assert_eq!(parse_age("+70"), Some(70));
    assert_eq!(parse_age("0"), Some(0));
    assert_eq!(parse_age("-0"), Some(0));
    assert_eq!(parse_age(""), None);
    assert_eq!(parse_age("   "), None);
    assert_eq!(parse_age("abc"), None);
    assert_eq!(parse_age("-5"), None);
    assert_eq!(parse_age("-"), None);
    assert_eq!(parse_age("99999999999"), Some(u32::MAX));
}

#[test]
fn missing_and_zero_age_score_the_same() {
    let absent = QuestionnaireResponse::default();
    let zero = QuestionnaireResponse {
        age: Some(0),
        ..Default::default()
    };
    assert_eq!(compute_overall_score(&absent), compute_overall_score(&zero));
}

#[test]
fn selections_are_case_insensitive_and_trimmed() {
    assert_eq!(HypertensionStatus::from_form(" YES "), HypertensionStatus::Yes);
    assert_eq!(DiabetesStatus::from_form("Type2"), DiabetesStatus::Type2);
    assert_eq!(HeartbeatFeeling::from_form("irregular"), HeartbeatFeeling::Irregular);
    assert_eq!(CholesterolStatus::from_form("Borderline"), CholesterolStatus::Borderline);
    assert_eq!(SmokingStatus::from_form("current"), SmokingStatus::Current);
    assert_eq!(ExerciseFrequency::from_form("DAILY"), ExerciseFrequency::Daily);
    assert_eq!(AlcoholConsumption::from_form("heavy"), AlcoholConsumption::Heavy);
}

#[test]
fn unknown_selections_fall_through_to_unspecified() {
    assert_eq!(HypertensionStatus::from_form(""), HypertensionStatus::Unspecified);
    assert_eq!(DiabetesStatus::from_form("type 3"), DiabetesStatus::Unspecified);
    assert_eq!(HeartbeatFeeling::from_form("racing"), HeartbeatFeeling::Unspecified);
    assert_eq!(SmokingStatus::from_form("sometimes"), SmokingStatus::Unspecified);
    assert_eq!(HeartbeatFeeling::Unspecified.wire_name(), None);
    assert_eq!(DiabetesStatus::Prediabetic.wire_name(), Some("prediabetic"));
}

#[test]
fn unknown_wire_values_deserialize_as_unspecified() {
    let response: QuestionnaireResponse = serde_json::from_str(
        r#"{
            "age": 52,
            "hypertension_status": "maybe",
            "smoking_status": "current",
            "exercise_frequency": "hourly"
        }"#,
    )
    .unwrap();

    assert_eq!(response.hypertension_status, HypertensionStatus::Unspecified);
    assert_eq!(response.exercise_frequency, ExerciseFrequency::Unspecified);
    assert_eq!(response.diabetes_status, DiabetesStatus::Unspecified);
    assert_eq!(compute_overall_score(&response), 35);
}

#[test]
fn wire_values_accept_the_same_spellings_as_the_form() {
    let response: QuestionnaireResponse = serde_json::from_str(
        r#"{
            "age": 52,
            "hypertension_status": " Suspected ",
            "diabetes_status": "Type1",
            "smoking_status": "CURRENT"
        }"#,
    )
    .unwrap();

    assert_eq!(response.hypertension_status, HypertensionStatus::Suspected);
    assert_eq!(response.diabetes_status, DiabetesStatus::Type1);
    assert_eq!(response.smoking_status, SmokingStatus::Current);
    assert_eq!(compute_overall_score(&response), 15 + 12 + 25 + 20);
}

#[test]
fn stored_questionnaire_reads_back_unchanged() {
    let form = QuestionnaireForm {
        age: "61".to_string(),
        diabetes: "prediabetic".to_string(),
        ..Default::default()
    };
    let response = form.normalize();

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains(r#""hypertension_status":"unspecified""#));
    let back: QuestionnaireResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, response);
}

#[test]
fn non_string_selection_is_rejected() {
    let result = serde_json::from_str::<QuestionnaireResponse>(r#"{ "smoking_status": 3 }"#);
    assert!(result.is_err());
}

#[test]
fn empty_form_normalizes_to_empty_questionnaire() {
    let response = QuestionnaireForm::default().normalize();
    assert_eq!(response, QuestionnaireResponse::default());
    assert_eq!(assess(&response).overall_score, 0);
}

#[test]
fn full_form_normalization() {
    let form = QuestionnaireForm {
        age: "70".to_string(),
        weight: "82.5".to_string(),
        height: "not sure".to_string(),
        hypertension: "yes".to_string(),
        diabetes: "type2".to_string(),
        heartbeat_feeling: "irregular".to_string(),
        cholesterol: "high".to_string(),
        smoking_status: "current".to_string(),
        alcohol_consumption: "moderate".to_string(),
        exercise_frequency: "never".to_string(),
        symptoms: vec![
            "Dizziness".to_string(),
            " Dizziness ".to_string(),
            "".to_string(),
            "Fatigue".to_string(),
        ],
        notes: "  ".to_string(),
    };

    let response = form.normalize();
    assert_eq!(response.age, Some(70));
    assert_eq!(response.weight_kg, Some(82.5));
    assert_eq!(response.height_cm, None);
    assert_eq!(response.alcohol_consumption, AlcoholConsumption::Moderate);
    assert_eq!(response.symptoms.len(), 2);
    assert_eq!(response.notes, None);
    assert_eq!(compute_overall_score(&response), 100);
}

#[test]
fn non_finite_measurements_are_dropped() {
    let form = QuestionnaireForm {
        weight: "NaN".to_string(),
        height: "inf".to_string(),
        ..Default::default()
    };
    let response = form.normalize();
    assert_eq!(response.weight_kg, None);
    assert_eq!(response.height_cm, None);
}

#[test]
fn off_catalog_symptoms_still_count() {
    let form = QuestionnaireForm {
        symptoms: vec!["Chest pain".to_string(), "Back pain".to_string()],
        ..Default::default()
    };
    let response = form.normalize();
    assert!(is_catalog_symptom("Chest pain"));
    assert!(!is_catalog_symptom("Back pain"));
    assert_eq!(compute_overall_score(&response), 10);
}

#[test]
fn catalog_has_eight_distinct_symptoms() {
    let mut labels = SYMPTOM_CATALOG.to_vec();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), 8);
}
