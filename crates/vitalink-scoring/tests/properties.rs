use vitalink_scoring::questionnaire::{
    CholesterolStatus, DiabetesStatus, ExerciseFrequency, HeartbeatFeeling, HypertensionStatus,
    QuestionnaireResponse, Selection, SmokingStatus,
};
use vitalink_scoring::{assess, compute_overall_score, derive_sub_risks};

/// Every option of a selection plus `Unspecified`.
fn all_values<T: Selection>() -> Vec<T> {
    let mut values: Vec<T> = T::OPTIONS.iter().map(|(_, value)| *value).collect();
    values.push(T::UNSPECIFIED);
    values
}

fn every_questionnaire() -> Vec<QuestionnaireResponse> {
    let mut out = Vec::new();
    for age in [None, Some(30), Some(45), Some(60), Some(80)] {
        for hypertension_status in all_values::<HypertensionStatus>() {
            for diabetes_status in all_values::<DiabetesStatus>() {
                for heartbeat_feeling in all_values::<HeartbeatFeeling>() {
                    for cholesterol_status in all_values::<CholesterolStatus>() {
                        for smoking_status in all_values::<SmokingStatus>() {
                            for exercise_frequency in all_values::<ExerciseFrequency>() {
                                out.push(QuestionnaireResponse {
                                    age,
                                    hypertension_status,
                                    diabetes_status,
                                    heartbeat_feeling,
                                    cholesterol_status,
                                    smoking_status,
                                    exercise_frequency,
                                    symptoms: ["Fatigue".to_string()].into(),
                                    ..Default::default()
                                });
                            }
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn score_is_bounded_and_assessment_is_deterministic() {
    for response in every_questionnaire() {
        let first = assess(&response);
        assert!(first.overall_score <= 100);
        assert!(first.risk_level.band().contains(&first.overall_score));
        assert!((0.0..=100.0).contains(&first.cardiac_risk));
        assert!((0.0..=100.0).contains(&first.diabetes_risk));
        assert!((0.0..=100.0).contains(&first.stroke_risk));

        let second = assess(&response.clone());
        assert_eq!(first, second);
        assert_eq!(first.cardiac_risk.to_bits(), second.cardiac_risk.to_bits());
    }
}

#[test]
fn increasing_age_never_lowers_the_score() {
    for base in every_questionnaire().into_iter().step_by(97) {
        let mut previous = 0;
        for age in 40..=66 {
            let score = compute_overall_score(&QuestionnaireResponse {
                age: Some(age),
                ..base.clone()
            });
            assert!(score >= previous, "age {age} lowered the score");
            previous = score;
        }
    }
}

#[test]
fn sub_risks_keep_multiplier_order() {
    for score in 0..=100u8 {
        let risks = derive_sub_risks(score);
        assert!(risks.cardiac >= risks.diabetes, "score {score}");
        assert!(risks.diabetes >= risks.stroke, "score {score}");
    }
}

#[test]
fn sub_risks_scale_and_cap() {
    let risks = derive_sub_risks(50);
    assert!((risks.cardiac - 55.0).abs() < 1e-9);
    assert!((risks.diabetes - 45.0).abs() < 1e-9);
    assert!((risks.stroke - 42.5).abs() < 1e-9);

    // 91 × 1.1 is past the cap; the other two are not
    let risks = derive_sub_risks(91);
    assert_eq!(risks.cardiac, 100.0);
    assert!((risks.diabetes - 81.9).abs() < 1e-9);
    assert!((risks.stroke - 77.35).abs() < 1e-9);
}

#[test]
fn sub_risks_are_monotonic_in_score() {
    let mut previous = derive_sub_risks(0);
    for score in 1..=100u8 {
        let current = derive_sub_risks(score);
        assert!(current.cardiac >= previous.cardiac);
        assert!(current.diabetes >= previous.diabetes);
        assert!(current.stroke >= previous.stroke);
        previous = current;
    }
}

#[test]
fn assessments_can_be_computed_concurrently() {
    let responses = every_questionnaire();
    let expected: Vec<_> = responses.iter().take(64).map(assess).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| responses.iter().take(64).map(assess).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
