//! Fixed recommendation lists per risk tier.
//!
//! Order is significant: entries run from general prevention to the most
//! urgent action, and callers display them top to bottom.

use crate::level::RiskLevel;

const LOW: &[&str] = &[
    "Continue maintaining a healthy lifestyle",
    "Schedule annual health checkups",
    "Stay physically active",
];

const MODERATE: &[&str] = &[
    "Consider scheduling a consultation with a healthcare provider",
    "Monitor your blood pressure regularly",
    "Improve diet and increase physical activity",
    "Reduce stress through relaxation techniques",
];

const HIGH: &[&str] = &[
    "Schedule an appointment with a doctor soon",
    "Monitor your vital signs daily",
    "Make immediate lifestyle changes",
    "Consider medication consultation",
    "Avoid smoking and limit alcohol",
];

const CRITICAL: &[&str] = &[
    "Seek immediate medical attention",
    "Contact your healthcare provider urgently",
    "Monitor symptoms closely",
    "Have someone available to assist if needed",
    "Keep emergency contacts readily available",
];

/// The static recommendation table for a tier.
pub fn recommendations(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => LOW,
        RiskLevel::Moderate => MODERATE,
        RiskLevel::High => HIGH,
        RiskLevel::Critical => CRITICAL,
    }
}

/// Owned copy of a tier's recommendations, as stored with an assessment.
pub fn build_recommendations(level: RiskLevel) -> Vec<String> {
    recommendations(level)
        .iter()
        .map(|r| r.to_string())
        .collect()
}

/// Look up recommendations by tier name, e.g. for records read back from
/// storage. An unrecognized name yields an empty list.
pub fn recommendations_for_label(name: &str) -> Vec<String> {
    RiskLevel::from_wire(name)
        .map(build_recommendations)
        .unwrap_or_default()
}
