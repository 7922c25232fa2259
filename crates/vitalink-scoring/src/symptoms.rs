/// Symptoms offered by the questionnaire, in display order.
///
/// Scoring counts every selected label, including ones outside this list.
pub const SYMPTOM_CATALOG: &[&str] = &[
    "Chest pain",
    "Shortness of breath",
    "Dizziness",
    "Fatigue",
    "Headaches",
    "Numbness",
    "Vision changes",
    "Irregular heartbeat",
];

/// Whether a label is one the form offers.
pub fn is_catalog_symptom(label: &str) -> bool {
    SYMPTOM_CATALOG.contains(&label)
}
