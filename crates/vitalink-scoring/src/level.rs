use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    /// 0–25.
    Low,
    /// 26–50.
    Moderate,
    /// 51–75.
    High,
    /// 76–100.
    Critical,
}

impl RiskLevel {
    /// Every tier, lowest first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Scores that classify into this tier. Upper edges are inclusive.
    pub fn band(self) -> RangeInclusive<u8> {
        match self {
            RiskLevel::Low => 0..=25,
            RiskLevel::Moderate => 26..=50,
            RiskLevel::High => 51..=75,
            RiskLevel::Critical => 76..=100,
        }
    }

    /// Name used on the wire and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Capitalized label for badges and stat cards.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an overall score to its tier.
pub fn classify_risk_level(score: u8) -> RiskLevel {
    match score {
        0..=25 => RiskLevel::Low,
        26..=50 => RiskLevel::Moderate,
        51..=75 => RiskLevel::High,
        _ => RiskLevel::Critical,
    }
}
