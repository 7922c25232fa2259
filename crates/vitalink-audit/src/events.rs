use std::fmt;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A record was written for the first time.
    Created,
    /// A repeated submission resolved to an existing record.
    Replayed,
    /// A record was read back.
    Viewed,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuditAction::Created => "created",
            AuditAction::Replayed => "replayed",
            AuditAction::Viewed => "viewed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    HealthMetric,
    RiskScore,
    Submission,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceType::HealthMetric => "health_metric",
            ResourceType::RiskScore => "risk_score",
            ResourceType::Submission => "submission",
        })
    }
}

/// A structured audit event for a health record.
///
/// Events are logged via `tracing` so they land in CloudWatch Logs next to
/// the request log. Details never carry questionnaire answers, only ids and
/// derived values.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub resource_type: ResourceType,
    pub resource_id: Uuid,
    pub user_id: Uuid,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: AuditAction,
        resource_type: ResourceType,
        resource_id: Uuid,
        user_id: Uuid,
    ) -> Self {
        Self {
            action,
            resource_type,
            resource_id,
            user_id,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.user_id = %self.user_id,
            audit.details = %details,
            "audit event"
        );
    }
}
