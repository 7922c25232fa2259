pub mod health_metric;
pub mod risk_score;
pub mod submission;
