use crate::engine::aggregate::PeriodSummary;
use crate::engine::trend::TrendPoint;
use crate::engine::ScoredItem;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Finding {
    pub fn new(id: &str, title: &str, body: String, blocking: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking,
            group: None,
        }
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub project: String,
    pub summary: PeriodSummary,
    pub at_risk: Vec<ScoredItem>,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub project: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub project: String,
    pub period: String,
    pub items: Vec<ScoredItem>,
}
