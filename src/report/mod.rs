pub mod json;
pub mod md;

use crate::error::ScorecardError;
use crate::types::report::{PeriodReport, RiskReport, TrendReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_period(report: &PeriodReport, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::period_markdown(report)),
    }
}

pub fn render_trend(report: &TrendReport, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::trend_markdown(report)),
    }
}

pub fn render_risk(report: &RiskReport, format: OutputFormat) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::risk_markdown(report)),
    }
}
