use crate::error::{Result, ScorecardError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One measurable criterion: planned target, reported actual, and the
/// percentage importance of the criterion within the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreItem {
    pub name: String,
    pub target: f64,
    pub actual: f64,
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreGroup {
    pub name: String,
    #[serde(default)]
    pub target: f64,
    #[serde(default)]
    pub actual: f64,
    #[serde(default)]
    pub weight: f64,
    /// When true, the group's target/actual are derived from its items
    /// and the stored fields are ignored.
    #[serde(default)]
    pub auto_calculate: bool,
    #[serde(default)]
    pub items: Vec<ScoreItem>,
}

/// One scoring snapshot for a month, persisted as a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodScore {
    pub period: String,
    #[serde(default)]
    pub groups: Vec<ScoreGroup>,
}

/// Checks that a period identifier is a real `YYYY-MM` month.
pub fn validate_period_id(period: &str) -> Result<()> {
    let padded = format!("{period}-01");
    match NaiveDate::parse_from_str(&padded, "%Y-%m-%d") {
        Ok(_) if period.len() == 7 => Ok(()),
        _ => Err(ScorecardError::InvalidPeriod(period.to_string())),
    }
}

impl PeriodScore {
    /// Structural validation applied at load time. Negative or non-finite
    /// targets/actuals and weights outside 0..=100 are rejected here so the
    /// scoring engine can stay guard-free.
    pub fn validate(&self) -> Result<()> {
        validate_period_id(&self.period)?;

        let mut group_names = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(self.document_error("group name must be non-empty"));
            }
            if !group_names.insert(group.name.as_str()) {
                return Err(
                    self.document_error(&format!("duplicate group name: {}", group.name))
                );
            }
            validate_measures(&self.period, &group.name, group.target, group.actual)?;
            validate_weight(&self.period, &group.name, group.weight)?;

            let mut item_names = HashSet::new();
            for item in &group.items {
                if item.name.trim().is_empty() {
                    return Err(self.document_error(&format!(
                        "item name must be non-empty in group {}",
                        group.name
                    )));
                }
                if !item_names.insert(item.name.as_str()) {
                    return Err(self.document_error(&format!(
                        "duplicate item name in group {}: {}",
                        group.name, item.name
                    )));
                }
                validate_measures(&self.period, &item.name, item.target, item.actual)?;
                validate_weight(&self.period, &item.name, item.weight)?;
            }
        }
        Ok(())
    }

    fn document_error(&self, body: &str) -> ScorecardError {
        ScorecardError::PeriodDocument(format!("{}: {}", self.period, body))
    }
}

fn validate_measures(period: &str, name: &str, target: f64, actual: f64) -> Result<()> {
    for (field, value) in [("target", target), ("actual", actual)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ScorecardError::PeriodDocument(format!(
                "{period}: {name}: {field} must be a finite non-negative number (found {value})"
            )));
        }
    }
    Ok(())
}

fn validate_weight(period: &str, name: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || !(0.0..=100.0).contains(&weight) {
        return Err(ScorecardError::PeriodDocument(format!(
            "{period}: {name}: weight must be between 0 and 100 (found {weight})"
        )));
    }
    Ok(())
}
