use crate::error::ScorecardError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ScorecardConfig {
    pub project: ProjectConfig,
    pub scoring: Option<ScoringConfig>,
    pub data: Option<DataConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub achievement_cap: Option<f64>,
    pub at_risk_threshold: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub periods_dir: Option<String>,
}

pub use crate::engine::DEFAULT_ACHIEVEMENT_CAP;
pub const DEFAULT_AT_RISK_THRESHOLD: f64 = 100.0;
pub const DEFAULT_PERIODS_DIR: &str = "periods";

impl ScorecardConfig {
    pub fn achievement_cap(&self) -> f64 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.achievement_cap)
            .unwrap_or(DEFAULT_ACHIEVEMENT_CAP)
    }

    pub fn at_risk_threshold(&self) -> f64 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.at_risk_threshold)
            .unwrap_or(DEFAULT_AT_RISK_THRESHOLD)
    }

    pub fn periods_dir(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.periods_dir.as_deref())
            .unwrap_or(DEFAULT_PERIODS_DIR)
    }

    pub fn validate(&self) -> Result<(), ScorecardError> {
        if self.project.name.trim().is_empty() {
            return Err(ScorecardError::ConfigParse(
                "project.name must be non-empty".to_string(),
            ));
        }

        let cap = self.achievement_cap();
        if !cap.is_finite() || cap <= 0.0 {
            return Err(ScorecardError::ConfigParse(format!(
                "scoring.achievement_cap must be a positive number (found {cap})"
            )));
        }

        let threshold = self.at_risk_threshold();
        if !threshold.is_finite() || !(0.0..=200.0).contains(&threshold) {
            return Err(ScorecardError::ConfigParse(format!(
                "scoring.at_risk_threshold must be between 0 and 200 (found {threshold})"
            )));
        }

        if self.periods_dir().trim().is_empty() {
            return Err(ScorecardError::ConfigParse(
                "data.periods_dir must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
