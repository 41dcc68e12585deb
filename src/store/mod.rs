use crate::error::{Result, ScorecardError};
use crate::types::config::ScorecardConfig;
use crate::types::period::PeriodScore;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub fn periods_dir(root: &Path, config: &ScorecardConfig) -> PathBuf {
    root.join(config.periods_dir())
}

fn list_period_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext == "json")
                .unwrap_or(false)
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    files
}

fn read_period_file(path: &Path) -> Result<PeriodScore> {
    let raw = std::fs::read_to_string(path)?;
    let period: PeriodScore = serde_json::from_str(&raw).map_err(|e| {
        ScorecardError::PeriodDocument(format!("{}: {}", path.display(), e))
    })?;
    period.validate()?;
    Ok(period)
}

/// Loads every period document under the configured periods directory,
/// validated and sorted ascending by period. Duplicate period identifiers
/// across files are an error since documents are whole-period snapshots.
pub fn discover_periods(root: &Path, config: &ScorecardConfig) -> Result<Vec<PeriodScore>> {
    let dir = periods_dir(root, config);
    if !dir.exists() {
        return Err(ScorecardError::PathNotFound(dir.display().to_string()));
    }

    let mut seen = HashSet::new();
    let mut periods = Vec::new();
    for path in list_period_files(&dir) {
        let period = read_period_file(&path)?;
        debug!(path = %path.display(), period = %period.period, "loaded period document");
        if !seen.insert(period.period.clone()) {
            return Err(ScorecardError::DuplicatePeriod(period.period));
        }
        periods.push(period);
    }
    periods.sort_by(|a, b| a.period.cmp(&b.period));
    Ok(periods)
}

/// Loads one period by identifier, or the latest when none is given.
pub fn load_period(
    root: &Path,
    config: &ScorecardConfig,
    period: Option<&str>,
) -> Result<PeriodScore> {
    let periods = discover_periods(root, config)?;
    match period {
        Some(id) => periods
            .into_iter()
            .find(|p| p.period == id)
            .ok_or_else(|| ScorecardError::PeriodNotFound(id.to_string())),
        None => periods
            .into_iter()
            .next_back()
            .ok_or_else(|| ScorecardError::PeriodNotFound("no period documents".to_string())),
    }
}
