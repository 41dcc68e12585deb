pub mod aggregate;
pub mod risk;
pub mod trend;

use crate::types::period::ScoreItem;
use serde::Serialize;

/// Default clamp on achievement before weighting, so one over-performing
/// criterion cannot dominate the weighted total.
pub const DEFAULT_ACHIEVEMENT_CAP: f64 = 120.0;

/// Result of scoring one target/actual pair against a weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored {
    /// Raw achievement as a percentage of target, uncapped.
    pub percent: f64,
    /// Achievement clamped at the cap, the value that is weighted.
    pub capped_percent: f64,
    /// Weighted share of the overall score.
    pub contribution: f64,
}

/// Scores one criterion. A non-positive target means "not measurable" and
/// yields 0%, never an error or infinity; a zero weight contributes nothing.
pub fn score(target: f64, actual: f64, weight: f64, cap: f64) -> Scored {
    let percent = if target > 0.0 {
        (actual / target) * 100.0
    } else {
        0.0
    };
    let capped_percent = percent.min(cap);
    let contribution = if weight > 0.0 {
        (capped_percent * weight) / 100.0
    } else {
        0.0
    };

    Scored {
        percent,
        capped_percent,
        contribution,
    }
}

/// An item together with its computed score, as carried in reports.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    pub name: String,
    pub target: f64,
    pub actual: f64,
    pub weight: f64,
    pub percent: f64,
    pub contribution: f64,
}

pub fn score_item(item: &ScoreItem, cap: f64) -> ScoredItem {
    let scored = score(item.target, item.actual, item.weight, cap);
    ScoredItem {
        name: item.name.clone(),
        target: item.target,
        actual: item.actual,
        weight: item.weight,
        percent: scored.percent,
        contribution: scored.contribution,
    }
}
