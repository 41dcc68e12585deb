use crate::engine::aggregate::score_period;
use crate::types::period::PeriodScore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period: String,
    pub total_score: f64,
}

/// Reduces historical periods to one total score per month, sorted ascending
/// by period identifier. Missing months are not interpolated.
pub fn compute_trend(periods: &[PeriodScore], cap: f64) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = periods
        .iter()
        .map(|period| {
            let summary = score_period(period, cap);
            TrendPoint {
                period: summary.period,
                total_score: summary.total_score,
            }
        })
        .collect();
    points.sort_by(|a, b| a.period.cmp(&b.period));
    points
}
