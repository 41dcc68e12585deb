use crate::engine::{score_item, ScoredItem};
use crate::types::period::PeriodScore;

/// Returns every measurable, weighted item running below the threshold,
/// worst first. Items with no target or no weight are informational and
/// never listed.
pub fn at_risk_items(period: &PeriodScore, cap: f64, threshold: f64) -> Vec<ScoredItem> {
    let mut items: Vec<ScoredItem> = period
        .groups
        .iter()
        .flat_map(|group| group.items.iter())
        .filter(|item| item.target > 0.0 && item.weight > 0.0)
        .map(|item| score_item(item, cap))
        .filter(|scored| scored.percent < threshold)
        .collect();

    items.sort_by(|a, b| {
        a.percent
            .partial_cmp(&b.percent)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    items
}
