use crate::engine::{score, score_item, ScoredItem};
use crate::types::period::{PeriodScore, ScoreGroup};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredGroup {
    pub name: String,
    pub target: f64,
    pub actual: f64,
    pub weight: f64,
    pub percent: f64,
    pub contribution: f64,
    pub auto_calculate: bool,
    pub items: Vec<ScoredItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    pub period: String,
    pub total_score: f64,
    pub groups: Vec<ScoredGroup>,
}

/// Scores one group. Auto-calculate groups derive target/actual from their
/// items; otherwise the stored group fields are authoritative. Item weights
/// and the group weight are siblings in the same overall weighted sum, so
/// items are scored with their own weights regardless of the group total.
pub fn score_group(group: &ScoreGroup, cap: f64) -> ScoredGroup {
    let (target, actual) = if group.auto_calculate {
        (
            group.items.iter().map(|item| item.target).sum(),
            group.items.iter().map(|item| item.actual).sum(),
        )
    } else {
        (group.target, group.actual)
    };

    let scored = score(target, actual, group.weight, cap);
    let items = group
        .items
        .iter()
        .map(|item| score_item(item, cap))
        .collect();

    ScoredGroup {
        name: group.name.clone(),
        target,
        actual,
        weight: group.weight,
        percent: scored.percent,
        contribution: scored.contribution,
        auto_calculate: group.auto_calculate,
        items,
    }
}

/// Scores a whole period. The total is the sum of every group contribution
/// plus every item contribution; the exclusive-weight convention that makes
/// this a 0..=cap scale is checked by the lint pass, not here.
pub fn score_period(period: &PeriodScore, cap: f64) -> PeriodSummary {
    let groups: Vec<ScoredGroup> = period
        .groups
        .iter()
        .map(|group| score_group(group, cap))
        .collect();

    let total_score = groups
        .iter()
        .map(|group| {
            group.contribution
                + group
                    .items
                    .iter()
                    .map(|item| item.contribution)
                    .sum::<f64>()
        })
        .sum();

    PeriodSummary {
        period: period.period.clone(),
        total_score,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DEFAULT_ACHIEVEMENT_CAP;
    use crate::types::period::ScoreItem;

    fn item(name: &str, target: f64, actual: f64, weight: f64) -> ScoreItem {
        ScoreItem {
            name: name.to_string(),
            target,
            actual,
            weight,
        }
    }

    fn auto_group(items: Vec<ScoreItem>) -> ScoreGroup {
        ScoreGroup {
            name: "Sales".to_string(),
            target: 0.0,
            actual: 0.0,
            weight: 0.0,
            auto_calculate: true,
            items,
        }
    }

    #[test]
    fn auto_calculate_sums_item_targets_and_actuals() {
        let group = auto_group(vec![
            item("a", 10.0, 5.0, 0.0),
            item("b", 20.0, 20.0, 0.0),
        ]);
        let scored = score_group(&group, DEFAULT_ACHIEVEMENT_CAP);
        assert_eq!(scored.target, 30.0);
        assert_eq!(scored.actual, 25.0);
    }

    #[test]
    fn manual_group_ignores_item_sums() {
        let mut group = auto_group(vec![item("a", 10.0, 5.0, 0.0)]);
        group.auto_calculate = false;
        group.target = 200.0;
        group.actual = 100.0;
        group.weight = 40.0;

        let scored = score_group(&group, DEFAULT_ACHIEVEMENT_CAP);
        assert_eq!(scored.target, 200.0);
        assert_eq!(scored.actual, 100.0);
        assert_eq!(scored.percent, 50.0);
        assert_eq!(scored.contribution, 20.0);
    }

    #[test]
    fn items_are_scored_with_their_own_weights() {
        let group = auto_group(vec![
            item("a", 100.0, 50.0, 20.0),
            item("b", 100.0, 150.0, 50.0),
        ]);
        let scored = score_group(&group, DEFAULT_ACHIEVEMENT_CAP);
        assert_eq!(scored.items[0].contribution, 10.0);
        assert_eq!(scored.items[1].contribution, 60.0);
        // informational group total, weight 0
        assert_eq!(scored.contribution, 0.0);
    }

    #[test]
    fn period_total_sums_group_and_item_contributions() {
        let period = PeriodScore {
            period: "2026-08".to_string(),
            groups: vec![
                auto_group(vec![
                    item("a", 100.0, 50.0, 20.0),
                    item("b", 100.0, 150.0, 50.0),
                ]),
                ScoreGroup {
                    name: "Admin".to_string(),
                    target: 10.0,
                    actual: 10.0,
                    weight: 30.0,
                    auto_calculate: false,
                    items: vec![],
                },
            ],
        };
        let summary = score_period(&period, DEFAULT_ACHIEVEMENT_CAP);
        // 10 + 60 from items, 30 from the manual group
        assert_eq!(summary.total_score, 100.0);
        assert_eq!(summary.period, "2026-08");
        assert_eq!(summary.groups.len(), 2);
    }

    #[test]
    fn empty_auto_group_scores_zero() {
        let scored = score_group(&auto_group(vec![]), DEFAULT_ACHIEVEMENT_CAP);
        assert_eq!(scored.target, 0.0);
        assert_eq!(scored.actual, 0.0);
        assert_eq!(scored.percent, 0.0);
        assert_eq!(scored.contribution, 0.0);
    }
}
