use crate::types::period::PeriodScore;
use crate::types::report::Finding;

const WEIGHT_EPSILON: f64 = 0.001;

/// Checks the data-entry conventions the scoring arithmetic itself does not
/// enforce. The engine always computes the sum the document implies; these
/// findings surface the cases where that sum is not a meaningful 0..=cap
/// score.
pub fn weight_findings(period: &PeriodScore) -> Vec<Finding> {
    let mut findings = Vec::new();

    if period.groups.is_empty() {
        findings.push(Finding::new(
            "period.empty",
            "Period has no groups",
            format!("Period {} contains no score groups.", period.period),
            false,
        ));
        return findings;
    }

    let mut effective_weight = 0.0;
    for group in &period.groups {
        let item_weight: f64 = group.items.iter().map(|item| item.weight).sum();
        effective_weight += group.weight + item_weight;

        if group.weight > 0.0 && group.items.iter().any(|item| item.weight > 0.0) {
            findings.push(
                Finding::new(
                    "weights.double_counted",
                    "Group and item weights both set",
                    format!(
                        "Group {} carries weight {} while its items also carry weight; \
                         both are summed into the total, so the group score is counted twice. \
                         Move the weight to either the group or its items.",
                        group.name, group.weight
                    ),
                    true,
                )
                .in_group(&group.name),
            );
        }

        if group.auto_calculate && group.items.is_empty() {
            findings.push(
                Finding::new(
                    "group.auto_empty",
                    "Auto-calculated group has no items",
                    format!(
                        "Group {} derives its totals from items but has none; \
                         it will always score 0%.",
                        group.name
                    ),
                    false,
                )
                .in_group(&group.name),
            );
        }
    }

    if effective_weight > 100.0 + WEIGHT_EPSILON {
        findings.push(Finding::new(
            "weights.oversubscribed",
            "Weights sum above 100",
            format!(
                "Effective weights in {} sum to {:.1}; totals above 100 inflate the period score.",
                period.period, effective_weight
            ),
            false,
        ));
    } else if effective_weight < 100.0 - WEIGHT_EPSILON {
        findings.push(Finding::new(
            "weights.incomplete",
            "Weights sum below 100",
            format!(
                "Effective weights in {} sum to {:.1}; the period score cannot reach 100.",
                period.period, effective_weight
            ),
            false,
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::period::{ScoreGroup, ScoreItem};

    fn item(weight: f64) -> ScoreItem {
        ScoreItem {
            name: format!("item-{weight}"),
            target: 10.0,
            actual: 5.0,
            weight,
        }
    }

    fn group(name: &str, weight: f64, items: Vec<ScoreItem>) -> ScoreGroup {
        ScoreGroup {
            name: name.to_string(),
            target: 10.0,
            actual: 5.0,
            weight,
            auto_calculate: false,
            items,
        }
    }

    fn period(groups: Vec<ScoreGroup>) -> PeriodScore {
        PeriodScore {
            period: "2026-08".to_string(),
            groups,
        }
    }

    #[test]
    fn flags_double_counted_weights_as_blocking() {
        let findings = weight_findings(&period(vec![group(
            "Sales",
            40.0,
            vec![item(30.0), item(30.0)],
        )]));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "weights.double_counted" && finding.blocking));
    }

    #[test]
    fn exclusive_weights_at_100_are_clean() {
        let findings = weight_findings(&period(vec![
            group("Sales", 0.0, vec![item(40.0), item(30.0)]),
            group("Admin", 30.0, vec![]),
        ]));
        assert!(findings.is_empty());
    }

    #[test]
    fn warns_on_oversubscribed_weights() {
        let findings = weight_findings(&period(vec![
            group("Sales", 0.0, vec![item(60.0), item(60.0)]),
        ]));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "weights.oversubscribed" && !finding.blocking));
    }

    #[test]
    fn warns_on_incomplete_weights() {
        let findings = weight_findings(&period(vec![group("Sales", 0.0, vec![item(40.0)])]));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "weights.incomplete"));
    }

    #[test]
    fn warns_on_empty_period() {
        let findings = weight_findings(&period(vec![]));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "period.empty");
    }

    #[test]
    fn warns_on_auto_group_without_items() {
        let mut empty_auto = group("Sales", 100.0, vec![]);
        empty_auto.auto_calculate = true;
        let findings = weight_findings(&period(vec![empty_auto]));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "group.auto_empty" && !finding.blocking));
    }
}
