use crate::types::report::{PeriodReport, RiskReport, TrendReport};

pub fn period_markdown(report: &PeriodReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Scorecard: {} / {}\n\n",
        report.project, report.summary.period
    ));
    output.push_str(&format!(
        "Total score: {:.1}\n\n",
        report.summary.total_score
    ));

    output.push_str("## Groups\n\n");
    if report.summary.groups.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for group in &report.summary.groups {
            output.push_str(&format!(
                "- {}: target {:.1}, actual {:.1}, {:.1}% (weight {:.0}, contributes {:.1})\n",
                group.name, group.target, group.actual, group.percent, group.weight,
                group.contribution
            ));
            for item in &group.items {
                output.push_str(&format!(
                    "  - {}: target {:.1}, actual {:.1}, {:.1}% (weight {:.0}, contributes {:.1})\n",
                    item.name, item.target, item.actual, item.percent, item.weight,
                    item.contribution
                ));
            }
        }
        output.push('\n');
    }

    output.push_str("## At risk\n\n");
    if report.at_risk.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for item in &report.at_risk {
            output.push_str(&format!(
                "- {}: {:.1}% of target (actual {:.1} / target {:.1})\n",
                item.name, item.percent, item.actual, item.target
            ));
        }
        output.push('\n');
    }

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
    }

    output
}

pub fn trend_markdown(report: &TrendReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Trend: {}\n\n", report.project));
    if report.points.is_empty() {
        output.push_str("- no periods\n");
        return output;
    }

    output.push_str("| Period | Total score |\n|---|---|\n");
    for point in &report.points {
        output.push_str(&format!("| {} | {:.1} |\n", point.period, point.total_score));
    }
    output
}

pub fn risk_markdown(report: &RiskReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# At risk: {} / {}\n\n",
        report.project, report.period
    ));
    if report.items.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    for item in &report.items {
        output.push_str(&format!(
            "- {}: {:.1}% of target (actual {:.1} / target {:.1}, weight {:.0})\n",
            item.name, item.percent, item.actual, item.target, item.weight
        ));
    }
    output
}
