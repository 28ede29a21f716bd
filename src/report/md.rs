use crate::report::{RenderOptions, ScoreReport};

pub fn to_markdown(report: &ScoreReport, options: RenderOptions) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str(&format!("# Retention Readiness: {}\n\n", report.subject));
    output.push_str(&format!(
        "RRI score: {:.2} ({})\n\n",
        result.rri_score,
        result.band.as_str()
    ));
    output.push_str(&format!(
        "Data quality: {:.3} ({})\n\n",
        result.overall_data_quality,
        result.quality_status.as_str()
    ));
    output.push_str(&format!(
        "Calculated at: {}\n\n",
        result.calculated_at.to_rfc3339()
    ));

    output.push_str("## Components\n\n");
    output.push_str("| component | score | completeness | status |\n");
    output.push_str("|---|---|---|---|\n");
    output.push_str(&format!(
        "| technical | {:.2} | {:.2} | {} |\n",
        result.technical.total_score,
        result.technical.completeness,
        result.technical.status.as_str()
    ));
    output.push_str(&format!(
        "| behavioral | {:.2} | {:.2} | {}, trend {} |\n",
        result.behavioral.total_score,
        result.behavioral.completeness,
        result.behavioral.status.as_str(),
        result.behavioral.trend.as_str()
    ));
    output.push_str(&format!(
        "| achievement | {:.2} | - | {} events, {:.2} points |\n\n",
        result.achievement.total_score,
        result.achievement.achievements_count,
        result.achievement.raw_points_sum
    ));

    if options.include_breakdown {
        output.push_str("## Technical Breakdown\n\n");
        if result.technical.breakdown.is_empty() {
            output.push_str("- none\n\n");
        } else {
            for entry in &result.technical.breakdown {
                output.push_str(&format!(
                    "- {}: {:.2} (normalized {:.2}, recency {:.2})\n",
                    entry.axis.as_str(),
                    entry.contribution,
                    entry.normalized,
                    entry.recency_weight
                ));
            }
            output.push('\n');
        }
    }

    output.push_str("## Audit Notes\n\n");
    if result.audit_notes.is_empty() {
        output.push_str("- none\n");
    } else {
        for note in &result.audit_notes {
            output.push_str(&format!("- {note}\n"));
        }
    }

    output
}

pub fn batch_markdown(reports: &[ScoreReport]) -> String {
    let mut output = String::new();
    output.push_str("# Retention Readiness Batch\n\n");
    if reports.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| subject | rri | band | quality | notes |\n");
    output.push_str("|---|---|---|---|---|\n");
    for report in reports {
        output.push_str(&format!(
            "| {} | {:.2} | {} | {} | {} |\n",
            report.subject,
            report.result.rri_score,
            report.result.band.as_str(),
            report.result.quality_status.as_str(),
            report.result.audit_notes.len()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::compute_rri;
    use crate::types::input::TechnicalAssessment;
    use chrono::{TimeZone, Utc};

    fn sample_report() -> ScoreReport {
        let now = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let technical = TechnicalAssessment::single_session(Some(70.0), None, Some(70.0), None, now);
        ScoreReport {
            subject: "AGN-007".to_string(),
            result: compute_rri(&technical, &[], &[], now),
        }
    }

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report(), RenderOptions::default());
        assert!(rendered.contains("# Retention Readiness: AGN-007"));
        assert!(rendered.contains("RRI score: 19.25 (RED)"));
        assert!(rendered.contains("## Components"));
        assert!(rendered.contains("## Technical Breakdown"));
        assert!(rendered.contains("- firing: 17.50"));
        assert!(rendered.contains("Data quality: 0.250 (INSUFFICIENT)"));
        assert!(rendered.contains("| technical | 38.50 | 0.50 | INCOMPLETE |"));
        assert!(rendered.contains("| behavioral | 0.00 | 0.00 | INSUFFICIENT, trend STABLE |"));
        assert!(rendered.contains("Data quality insufficient for reliable prediction"));
    }

    #[test]
    fn markdown_report_can_omit_breakdown() {
        let rendered = to_markdown(
            &sample_report(),
            RenderOptions {
                include_breakdown: false,
            },
        );
        assert!(!rendered.contains("## Technical Breakdown"));
        assert!(rendered.contains("## Audit Notes"));
    }

    #[test]
    fn batch_markdown_lists_one_row_per_subject() {
        let reports = vec![sample_report(), sample_report()];
        let rendered = batch_markdown(&reports);
        assert_eq!(rendered.matches("| AGN-007 |").count(), 2);
        assert!(batch_markdown(&[]).contains("- none"));
    }
}
