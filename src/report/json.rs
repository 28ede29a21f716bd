use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ScoreReport;
    use crate::score::compute_rri;
    use crate::types::input::{AchievementRecord, TechnicalAssessment};
    use chrono::{TimeZone, Utc};

    #[test]
    fn json_report_flattens_result_fields() {
        let now = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let technical =
            TechnicalAssessment::single_session(Some(80.0), Some(80.0), Some(80.0), Some(80.0), now);
        let achievements = vec![AchievementRecord::new("BRAVERY", 40.0, now)];
        let report = ScoreReport {
            subject: "AGN-001".to_string(),
            result: compute_rri(&technical, &[], &achievements, now),
        };

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json should parse");
        assert_eq!(value["subject"], "AGN-001");
        assert_eq!(value["rri_score"], 46.0);
        assert_eq!(value["band"], "RED");
        assert_eq!(value["quality_status"], "WARNING");
        assert_eq!(value["technical"]["status"], "COMPLETE");
        assert_eq!(value["technical"]["breakdown"][0]["axis"], "firing");
        assert_eq!(value["behavioral"]["trend"], "STABLE");
        assert_eq!(value["audit_notes"][0], "CLAMPED_BRAVERY_HIGH");
    }
}
