use crate::score::normalize::{clamp_score, clamp_unit, normalize, recency_weight, round2};
use crate::score::tables::{technical_weight, TECHNICAL_MAX_SCORE};
use crate::types::input::{TechnicalAssessment, TechnicalAxis};
use crate::types::scoring::{AxisContribution, TechnicalScoreResult, TechnicalStatus};
use chrono::{DateTime, Utc};

/// Weighted sum over the four drill axes. Missing axes contribute nothing and
/// their weight is not redistributed, so partial data caps the reachable total.
pub fn technical_score(
    assessment: &TechnicalAssessment,
    now: DateTime<Utc>,
) -> TechnicalScoreResult {
    let mut breakdown = Vec::new();
    let mut weighted_sum = 0.0;

    for axis in TechnicalAxis::ALL {
        let Some(reading) = assessment.reading(axis) else {
            continue;
        };
        let recency = reading
            .observed_at
            .map(|observed_at| recency_weight(observed_at, now))
            .unwrap_or(0.0);
        let normalized = normalize(Some(reading.score), Some(TECHNICAL_MAX_SCORE));
        let contribution = normalized * recency * technical_weight(axis);
        weighted_sum += contribution;
        breakdown.push(AxisContribution {
            axis,
            normalized,
            recency_weight: recency,
            contribution,
        });
    }

    let categories_present = breakdown.len();
    let status = match categories_present {
        4 => TechnicalStatus::Complete,
        3 => TechnicalStatus::Partial,
        _ => TechnicalStatus::Incomplete,
    };
    let completeness = clamp_unit(categories_present as f64 / TechnicalAxis::ALL.len() as f64);
    let total_score = round2(clamp_score(weighted_sum));

    tracing::debug!(total_score, categories_present, ?status, "technical component scored");

    TechnicalScoreResult {
        total_score,
        completeness,
        status,
        categories_present,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::input::AxisReading;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn full_fresh_perfect_scores_reach_one_hundred() {
        let now = now();
        let assessment =
            TechnicalAssessment::single_session(Some(100.0), Some(100.0), Some(100.0), Some(100.0), now);
        let result = technical_score(&assessment, now);
        assert_eq!(result.total_score, 100.0);
        assert_eq!(result.completeness, 1.0);
        assert_eq!(result.status, TechnicalStatus::Complete);
        assert_eq!(result.breakdown.len(), 4);
    }

    #[test]
    fn three_axes_are_partial_and_not_redistributed() {
        let now = now();
        let assessment =
            TechnicalAssessment::single_session(Some(100.0), None, Some(100.0), Some(100.0), now);
        let result = technical_score(&assessment, now);
        assert_eq!(result.completeness, 0.75);
        assert_eq!(result.status, TechnicalStatus::Partial);
        assert_eq!(result.total_score, 80.0);
        assert!(result
            .breakdown
            .iter()
            .all(|entry| entry.axis != TechnicalAxis::Weapon));
    }

    #[test]
    fn two_or_fewer_axes_are_incomplete() {
        let now = now();
        let assessment = TechnicalAssessment::single_session(Some(90.0), None, None, Some(90.0), now);
        let result = technical_score(&assessment, now);
        assert_eq!(result.status, TechnicalStatus::Incomplete);
        assert_eq!(result.completeness, 0.5);

        let empty = technical_score(&TechnicalAssessment::default(), now);
        assert_eq!(empty.total_score, 0.0);
        assert_eq!(empty.completeness, 0.0);
        assert_eq!(empty.status, TechnicalStatus::Incomplete);
    }

    #[test]
    fn axes_decay_independently_by_their_own_dates() {
        let now = now();
        let assessment = TechnicalAssessment {
            firing: Some(AxisReading::new(100.0, now)),
            weapon: Some(AxisReading::new(100.0, now - Duration::days(90))),
            tactical: Some(AxisReading::new(100.0, now - Duration::days(800))),
            cognitive: Some(AxisReading::new(100.0, now + Duration::days(3))),
        };
        let result = technical_score(&assessment, now);
        // firing 25 + weapon 20 * 0.95; tactical is stale, cognitive is future-dated
        assert_eq!(result.total_score, 44.0);
        assert_eq!(result.status, TechnicalStatus::Complete);
        let cognitive = result
            .breakdown
            .iter()
            .find(|entry| entry.axis == TechnicalAxis::Cognitive)
            .expect("cognitive should be reported");
        assert_eq!(cognitive.recency_weight, 0.0);
        assert_eq!(cognitive.contribution, 0.0);
    }

    #[test]
    fn reading_without_date_is_present_but_weightless() {
        let now = now();
        let assessment = TechnicalAssessment {
            firing: Some(AxisReading {
                score: 90.0,
                observed_at: None,
            }),
            ..TechnicalAssessment::default()
        };
        let result = technical_score(&assessment, now);
        assert_eq!(result.categories_present, 1);
        assert_eq!(result.total_score, 0.0);
    }

    #[test]
    fn out_of_range_scores_are_normalized() {
        let now = now();
        let assessment =
            TechnicalAssessment::single_session(Some(250.0), Some(-10.0), Some(100.0), Some(100.0), now);
        let result = technical_score(&assessment, now);
        assert_eq!(result.total_score, 80.0);
    }
}
