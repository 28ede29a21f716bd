use crate::score::normalize::{clamp_score, clamp_unit, round2};
use crate::score::tables::{
    BEHAVIORAL_EXPECTED_RECORDS, BEHAVIORAL_SCALE, BEHAVIORAL_WEIGHTS, OUTLIER_MIN_SAMPLES,
    OUTLIER_STDEV_SPAN, TREND_THRESHOLD,
};
use crate::types::input::BehavioralAssessmentRecord;
use crate::types::scoring::{BehavioralScoreResult, BehavioralStatus, TraitAverage, Trend};

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn population_stdev(values: &[f64], mean: f64) -> f64 {
    let variance =
        values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Drops values further than two population standard deviations from the
/// mean. Samples smaller than three are returned untouched.
pub fn remove_outliers(values: &[f64]) -> Vec<f64> {
    if values.len() < OUTLIER_MIN_SAMPLES {
        return values.to_vec();
    }
    let Some(mean) = mean(values) else {
        return Vec::new();
    };
    let span = OUTLIER_STDEV_SPAN * population_stdev(values, mean);
    let (low, high) = (mean - span, mean + span);
    values
        .iter()
        .copied()
        .filter(|value| (low..=high).contains(value))
        .collect()
}

/// Compares the mean trait level of the later half of the records against
/// the earlier half.
pub fn detect_trend(records: &[BehavioralAssessmentRecord]) -> Trend {
    if records.len() < 2 {
        return Trend::Stable;
    }
    let mut sorted = records.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|record| record.assessed_at);

    let (first_half, second_half) = sorted.split_at(sorted.len() / 2);
    let half_mean = |half: &[&BehavioralAssessmentRecord]| {
        let totals = half.iter().map(|record| record.trait_mean()).collect::<Vec<_>>();
        mean(&totals).unwrap_or(0.0)
    };

    let diff = half_mean(second_half) - half_mean(first_half);
    if diff > TREND_THRESHOLD {
        Trend::Improving
    } else if diff < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

pub fn behavioral_score(records: &[BehavioralAssessmentRecord]) -> BehavioralScoreResult {
    let record_count = records.len();
    if record_count == 0 {
        return BehavioralScoreResult {
            total_score: 0.0,
            completeness: 0.0,
            status: BehavioralStatus::Insufficient,
            trend: Trend::Stable,
            record_count,
            trait_averages: Vec::new(),
        };
    }

    let mut weighted_sum = 0.0;
    let mut trait_averages = Vec::with_capacity(BEHAVIORAL_WEIGHTS.len());
    for (trait_name, weight) in BEHAVIORAL_WEIGHTS {
        let values = records
            .iter()
            .map(|record| record.value(trait_name))
            .collect::<Vec<_>>();
        let retained = remove_outliers(&values);
        let average = mean(&retained).unwrap_or(0.0);
        if retained.len() < values.len() {
            tracing::debug!(
                trait_name = trait_name.as_str(),
                dropped = values.len() - retained.len(),
                "behavioral outliers removed"
            );
        }
        weighted_sum += average * weight;
        trait_averages.push(TraitAverage {
            trait_name,
            average,
            retained: retained.len(),
            dropped: values.len() - retained.len(),
        });
    }

    let status = if record_count >= BEHAVIORAL_EXPECTED_RECORDS {
        BehavioralStatus::Complete
    } else if record_count >= 2 {
        BehavioralStatus::Partial
    } else {
        BehavioralStatus::Insufficient
    };
    let completeness = clamp_unit(record_count as f64 / BEHAVIORAL_EXPECTED_RECORDS as f64);
    let trend = detect_trend(records);
    let total_score = round2(clamp_score(weighted_sum * BEHAVIORAL_SCALE));

    tracing::debug!(total_score, record_count, ?status, ?trend, "behavioral component scored");

    BehavioralScoreResult {
        total_score,
        completeness,
        status,
        trend,
        record_count,
        trait_averages,
    }
}
