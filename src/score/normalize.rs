use crate::score::tables::{bucket_weight, RECENCY_BUCKETS};
use chrono::{DateTime, Utc};

/// Whole days elapsed since `observed_at`, or `None` when it lies in the future.
pub fn age_in_days(observed_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<i64> {
    if observed_at > now {
        return None;
    }
    Some(now.signed_duration_since(observed_at).num_days())
}

/// Step-wise discount for stale observations. Future-dated observations are
/// treated as invalid and weigh nothing.
pub fn recency_weight(observed_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    match age_in_days(observed_at, now) {
        Some(age) => bucket_weight(age, &RECENCY_BUCKETS),
        None => {
            tracing::warn!(%observed_at, %now, "future-dated observation zero-weighted");
            0.0
        }
    }
}

/// Scales `raw` onto 0-100 against `max_possible`.
pub fn normalize(raw: Option<f64>, max_possible: Option<f64>) -> f64 {
    let (Some(raw), Some(max_possible)) = (raw, max_possible) else {
        return 0.0;
    };
    if !raw.is_finite() || !max_possible.is_finite() || max_possible == 0.0 {
        return 0.0;
    }
    let normalized = raw.max(0.0) / max_possible * 100.0;
    normalized.clamp(0.0, 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
