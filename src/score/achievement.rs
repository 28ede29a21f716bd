use crate::score::normalize::{clamp_score, round2};
use crate::score::tables::{
    achievement_bounds, bucket_weight, AchievementBounds, Validity, ACHIEVEMENT_DECAY_BUCKETS,
    ACHIEVEMENT_POINTS_CAP, DEFAULT_VALIDITY_MONTHS,
};
use crate::types::input::AchievementRecord;
use crate::types::scoring::AchievementScoreResult;
use chrono::{DateTime, Utc};

pub const CAPPED_FLAG: &str = "CAPPED_AT_50";

/// Unknown categories keep their raw points and expire after the default
/// validity window.
const UNKNOWN_BOUNDS: AchievementBounds = AchievementBounds {
    min_points: f64::NEG_INFINITY,
    max_points: f64::INFINITY,
    validity: Validity::Months(DEFAULT_VALIDITY_MONTHS),
    decays: true,
};

#[derive(Debug, Default)]
struct Flags(Vec<String>);

impl Flags {
    fn push(&mut self, flag: String) {
        if !self.0.contains(&flag) {
            self.0.push(flag);
        }
    }
}

fn clamp_points(
    record: &AchievementRecord,
    bounds: &AchievementBounds,
    flags: &mut Flags,
) -> f64 {
    let points = if record.points.is_finite() {
        record.points
    } else {
        0.0
    };
    if points < bounds.min_points {
        flags.push(format!("CLAMPED_{}_LOW", record.kind));
        bounds.min_points
    } else if points > bounds.max_points {
        flags.push(format!("CLAMPED_{}_HIGH", record.kind));
        bounds.max_points
    } else {
        points
    }
}

/// Sums clamped, decayed event points into a 0-50 pool and rescales it onto
/// 0-100. Every input record is counted, including expired ones.
pub fn achievement_score(
    records: &[AchievementRecord],
    now: DateTime<Utc>,
) -> AchievementScoreResult {
    let mut flags = Flags::default();
    let mut weighted_sum = 0.0;

    for record in records {
        let bounds = match achievement_bounds(&record.kind) {
            Some(bounds) => bounds,
            None => {
                tracing::warn!(kind = %record.kind, "unknown achievement category");
                flags.push(format!("UNKNOWN_TYPE_{}", record.kind));
                UNKNOWN_BOUNDS
            }
        };
        let points = clamp_points(record, &bounds, &mut flags);

        let age_days = now.signed_duration_since(record.earned_at).num_days().max(0);
        if let Some(max_age) = bounds.validity.max_age_days() {
            if age_days > max_age {
                tracing::debug!(kind = %record.kind, age_days, "achievement expired");
                continue;
            }
        }

        let multiplier = if bounds.decays {
            bucket_weight(age_days, &ACHIEVEMENT_DECAY_BUCKETS)
        } else {
            1.0
        };
        weighted_sum += points * multiplier;
    }

    let raw_points_sum = if weighted_sum > ACHIEVEMENT_POINTS_CAP {
        flags.push(CAPPED_FLAG.to_string());
        ACHIEVEMENT_POINTS_CAP
    } else {
        weighted_sum.max(0.0)
    };
    let total_score = round2(clamp_score(raw_points_sum / ACHIEVEMENT_POINTS_CAP * 100.0));

    tracing::debug!(
        total_score,
        raw_points_sum,
        count = records.len(),
        "achievement component scored"
    );

    AchievementScoreResult {
        total_score,
        raw_points_sum: round2(raw_points_sum),
        achievements_count: records.len(),
        flags: flags.0,
    }
}
