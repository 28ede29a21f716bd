//! Fixed weights, thresholds and bucket tables used by the scorers.

use crate::types::input::{AchievementKind, BehavioralTrait, TechnicalAxis};

/// Upper bound of a technical drill score.
pub const TECHNICAL_MAX_SCORE: f64 = 100.0;

pub const TECHNICAL_WEIGHTS: [(TechnicalAxis, f64); 4] = [
    (TechnicalAxis::Firing, 0.25),
    (TechnicalAxis::Weapon, 0.20),
    (TechnicalAxis::Tactical, 0.30),
    (TechnicalAxis::Cognitive, 0.25),
];

pub const BEHAVIORAL_WEIGHTS: [(BehavioralTrait, f64); 6] = [
    (BehavioralTrait::Initiative, 0.20),
    (BehavioralTrait::Dedication, 0.20),
    (BehavioralTrait::TeamSpirit, 0.18),
    (BehavioralTrait::Courage, 0.18),
    (BehavioralTrait::Motivation, 0.12),
    (BehavioralTrait::Adaptability, 0.12),
];

/// Ratings arrive on a 1-10 scale.
pub const BEHAVIORAL_SCALE: f64 = 10.0;
pub const BEHAVIORAL_EXPECTED_RECORDS: usize = 4;
pub const OUTLIER_MIN_SAMPLES: usize = 3;
pub const OUTLIER_STDEV_SPAN: f64 = 2.0;
pub const TREND_THRESHOLD: f64 = 1.0;

/// (max age in days, weight); anything older than the last bucket weighs 0.
pub const RECENCY_BUCKETS: [(i64, f64); 6] = [
    (60, 1.0),
    (120, 0.95),
    (180, 0.85),
    (270, 0.70),
    (365, 0.50),
    (730, 0.25),
];

pub const ACHIEVEMENT_DECAY_BUCKETS: [(i64, f64); 3] = [(180, 1.0), (365, 0.85), (730, 0.60)];

pub const ACHIEVEMENT_POINTS_CAP: f64 = 50.0;
pub const DEFAULT_VALIDITY_MONTHS: u32 = 24;
pub const DAYS_PER_MONTH: i64 = 30;

pub const COMPOSITE_TECHNICAL_WEIGHT: f64 = 0.50;
pub const COMPOSITE_BEHAVIORAL_WEIGHT: f64 = 0.30;
pub const COMPOSITE_ACHIEVEMENT_WEIGHT: f64 = 0.20;

pub const GREEN_THRESHOLD: f64 = 80.0;
pub const AMBER_THRESHOLD: f64 = 65.0;
pub const QUALITY_GOOD_THRESHOLD: f64 = 0.75;
pub const QUALITY_WARNING_THRESHOLD: f64 = 0.50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Months(u32),
    Unbounded,
}

impl Validity {
    pub fn max_age_days(&self) -> Option<i64> {
        match self {
            Validity::Months(months) => Some(i64::from(*months) * DAYS_PER_MONTH),
            Validity::Unbounded => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievementBounds {
    pub min_points: f64,
    pub max_points: f64,
    pub validity: Validity,
    pub decays: bool,
}

const fn bounds(
    min_points: f64,
    max_points: f64,
    validity: Validity,
    decays: bool,
) -> AchievementBounds {
    AchievementBounds {
        min_points,
        max_points,
        validity,
        decays,
    }
}

pub const SPORTS: AchievementBounds = bounds(3.0, 5.0, Validity::Months(24), true);
pub const TECHNICAL: AchievementBounds = bounds(5.0, 8.0, Validity::Months(36), true);
pub const LEADERSHIP: AchievementBounds = bounds(8.0, 12.0, Validity::Months(36), true);
pub const BRAVERY: AchievementBounds = bounds(12.0, 15.0, Validity::Unbounded, false);
pub const INNOVATION: AchievementBounds = bounds(4.0, 6.0, Validity::Months(24), true);
pub const TRAINING: AchievementBounds = bounds(3.0, 5.0, Validity::Months(24), true);
pub const DISCIPLINARY: AchievementBounds = bounds(-5.0, -3.0, Validity::Months(12), false);

/// Bounds for a known category; `None` for unknown ones.
pub fn achievement_bounds(kind: &AchievementKind) -> Option<AchievementBounds> {
    match kind {
        AchievementKind::Sports => Some(SPORTS),
        AchievementKind::Technical => Some(TECHNICAL),
        AchievementKind::Leadership => Some(LEADERSHIP),
        AchievementKind::Bravery => Some(BRAVERY),
        AchievementKind::Innovation => Some(INNOVATION),
        AchievementKind::Training => Some(TRAINING),
        AchievementKind::Disciplinary => Some(DISCIPLINARY),
        AchievementKind::Unknown(_) => None,
    }
}

pub fn technical_weight(axis: TechnicalAxis) -> f64 {
    TECHNICAL_WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == axis)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

/// Weight of the first bucket whose age limit covers `age_days`.
pub fn bucket_weight(age_days: i64, buckets: &[(i64, f64)]) -> f64 {
    buckets
        .iter()
        .find(|(max_age, _)| age_days <= *max_age)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}
