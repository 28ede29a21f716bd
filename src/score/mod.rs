pub mod achievement;
pub mod behavioral;
pub mod normalize;
pub mod tables;
pub mod technical;

use crate::types::input::{AchievementRecord, BehavioralAssessmentRecord, TechnicalAssessment};
use crate::types::scoring::{Band, CompositeResult, QualityStatus};
use chrono::{DateTime, Utc};
use normalize::{clamp_score, clamp_unit, round2};
use tables::{
    AMBER_THRESHOLD, COMPOSITE_ACHIEVEMENT_WEIGHT, COMPOSITE_BEHAVIORAL_WEIGHT,
    COMPOSITE_TECHNICAL_WEIGHT, GREEN_THRESHOLD, QUALITY_GOOD_THRESHOLD,
    QUALITY_WARNING_THRESHOLD,
};

pub const INSUFFICIENT_QUALITY_NOTE: &str = "Data quality insufficient for reliable prediction";

pub fn classify_band(rri_score: f64) -> Band {
    if rri_score >= GREEN_THRESHOLD {
        Band::Green
    } else if rri_score >= AMBER_THRESHOLD {
        Band::Amber
    } else {
        Band::Red
    }
}

pub fn classify_quality(overall_data_quality: f64) -> QualityStatus {
    if overall_data_quality >= QUALITY_GOOD_THRESHOLD {
        QualityStatus::Good
    } else if overall_data_quality >= QUALITY_WARNING_THRESHOLD {
        QualityStatus::Warning
    } else {
        QualityStatus::Insufficient
    }
}

/// Scores one individual. Missing or odd data lowers completeness and shows
/// up in the audit notes; it never fails the calculation.
pub fn compute_rri(
    technical: &TechnicalAssessment,
    behavioral: &[BehavioralAssessmentRecord],
    achievements: &[AchievementRecord],
    now: DateTime<Utc>,
) -> CompositeResult {
    let technical = technical::technical_score(technical, now);
    let behavioral = behavioral::behavioral_score(behavioral);
    let achievement = achievement::achievement_score(achievements, now);

    let rri_score = round2(clamp_score(
        technical.total_score * COMPOSITE_TECHNICAL_WEIGHT
            + behavioral.total_score * COMPOSITE_BEHAVIORAL_WEIGHT
            + achievement.total_score * COMPOSITE_ACHIEVEMENT_WEIGHT,
    ));
    let band = classify_band(rri_score);

    // achievements are optional by nature and stay out of data quality;
    // completeness moves in quarters so the mean is exact without rounding
    let overall_data_quality =
        clamp_unit((technical.completeness + behavioral.completeness) / 2.0);
    let quality_status = classify_quality(overall_data_quality);

    let mut audit_notes = Vec::new();
    if quality_status == QualityStatus::Insufficient {
        tracing::warn!(overall_data_quality, "data quality insufficient");
        audit_notes.push(INSUFFICIENT_QUALITY_NOTE.to_string());
    }
    audit_notes.extend(achievement.flags.iter().cloned());

    tracing::debug!(
        rri_score,
        band = band.as_str(),
        quality = quality_status.as_str(),
        "rri computed"
    );

    CompositeResult {
        rri_score,
        band,
        technical,
        behavioral,
        achievement,
        overall_data_quality,
        quality_status,
        audit_notes,
        calculated_at: now,
    }
}

/// [`compute_rri`] against the current wall-clock time.
pub fn compute_rri_now(
    technical: &TechnicalAssessment,
    behavioral: &[BehavioralAssessmentRecord],
    achievements: &[AchievementRecord],
) -> CompositeResult {
    compute_rri(technical, behavioral, achievements, Utc::now())
}
