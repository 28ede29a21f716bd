use crate::types::input::{BehavioralTrait, TechnicalAxis};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TechnicalStatus {
    Complete,
    Partial,
    Incomplete,
}

impl TechnicalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnicalStatus::Complete => "COMPLETE",
            TechnicalStatus::Partial => "PARTIAL",
            TechnicalStatus::Incomplete => "INCOMPLETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BehavioralStatus {
    Complete,
    Partial,
    Insufficient,
}

impl BehavioralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehavioralStatus::Complete => "COMPLETE",
            BehavioralStatus::Partial => "PARTIAL",
            BehavioralStatus::Insufficient => "INSUFFICIENT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "IMPROVING",
            Trend::Stable => "STABLE",
            Trend::Declining => "DECLINING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Band {
    Green,
    Amber,
    Red,
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Green => "GREEN",
            Band::Amber => "AMBER",
            Band::Red => "RED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityStatus {
    Good,
    Warning,
    Insufficient,
}

impl QualityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityStatus::Good => "GOOD",
            QualityStatus::Warning => "WARNING",
            QualityStatus::Insufficient => "INSUFFICIENT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisContribution {
    pub axis: TechnicalAxis,
    pub normalized: Score,
    pub recency_weight: f64,
    pub contribution: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalScoreResult {
    pub total_score: Score,
    pub completeness: f64,
    pub status: TechnicalStatus,
    pub categories_present: usize,
    pub breakdown: Vec<AxisContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitAverage {
    #[serde(rename = "trait")]
    pub trait_name: BehavioralTrait,
    pub average: f64,
    pub retained: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BehavioralScoreResult {
    pub total_score: Score,
    pub completeness: f64,
    pub status: BehavioralStatus,
    pub trend: Trend,
    pub record_count: usize,
    pub trait_averages: Vec<TraitAverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementScoreResult {
    pub total_score: Score,
    pub raw_points_sum: f64,
    pub achievements_count: usize,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeResult {
    pub rri_score: Score,
    pub band: Band,
    pub technical: TechnicalScoreResult,
    pub behavioral: BehavioralScoreResult,
    pub achievement: AchievementScoreResult,
    pub overall_data_quality: f64,
    pub quality_status: QualityStatus,
    pub audit_notes: Vec<String>,
    pub calculated_at: DateTime<Utc>,
}

impl CompositeResult {
    /// Audit notes flattened into the single column form callers persist.
    pub fn audit_summary(&self) -> Option<String> {
        if self.audit_notes.is_empty() {
            None
        } else {
            Some(self.audit_notes.join(" | "))
        }
    }
}
