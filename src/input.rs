use crate::error::{Result, RriError};
use crate::score::compute_rri;
use crate::types::input::{AchievementRecord, BehavioralAssessmentRecord, TechnicalAssessment};
use crate::types::scoring::CompositeResult;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// Everything known about one individual at scoring time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub technical: TechnicalAssessment,
    #[serde(default)]
    pub behavioral: Vec<BehavioralAssessmentRecord>,
    #[serde(default)]
    pub achievements: Vec<AchievementRecord>,
}

impl PersonRecord {
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("unnamed")
    }

    pub fn score(&self, now: DateTime<Utc>) -> CompositeResult {
        compute_rri(&self.technical, &self.behavioral, &self.achievements, now)
    }
}

pub fn parse_person(content: &str) -> Result<PersonRecord> {
    serde_json::from_str(content).map_err(|e| RriError::InputParse(e.to_string()))
}

pub fn parse_batch(content: &str) -> Result<Vec<PersonRecord>> {
    serde_json::from_str(content).map_err(|e| RriError::InputParse(e.to_string()))
}

pub fn load_person(path: &Path) -> Result<PersonRecord> {
    let content = read_input(path)?;
    parse_person(&content).map_err(|e| with_path(path, e))
}

pub fn load_batch(path: &Path) -> Result<Vec<PersonRecord>> {
    let content = read_input(path)?;
    parse_batch(&content).map_err(|e| with_path(path, e))
}

fn with_path(path: &Path, err: RriError) -> RriError {
    match err {
        RriError::InputParse(message) => {
            RriError::InputParse(format!("{}: {}", path.display(), message))
        }
        other => other,
    }
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RriError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| RriError::InvalidTimestamp(format!("{value}: {e}")))
}
