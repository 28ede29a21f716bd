use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalAxis {
    Firing,
    Weapon,
    Tactical,
    Cognitive,
}

impl TechnicalAxis {
    pub const ALL: [TechnicalAxis; 4] = [
        TechnicalAxis::Firing,
        TechnicalAxis::Weapon,
        TechnicalAxis::Tactical,
        TechnicalAxis::Cognitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechnicalAxis::Firing => "firing",
            TechnicalAxis::Weapon => "weapon",
            TechnicalAxis::Tactical => "tactical",
            TechnicalAxis::Cognitive => "cognitive",
        }
    }
}

/// One scored drill on a technical axis. A reading without a timestamp still
/// counts as present but carries zero recency weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisReading {
    pub score: f64,
    #[serde(rename = "date", default)]
    pub observed_at: Option<DateTime<Utc>>,
}

impl AxisReading {
    pub fn new(score: f64, observed_at: DateTime<Utc>) -> Self {
        Self {
            score,
            observed_at: Some(observed_at),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAssessment {
    #[serde(default)]
    pub firing: Option<AxisReading>,
    #[serde(default)]
    pub weapon: Option<AxisReading>,
    #[serde(default)]
    pub tactical: Option<AxisReading>,
    #[serde(default)]
    pub cognitive: Option<AxisReading>,
}

impl TechnicalAssessment {
    /// Builds an assessment where every present axis shares one session date,
    /// which is how assessment rows are usually recorded upstream.
    pub fn single_session(
        firing: Option<f64>,
        weapon: Option<f64>,
        tactical: Option<f64>,
        cognitive: Option<f64>,
        observed_at: DateTime<Utc>,
    ) -> Self {
        let reading = |score: Option<f64>| score.map(|score| AxisReading::new(score, observed_at));
        Self {
            firing: reading(firing),
            weapon: reading(weapon),
            tactical: reading(tactical),
            cognitive: reading(cognitive),
        }
    }

    pub fn reading(&self, axis: TechnicalAxis) -> Option<&AxisReading> {
        match axis {
            TechnicalAxis::Firing => self.firing.as_ref(),
            TechnicalAxis::Weapon => self.weapon.as_ref(),
            TechnicalAxis::Tactical => self.tactical.as_ref(),
            TechnicalAxis::Cognitive => self.cognitive.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehavioralTrait {
    Initiative,
    Dedication,
    TeamSpirit,
    Courage,
    Motivation,
    Adaptability,
}

impl BehavioralTrait {
    pub const WEIGHTED: [BehavioralTrait; 6] = [
        BehavioralTrait::Initiative,
        BehavioralTrait::Dedication,
        BehavioralTrait::TeamSpirit,
        BehavioralTrait::Courage,
        BehavioralTrait::Motivation,
        BehavioralTrait::Adaptability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BehavioralTrait::Initiative => "initiative",
            BehavioralTrait::Dedication => "dedication",
            BehavioralTrait::TeamSpirit => "team_spirit",
            BehavioralTrait::Courage => "courage",
            BehavioralTrait::Motivation => "motivation",
            BehavioralTrait::Adaptability => "adaptability",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralAssessmentRecord {
    pub quarter: String,
    #[serde(rename = "date")]
    pub assessed_at: DateTime<Utc>,
    pub initiative: f64,
    pub dedication: f64,
    pub team_spirit: f64,
    pub courage: f64,
    pub motivation: f64,
    pub adaptability: f64,
    /// Tracked for reporting only; never weighted.
    #[serde(default)]
    pub communication: Option<f64>,
}

impl BehavioralAssessmentRecord {
    pub fn value(&self, trait_name: BehavioralTrait) -> f64 {
        match trait_name {
            BehavioralTrait::Initiative => self.initiative,
            BehavioralTrait::Dedication => self.dedication,
            BehavioralTrait::TeamSpirit => self.team_spirit,
            BehavioralTrait::Courage => self.courage,
            BehavioralTrait::Motivation => self.motivation,
            BehavioralTrait::Adaptability => self.adaptability,
        }
    }

    /// Unweighted mean of the six weighted traits.
    pub fn trait_mean(&self) -> f64 {
        BehavioralTrait::WEIGHTED
            .iter()
            .map(|trait_name| self.value(*trait_name))
            .sum::<f64>()
            / BehavioralTrait::WEIGHTED.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AchievementKind {
    Sports,
    Technical,
    Leadership,
    Bravery,
    Innovation,
    Training,
    Disciplinary,
    Unknown(String),
}

impl AchievementKind {
    pub fn as_str(&self) -> &str {
        match self {
            AchievementKind::Sports => "SPORTS",
            AchievementKind::Technical => "TECHNICAL",
            AchievementKind::Leadership => "LEADERSHIP",
            AchievementKind::Bravery => "BRAVERY",
            AchievementKind::Innovation => "INNOVATION",
            AchievementKind::Training => "TRAINING",
            AchievementKind::Disciplinary => "DISCIPLINARY",
            AchievementKind::Unknown(name) => name,
        }
    }
}

impl From<String> for AchievementKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SPORTS" => AchievementKind::Sports,
            "TECHNICAL" => AchievementKind::Technical,
            "LEADERSHIP" => AchievementKind::Leadership,
            "BRAVERY" => AchievementKind::Bravery,
            "INNOVATION" => AchievementKind::Innovation,
            "TRAINING" => AchievementKind::Training,
            "DISCIPLINARY" => AchievementKind::Disciplinary,
            _ => AchievementKind::Unknown(value),
        }
    }
}

impl From<&str> for AchievementKind {
    fn from(value: &str) -> Self {
        AchievementKind::from(value.to_string())
    }
}

impl From<AchievementKind> for String {
    fn from(value: AchievementKind) -> Self {
        match value {
            AchievementKind::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AchievementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementRecord {
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    pub points: f64,
    #[serde(rename = "date_earned")]
    pub earned_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AchievementRecord {
    pub fn new(kind: impl Into<AchievementKind>, points: f64, earned_at: DateTime<Utc>) -> Self {
        Self {
            kind: kind.into(),
            points,
            earned_at,
            title: None,
        }
    }
}
