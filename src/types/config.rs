use crate::error::RriError;
use crate::input::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RriConfig {
    pub report: Option<ReportConfig>,
    pub engine: Option<EngineConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
    #[serde(default = "default_include_breakdown")]
    pub include_breakdown: bool,
}

fn default_include_breakdown() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Pins the scoring reference time (RFC 3339) for reproducible runs.
    pub reference_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl RriConfig {
    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn include_breakdown(&self) -> bool {
        self.report
            .as_ref()
            .map(|report| report.include_breakdown)
            .unwrap_or(true)
    }

    pub fn reference_time(&self) -> Result<Option<DateTime<Utc>>, RriError> {
        self.engine
            .as_ref()
            .and_then(|engine| engine.reference_time.as_deref())
            .map(parse_timestamp)
            .transpose()
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), RriError> {
        if let Some(reference_time) = self
            .engine
            .as_ref()
            .and_then(|engine| engine.reference_time.as_deref())
        {
            parse_timestamp(reference_time).map_err(|_| {
                RriError::ConfigParse(format!(
                    "engine.reference_time must be an RFC 3339 timestamp (found {reference_time})"
                ))
            })?;
        }

        if let Some(level) = self
            .logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
        {
            if level.trim().is_empty() {
                return Err(RriError::ConfigParse(
                    "logging.level cannot be empty".to_string(),
                ));
            }
            EnvFilter::try_new(level).map_err(|e| {
                RriError::ConfigParse(format!("logging.level is not a valid filter: {e}"))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RriConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.report_format(), None);
        assert!(cfg.include_breakdown());
        assert_eq!(cfg.log_level(), DEFAULT_LOG_LEVEL);
        assert_eq!(cfg.reference_time().expect("no reference time"), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[report]
format = "json"
include_breakdown = false

[engine]
reference_time = "2026-10-01T00:00:00Z"

[logging]
level = "rri_engine=debug"
"#;
        let cfg: RriConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.report_format(), Some(ReportFormatSetting::Json));
        assert!(!cfg.include_breakdown());
        assert_eq!(
            cfg.reference_time().expect("reference time should parse"),
            Some(Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(cfg.log_level(), "rri_engine=debug");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_report_format_fails_to_parse() {
        let toml_str = r#"
[report]
format = "sarif"
"#;
        assert!(toml::from_str::<RriConfig>(toml_str).is_err());
    }

    #[test]
    fn validate_rejects_bad_reference_time() {
        let toml_str = r#"
[engine]
reference_time = "last tuesday"
"#;
        let cfg: RriConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("engine.reference_time"));
    }

    #[test]
    fn validate_rejects_blank_log_level() {
        let toml_str = r#"
[logging]
level = "  "
"#;
        let cfg: RriConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("logging.level cannot be empty"));
    }
}
