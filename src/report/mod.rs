pub mod json;
pub mod md;

use crate::error::RriError;
use crate::types::scoring::CompositeResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub include_breakdown: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_breakdown: true,
        }
    }
}

/// A scored individual, labelled for display.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub subject: String,
    #[serde(flatten)]
    pub result: CompositeResult,
}

impl ScoreReport {
    /// Copy with the per-axis technical breakdown emptied.
    pub fn without_breakdown(&self) -> ScoreReport {
        let mut trimmed = self.clone();
        trimmed.result.technical.breakdown.clear();
        trimmed
    }
}

pub fn render(
    report: &ScoreReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String, RriError> {
    match format {
        OutputFormat::Json if options.include_breakdown => {
            json::to_json(report).map_err(RriError::Json)
        }
        OutputFormat::Json => json::to_json(&report.without_breakdown()).map_err(RriError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, options)),
    }
}

pub fn render_batch(
    reports: &[ScoreReport],
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String, RriError> {
    match format {
        OutputFormat::Json if options.include_breakdown => {
            json::to_json(reports).map_err(RriError::Json)
        }
        OutputFormat::Json => {
            let trimmed = reports
                .iter()
                .map(ScoreReport::without_breakdown)
                .collect::<Vec<_>>();
            json::to_json(&trimmed).map_err(RriError::Json)
        }
        OutputFormat::Md => Ok(md::batch_markdown(reports)),
    }
}
