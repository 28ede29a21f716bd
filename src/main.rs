mod cli;

use chrono::{DateTime, Utc};
use clap::Parser;
use rri_engine::error::RriError;
use rri_engine::report::{OutputFormat, RenderOptions, ScoreReport};
use rri_engine::types::config::{ReportFormatSetting, RriConfig};
use rri_engine::types::scoring::{Band, CompositeResult, QualityStatus};
use rri_engine::{config, input, report, telemetry};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const AT_RISK: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn resolve_now(flag: Option<&str>, cfg: &RriConfig) -> Result<DateTime<Utc>, RriError> {
    match flag {
        Some(value) => input::parse_timestamp(value),
        None => Ok(cfg.reference_time()?.unwrap_or_else(Utc::now)),
    }
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &RriConfig) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => match cfg.report_format() {
            Some(ReportFormatSetting::Json) => OutputFormat::Json,
            Some(ReportFormatSetting::Md) | None => OutputFormat::Md,
        },
    }
}

fn exit_code_for<'a>(results: impl IntoIterator<Item = &'a CompositeResult>) -> i32 {
    let mut code = exit_code::SUCCESS;
    for result in results {
        if result.band == Band::Red {
            return exit_code::AT_RISK;
        }
        if result.quality_status != QualityStatus::Good {
            code = exit_code::WARNINGS;
        }
    }
    code
}

fn run() -> Result<i32, RriError> {
    let cli = cli::Cli::parse();

    let root = match &cli.config {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    if !root.exists() {
        return Err(RriError::PathNotFound(root.display().to_string()));
    }
    let loaded = config::load_config(&root)?;
    let missing_config = loaded.is_none();
    let cfg = loaded.unwrap_or_default();

    telemetry::init(&telemetry::filter_directive(
        cli.verbose,
        cli.quiet,
        cfg.log_level(),
    ))?;
    if missing_config {
        tracing::info!(root = %root.display(), "no rri.toml found, using defaults");
    }

    match cli.command {
        cli::Commands::Score(cmd) => {
            let now = resolve_now(cmd.now.as_deref(), &cfg)?;
            let person = input::load_person(&cmd.path)?;
            let score_report = ScoreReport {
                subject: person.label().to_string(),
                result: person.score(now),
            };
            let options = RenderOptions {
                include_breakdown: cfg.include_breakdown(),
            };
            let rendered = report::render(&score_report, output_format(cmd.format, &cfg), options)?;
            println!("{rendered}");
            Ok(exit_code_for([&score_report.result]))
        }
        cli::Commands::Batch(cmd) => {
            let now = resolve_now(cmd.now.as_deref(), &cfg)?;
            let people = input::load_batch(&cmd.path)?;
            tracing::info!(count = people.len(), "scoring batch");
            let reports = people
                .iter()
                .map(|person| ScoreReport {
                    subject: person.label().to_string(),
                    result: person.score(now),
                })
                .collect::<Vec<_>>();
            let options = RenderOptions {
                include_breakdown: cfg.include_breakdown(),
            };
            let rendered =
                report::render_batch(&reports, output_format(cmd.format, &cfg), options)?;
            println!("{rendered}");
            Ok(exit_code_for(reports.iter().map(|report| &report.result)))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
