//! Evaluates the built-in reference decision and prints the ranking.
//!
//! Exit codes: `0` success, `1` configuration or output failure, `2` invalid
//! decision data.

use std::io;
use std::process::ExitCode;

use tracing::error;

use saw_decision::adapters::{JsonReporter, TextReporter, TracingScoreSink};
use saw_decision::application::{reference_command, EvaluateDecisionError, EvaluateDecisionHandler};
use saw_decision::config::{AppConfig, ConfigError, LogConfig, ReportFormat};

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(1);
        }
    };

    init_tracing(&config.log);

    let command = reference_command();
    let stdout = io::stdout().lock();
    let result = match config.report.format {
        ReportFormat::Text => EvaluateDecisionHandler::new(
            TracingScoreSink,
            TextReporter::new(stdout, config.report.precision),
        )
        .handle(&command),
        ReportFormat::Json => {
            EvaluateDecisionHandler::new(TracingScoreSink, JsonReporter::new(stdout)).handle(&command)
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Evaluation failed");
            eprintln!("error: {}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(log: &LogConfig) {
    // Validated in `load_config`; an unparsable filter cannot reach here.
    let filter = log.env_filter().unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn exit_code(err: &EvaluateDecisionError) -> u8 {
    match err {
        EvaluateDecisionError::Invalid(_) => 2,
        EvaluateDecisionError::Report(_) => 1,
    }
}
