//! Subcommand implementations
//!
//! `evaluate` and `compare` read the same JSON bodies the HTTP endpoints
//! accept and print the same JSON the endpoints return.

use chrono::{DateTime, Utc};
use std::{
    fs,
    io::{self, Read},
    net::IpAddr,
    path::{Path, PathBuf},
};
use tenderscore_core::{EvaluationError, QuoteEvaluator, compare_quotes};
use tenderscore_http::runtime::{
    ConfigError, HttpEvaluationRuntime, HttpRuntimeConfigBuilder, ServeError,
    types::{
        ANALYSIS_TYPE, AnalyzeQuotesRequest, AnalyzeQuotesResponse, CompareQuotesRequest,
        CompareQuotesResponse,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Serve(#[from] ServeError),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("failed to render output: {0}")]
    Render(#[source] serde_json::Error),
}

/// Parse `--now` values.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp such as 2025-04-01T09:00:00Z: {e}"))
}

/// Read a payload from a file, or from stdin when the path is `-`.
fn read_payload<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn render<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::Render)
}

pub fn evaluate(input: &Path, now: Option<DateTime<Utc>>) -> Result<String, CliError> {
    let request: AnalyzeQuotesRequest = read_payload(input)?;
    let quotes = request.quotes.unwrap_or_default();
    let rfp = request.rfp.unwrap_or_default();
    let now = now.unwrap_or_else(Utc::now);

    let analysis = QuoteEvaluator::new().evaluate(&quotes, &rfp, now)?;
    tracing::debug!(path = %input.display(), quotes = quotes.len(), "Evaluated quote file");

    render(&AnalyzeQuotesResponse {
        success: true,
        analysis,
        timestamp: now,
        analysis_type: ANALYSIS_TYPE,
    })
}

pub fn compare(input: &Path) -> Result<String, CliError> {
    let request: CompareQuotesRequest = read_payload(input)?;
    let comparison = compare_quotes(&request.quotes.unwrap_or_default())?;

    render(&CompareQuotesResponse {
        success: true,
        comparison,
        timestamp: Utc::now(),
    })
}

/// Start the HTTP runtime; flags override environment variables.
pub fn serve(host: Option<IpAddr>, port: Option<u16>) -> Result<(), CliError> {
    let mut builder = HttpRuntimeConfigBuilder::from_env()?;
    if let Some(host) = host {
        builder = builder.host(host);
    }
    if let Some(port) = port {
        builder = builder.port(port);
    }
    let config = builder.build()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(HttpEvaluationRuntime::default().serve(config))?;
    Ok(())
}
