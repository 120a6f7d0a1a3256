//! LCA Engine batch runner
//!
//! Loads a dataset file, benchmarks every building variant it contains and
//! prints the reports as JSON on stdout. An optional first argument
//! overrides the configured dataset path.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lca_engine::adapters::DatasetFile;
use lca_engine::application::{BenchmarkReport, ComputeBenchmarkHandler, ComputeBenchmarkQuery};
use lca_engine::config::{AppConfig, LoggingConfig};

#[derive(Debug, Serialize)]
struct VariantOutcome {
    variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<BenchmarkReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.as_str().into());

    // Logs go to stderr so stdout stays valid JSON.
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load()?;
    if let Some(path) = std::env::args().nth(1) {
        config.dataset.path = PathBuf::from(path);
    }
    config.validate()?;

    init_tracing(&config.logging);
    tracing::info!(path = %config.dataset.path.display(), "Loading dataset");

    let dataset = DatasetFile::load(&config.dataset.path).await?;
    let handler = ComputeBenchmarkHandler::new(Arc::new(dataset.benchmark_version_reader()));

    let mut outcomes = Vec::with_capacity(dataset.variants.len());
    for variant in &dataset.variants {
        let result = match ComputeBenchmarkQuery::from_variant(
            variant,
            config.benchmark.default_version(),
            config.benchmark.default_category(),
        ) {
            Ok(query) => handler.handle(query).await,
            Err(e) => Err(e),
        };

        let outcome = match result {
            Ok(report) => VariantOutcome {
                variant: variant.name.clone(),
                report: Some(report),
                error: None,
            },
            Err(e) => {
                tracing::warn!(variant = %variant.name, "Benchmark failed: {}", e);
                VariantOutcome {
                    variant: variant.name.clone(),
                    report: None,
                    error: Some(e.to_string()),
                }
            }
        };
        outcomes.push(outcome);
    }

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    tracing::info!(variants = outcomes.len(), "Benchmark run finished");

    Ok(())
}
