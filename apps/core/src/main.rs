// NeuroSpace Core Entry Point
// Classroom design advisor: query in, recommendation out

mod classify;
mod config;
mod error;
mod logging;
mod recommend;
mod service;

#[cfg(test)]
mod tests;

use anyhow::{bail, Context};
use std::sync::Arc;
use tracing::info;

use config::AppConfig;
use recommend::{RandomChooser, RecommendationDataset};
use service::AdvisorService;

const USAGE: &str = "Usage: neurospace-core [--query <text>]";

/// `--query <text>` answers once; no arguments serves JSON lines on stdin.
fn parse_query_arg(args: &[String]) -> anyhow::Result<Option<String>> {
    match args {
        [] => Ok(None),
        [flag, rest @ ..] if flag == "--query" || flag == "-q" => {
            if rest.is_empty() {
                bail!("--query needs a value\n{}", USAGE);
            }
            Ok(Some(rest.join(" ")))
        }
        [flag, ..] if flag == "--help" || flag == "-h" => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        [other, ..] => bail!("Unknown argument '{}'\n{}", other, USAGE),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = parse_query_arg(&args)?;

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(config.log_format).context("Failed to initialize logging")?;

    let dataset = Arc::new(RecommendationDataset::load_optional(config.dataset_path.as_deref()));
    info!("Starting with {} dataset rows", dataset.len());

    let service = AdvisorService::new(&config, dataset, Arc::new(RandomChooser));

    match query {
        Some(query) => {
            let text = service.recommend(&query).context("Query rejected")?;
            println!("{}", text);
        }
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            service
                .run(stdin, tokio::io::stdout())
                .await
                .context("Service loop failed")?;
        }
    }

    Ok(())
}
