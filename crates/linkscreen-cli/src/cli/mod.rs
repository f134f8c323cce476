//! CLI for linkscreen URL safety classification.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use linkscreen_core::config;
use linkscreen_core::reputation::{FixedReputation, RandomReputation, ReputationSource};
use linkscreen_core::Classifier;
use std::path::PathBuf;
use std::sync::Arc;

use commands::{run_blacklist, run_check, run_scan, Concurrency, ScreenOptions};

/// Top-level CLI for linkscreen.
#[derive(Debug, Parser)]
#[command(name = "linkscreen")]
#[command(about = "linkscreen: classify URLs as safe or unsafe", long_about = None)]
pub struct Cli {
    /// Print verdicts as a JSON array.
    #[arg(long, global = true)]
    pub json: bool,

    /// Exit with an error if any URL is unsafe.
    #[arg(long, global = true)]
    pub fail_on_unsafe: bool,

    /// Run reputation lookups concurrently with the configured limit and timeout.
    #[arg(long, global = true)]
    pub concurrent: bool,

    /// Use this config file instead of ~/.config/linkscreen/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use a fixed reputation score instead of the random placeholder.
    #[arg(long, global = true, value_name = "SCORE")]
    pub fixed_score: Option<f64>,

    /// Log more detail to the log file (-v for per-URL decisions, -vv for everything).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify the given URLs.
    Check {
        /// Candidate URLs, classified in the order given.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Extract URLs from text and classify them.
    Scan {
        /// File to read; stdin when omitted or "-".
        path: Option<PathBuf>,
    },

    /// Show the effective blacklist.
    Blacklist,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let source: Arc<dyn ReputationSource> = match self.fixed_score {
            Some(score) => Arc::new(FixedReputation(score)),
            None => Arc::new(RandomReputation),
        };
        let classifier = Classifier::from_config(&cfg, source)?;

        let opts = ScreenOptions {
            json: self.json,
            fail_on_unsafe: self.fail_on_unsafe,
            concurrency: self.concurrent.then(|| Concurrency {
                max_in_flight: cfg.max_concurrent_lookups,
                lookup_timeout: cfg.lookup_timeout(),
            }),
        };

        match self.command {
            CliCommand::Check { urls } => run_check(&classifier, &urls, &opts).await?,
            CliCommand::Scan { path } => run_scan(&classifier, path.as_deref(), &opts).await?,
            CliCommand::Blacklist => run_blacklist(classifier.blacklist(), self.json)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
