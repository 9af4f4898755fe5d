//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use deepfake_core::{MockScorer, Scorer, Settings};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on [default: 8000]
    #[arg(long, env = "DEEPFAKE_PORT")]
    pub port: Option<u16>,

    /// Host to bind to [default: 0.0.0.0]
    #[arg(long, env = "DEEPFAKE_HOST")]
    pub host: Option<String>,

    /// Settings file (TOML)
    #[arg(short, long, env = "DEEPFAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed the mock scorer for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (requires --log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("logs/deepfake-api.log"))
    }

    /// Resolve settings: defaults, then the settings file, then flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        Ok(settings)
    }
}

/// Banner label for the scorer, flagging reproducible runs.
fn model_label(scorer: &MockScorer) -> String {
    if scorer.is_seeded() {
        format!("{} {}", scorer.model_version(), "(seeded)".yellow())
    } else {
        scorer.model_version().to_string()
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let settings = args.settings()?;

    let scorer = match args.seed {
        Some(seed) => MockScorer::seeded(seed),
        None => MockScorer::new(),
    };
    let model = model_label(&scorer);
    let scorer: Arc<dyn Scorer> = Arc::new(scorer);

    let base = format!("http://{}:{}", settings.host, settings.port);

    println!();
    println!(
        "  {} {}",
        settings.project_name.cyan().bold(),
        settings.version.dimmed()
    );
    println!();
    println!("  {}      {}{}", "API".green(), base, settings.analysis_path());
    println!("  {}   {}/health", "Health".green(), base);
    println!("  {}     {}{}", "Docs".green(), base, settings.docs_url);
    println!("  {}    {}", "Model".green(), model);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    deepfake_web::run_server(settings, scorer).await?;

    Ok(())
}
