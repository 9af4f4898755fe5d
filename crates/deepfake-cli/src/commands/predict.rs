//! Local prediction command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use deepfake_core::analysis::{self, model::AnalysisRequest};
use deepfake_core::MockScorer;

#[derive(Args)]
pub struct PredictArgs {
    /// Name of the media file to score
    pub filename: String,

    /// Media content type
    #[arg(long, default_value = analysis::model::DEFAULT_CONTENT_TYPE)]
    pub content_type: String,

    /// Seed the mock scorer for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: PredictArgs) -> Result<()> {
    let scorer = match args.seed {
        Some(seed) => MockScorer::seeded(seed),
        None => MockScorer::new(),
    };

    let request = AnalysisRequest::new(args.filename).with_content_type(args.content_type);
    let response = analysis::analyze(&scorer, &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let verdict = if response.is_deepfake {
        response.message.red().bold()
    } else {
        response.message.green().bold()
    };

    println!();
    println!("  {}       {}", "File".dimmed(), response.filename);
    println!("  {}    {}", "Verdict".dimmed(), verdict);
    println!("  {} {:.2}%", "Confidence".dimmed(), response.confidence * 100.0);
    println!("  {}      {}", "Model".dimmed(), response.model_version);
    println!();

    Ok(())
}
