use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inquiry_core::{PlannerConfig, QueryPlanner};
use story_world::StoryArchive;

#[derive(Parser, Debug)]
#[command(name = "ask")]
#[command(about = "Ask a question about a story archive and print the matching events as JSON")]
struct Cli {
    /// Story archive in TOML.
    #[arg(long, env = "STORY_FILE", default_value = "data/macondo.toml")]
    story: PathBuf,

    /// Planner configuration in TOML.
    #[arg(long, env = "PLANNER_CONFIG")]
    config: Option<PathBuf>,

    /// Print the question analysis to stderr before answering.
    #[arg(long, default_value_t = false)]
    explain: bool,

    /// The question, e.g. "¿Cómo murió Melquíades?"
    #[arg(required = true)]
    question: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let archive = StoryArchive::load(&cli.story)
        .with_context(|| format!("loading story from {}", cli.story.display()))?;

    let config = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("reading planner config {}", path.display()))?;
            PlannerConfig::from_toml_str(&source)
                .with_context(|| format!("parsing planner config {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };

    let planner = QueryPlanner::new(archive, config);
    let question = cli.question.join(" ");

    if cli.explain {
        let analysis = planner.analyze(&question)?;
        eprintln!("{}", serde_json::to_string_pretty(&analysis)?);
    }

    let outcome = planner.plan(&question)?;
    println!("{}", serde_json::to_string_pretty(&outcome.to_response())?);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
