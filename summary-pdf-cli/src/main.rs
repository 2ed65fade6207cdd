use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use summary_pdf::{SummaryContent, SummaryDocument};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_OUTPUT: &str = "output/pdf/needl-one-page-summary.pdf";

#[derive(Parser)]
#[command(
    name = "summary-pdf",
    about = "Generate the one-page app summary PDF",
    version,
    author
)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// JSON file with the summary content (defaults to the built-in Needl summary)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Log layout and encoding details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "summary_pdf=debug,summary_pdf_cli=debug"
    } else {
        "summary_pdf=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let content = match &cli.content {
        Some(path) => SummaryContent::from_json_file(path)
            .with_context(|| format!("failed to load summary content from {}", path.display()))?,
        None => SummaryContent::needl(),
    };
    debug!(sections = content.sections.len(), "loaded summary content");

    SummaryDocument::new(content)
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("{}", cli.output.display());
    Ok(())
}
