use anyhow::Context;
use clap::Parser;
use harkness_template::cli;
use harkness_template::types::TemplateConfig;

#[derive(Parser)]
#[command(name = "harkness-template")]
#[command(about = "Generate the Harkness Helper spreadsheet template")]
#[command(long_about = "Harkness Helper - spreadsheet template generator

Writes Harkness_Helper_Template.xlsx to the current directory with eight sheets:
  Settings, Discussions, Students, Transcripts,
  SpeakerMap, StudentReports, Prompts, Courses

Set RUST_LOG=debug to see per-sheet progress on stderr.")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let config = TemplateConfig::default();
    cli::generate(&config).with_context(|| {
        format!(
            "Failed to write template to {}",
            config.output_path.display()
        )
    })
}
