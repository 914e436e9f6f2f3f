use anyhow::Context;
use clap::{ArgAction, Parser};
use deckwright::backend::{PptxBackend, RecordingBackend};
use deckwright::content::DeckContent;
use deckwright::layout::Canvas;
use deckwright::logging::{LoggingConfig, init_logging};
use deckwright::slides::build_deck;
use deckwright::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deckwright")]
#[command(version, about = "Build the DeskBot showcase deck as a PowerPoint file")]
struct Cli {
    /// YAML config file (palette, typeface, properties, output)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output path, overrides the config file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the backend call log as YAML instead of writing a file
    #[arg(long, action = ArgAction::SetTrue)]
    dry_run: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', action = ArgAction::SetTrue)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose, cli.quiet));

    let mut config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(output) = cli.output {
        config.output = output;
        config.validate().context("Invalid output")?;
    }

    let theme = config.theme().context("Invalid palette")?;
    let deck = build_deck(&Canvas::WIDESCREEN, &DeckContent::showcase());
    log::info!("Built deck with {} slides", deck.slide_count());

    if cli.dry_run {
        let mut backend = RecordingBackend::new();
        deck.export(&theme, &mut backend, &config.output)
            .context("Failed to render deck")?;
        let yaml = serde_saphyr::to_string(&backend.into_calls())
            .map_err(|e| anyhow::anyhow!("Failed to serialize call log: {e}"))?;
        print!("{}", yaml);
        return Ok(());
    }

    let mut backend = PptxBackend::new()
        .with_theme(config.package_theme(&theme))
        .with_properties(config.document_properties());
    deck.export(&theme, &mut backend, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    println!("✅ PowerPoint presentation saved to: {}", config.output.display());
    Ok(())
}
