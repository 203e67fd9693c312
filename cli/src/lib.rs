use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use deck_common::PresentationStyle;
use deck_core::{build_presentation, generate_slides, Config, DeckError, EmojiPicker};
use deck_pollinations::PollinationsClient;

/// Slide counts offered by the original product; the CLI accepts anything
/// in between but clamps to this range.
const MIN_SLIDES: usize = 1;
const MAX_SLIDES: usize = 20;

#[derive(Parser)]
#[command(name = "deck")]
#[command(about = "AI-powered presentation generation and PPTX export")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Override generation model (e.g. openai)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a presentation from a topic and export it
    Generate {
        /// Presentation topic
        topic: String,
        /// Number of slides to generate
        #[arg(short, long, default_value_t = 7)]
        count: usize,
        /// Presentation style
        #[arg(short, long, default_value = "corporate")]
        style: PresentationStyle,
        /// Output directory for the .pptx file
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Skip the .pptx export, print the outline only
        #[arg(long)]
        no_export: bool,
    },
    /// List the available presentation styles
    Styles,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("RUST_LOG", "debug");
    }

    if let Some(model) = &cli.model {
        std::env::set_var("DECK_MODEL", model);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match cli.command {
        Commands::Generate {
            topic,
            count,
            style,
            out,
            no_export,
        } => generate(topic, count, style, out, no_export).await,
        Commands::Styles => {
            list_styles();
            Ok(())
        }
    }
}

async fn generate(
    topic: String,
    count: usize,
    style: PresentationStyle,
    out: PathBuf,
    no_export: bool,
) -> Result<()> {
    let topic = topic.trim().to_string();
    if topic.is_empty() {
        return Err(DeckError::EmptyTopic.into());
    }
    let count = count.clamp(MIN_SLIDES, MAX_SLIDES);

    let config = Config::from_env();
    let client = PollinationsClient::new(config.endpoint, config.model, config.seed);
    let mut emoji = EmojiPicker::random();

    println!("Генерация {count} слайдов: {topic} ({})", style.label());
    let slides = generate_slides(&client, &topic, count, style, &mut emoji).await;
    let presentation = build_presentation(&topic, style, slides);

    println!("\n{}", presentation.title);
    for (i, slide) in presentation.slides.iter().enumerate() {
        let bullets = slide.content_lines().count();
        println!("  {}. {} {} ({bullets} пунктов)", i + 1, slide.emoji, slide.title);
    }

    if no_export {
        return Ok(());
    }

    let path = deck_pptx::export_to_file(&presentation, &out)?;
    println!("\nСохранено: {}", path.display());
    Ok(())
}

fn list_styles() {
    for style in PresentationStyle::ALL {
        let palette = style.palette();
        println!(
            "{style:<10} {} (фон #{}, акцент #{})",
            style.label(),
            palette.background,
            palette.accent
        );
    }
}
