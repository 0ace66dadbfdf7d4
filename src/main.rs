use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use slide_content_builder::prompts::{self, RenderMode};
use slide_content_builder::{
    quality, Config, Language, Level, PresentationRequest, SlideBuilder, Tone,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "slide-content-builder")]
#[command(about = "Build slide prompts or generate slide content with a chat model")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report missing or weak fields.
    Check(RequestArgs),
    /// Print a prompt to paste into any LLM.
    Prompt(RequestArgs),
    /// Ask the configured model for slide content.
    Generate(RequestArgs),
}

#[derive(Debug, Args)]
struct RequestArgs {
    #[arg(long, default_value = "")]
    topic: String,

    /// Who the talk is for (e.g. HR, students, engineers).
    #[arg(long, default_value = "")]
    audience: String,

    /// What the audience should do or learn.
    #[arg(long, default_value = "")]
    goal: String,

    /// Professional, Academic, Sales/Marketing, Simple or Technical.
    #[arg(long, default_value_t = Tone::Professional)]
    tone: Tone,

    /// Talk length in minutes.
    #[arg(long = "duration", default_value_t = 10)]
    duration_min: u32,

    #[arg(long = "slides", default_value_t = 8)]
    slide_count: u32,

    /// Beginner, Intermediate or Advanced.
    #[arg(long, default_value_t = Level::Beginner)]
    level: Level,

    /// English or Arabic.
    #[arg(long, default_value_t = Language::English)]
    language: Language,

    #[arg(long, default_value = "")]
    must_include: String,

    #[arg(long, default_value = "")]
    must_avoid: String,

    #[arg(long, default_value = "")]
    extra_notes: String,

    #[arg(long)]
    no_speaker_notes: bool,

    /// Draft outline or notes to refine.
    #[arg(long = "content", default_value = "")]
    user_content: String,
}

impl From<RequestArgs> for PresentationRequest {
    fn from(args: RequestArgs) -> Self {
        Self {
            topic: args.topic,
            audience: args.audience,
            goal: args.goal,
            tone: args.tone,
            duration_min: args.duration_min,
            slide_count: args.slide_count,
            level: args.level,
            language: args.language,
            must_include: args.must_include,
            must_avoid: args.must_avoid,
            speaker_notes: !args.no_speaker_notes,
            extra_notes: args.extra_notes,
            user_content: args.user_content,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slide_content_builder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match args.command {
        Command::Check(request) => {
            println!("{}", quality::check(&request.into()));
        }
        Command::Prompt(request) => {
            let request: PresentationRequest = request.into();
            println!("{}\n", quality::check(&request));
            println!("{}", prompts::render_prompt(&request, RenderMode::Guided));
        }
        Command::Generate(request) => {
            let request: PresentationRequest = request.into();
            println!("{}\n", quality::check(&request));

            info!("Generating slides");
            match generate(&request, Config::from_env).await {
                Ok(slides) => println!("{}", slides),
                Err(e) => {
                    error!("Generation failed: {}", e);
                    println!("{}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Configuration is only loaded here; the other commands never need it.
async fn generate<F>(
    request: &PresentationRequest,
    load_config: F,
) -> slide_content_builder::Result<String>
where
    F: FnOnce() -> slide_content_builder::Result<Config>,
{
    let builder = SlideBuilder::from_config(&load_config()?)?;
    builder.try_generate(request).await
}
