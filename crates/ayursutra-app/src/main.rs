mod chat_loop;
mod cli;
mod command;
mod render;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use ayursutra_ai::{ChatSession, GeminiClient, GeminiConfig, Persona, SubmitOutcome};
use ayursutra_common::{AyurError, Result};
use ayursutra_config::schema::AyurConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter.add_directive(LevelFilter::INFO.into()),
    }
}

/// Load config, logging warnings to stderr before the main subscriber exists.
fn load_config(args: &cli::Args) -> Result<AyurConfig> {
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter("warn"))
        .finish();

    tracing::subscriber::with_default(bootstrap, || match args.config.as_deref() {
        Some(path) => ayursutra_config::load_config(Some(Path::new(path))).map_err(AyurError::from),
        None => Ok(ayursutra_config::load_config(None).unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            AyurConfig::default()
        })),
    })
}

fn build_client(config: &AyurConfig, api_key: String) -> Result<GeminiClient> {
    let assistant = &config.assistant;
    let gemini = GeminiConfig::new(api_key)
        .with_model(assistant.model.clone())
        .with_api_base(assistant.api_base.clone())
        .with_temperature(assistant.temperature)
        .with_top_k(assistant.top_k)
        .with_top_p(assistant.top_p)
        .with_max_output_tokens(assistant.max_output_tokens)
        .with_timeouts(
            Duration::from_secs(u64::from(assistant.connect_timeout)),
            Duration::from_secs(u64::from(assistant.request_timeout)),
        );
    GeminiClient::new(gemini).map_err(|e| AyurError::Ai(e.to_string()))
}

async fn run(args: cli::Args) -> Result<ExitCode> {
    let mut config = load_config(&args)?;

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(&directive))
        .init();

    tracing::info!("AyurSutra v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    if let Some(model) = args.model.clone() {
        config.assistant.model = model;
    }

    if args.print_config {
        println!("{}", ayursutra_config::config_to_json(&config));
        return Ok(ExitCode::SUCCESS);
    }

    let api_key = ayursutra_config::resolve_api_key()?;
    let client = build_client(&config, api_key)?;
    tracing::info!(model = %config.assistant.model, "Assistant ready");

    let persona = Persona::new(config.persona.greeting.clone(), config.persona.preamble.clone());
    let session = ChatSession::new(Arc::new(client), persona);

    if let Some(question) = args.ask.as_deref() {
        return Ok(match chat_loop::ask_once(&session, question).await {
            SubmitOutcome::Answered => ExitCode::SUCCESS,
            SubmitOutcome::Ignored(_) => {
                eprintln!("Nothing to ask: the question is blank.");
                ExitCode::from(2)
            }
            SubmitOutcome::Failed(kind) => {
                tracing::debug!(?kind, "one-shot question failed");
                ExitCode::FAILURE
            }
        });
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    chat_loop::run(session, stdin, &config.persona.name).await?;
    tracing::info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    ayursutra_config::secrets::load_dotenv(Path::new(".env"));

    let args = cli::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ayursutra: {e}");
            ExitCode::FAILURE
        }
    }
}
