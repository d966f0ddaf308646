//! CLI entrypoint for MiniPerplx actions
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use miniperplx_application::{
    ActionError, FetchMetadataUseCase, GenerateSpeechUseCase, ResolveGroupConfigUseCase,
    SuggestQuestionsUseCase, SystemClock,
};
use miniperplx_domain::SpeechRequest;
use miniperplx_infrastructure::{
    ConfigLoader, ElevenLabsSpeechProvider, EnvCredentialSource, FileConfig, GeminiLlmGateway,
    HttpPageFetcher,
};
use miniperplx_presentation::{
    ActionSpinner, Cli, Command, ConsoleFormatter, JsonFormatter, read_history,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout is reserved for results
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if cli.show_config {
        let effective =
            toml::to_string_pretty(&config).context("Failed to render configuration")?;
        print!(
            "{}",
            ConsoleFormatter::config_report(
                &ConfigLoader::describe_sources(cli.config.as_ref()),
                &effective
            )
        );
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    let Some(command) = cli.command else {
        bail!("No command given. Run with --help to see the available actions.");
    };

    run(command, &config, cli.quiet).await
}

async fn run(command: Command, config: &FileConfig, quiet: bool) -> Result<()> {
    let credentials = Arc::new(EnvCredentialSource);
    let params = config.action_params();

    match command {
        Command::Suggest { history } => {
            let history = match history {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    read_history(BufReader::new(file))?
                }
                None => read_history(io::stdin().lock())?,
            };
            info!("Suggesting questions for {} messages", history.len());

            let gateway = Arc::new(GeminiLlmGateway::new(&config.llm, credentials));
            let use_case = SuggestQuestionsUseCase::new(gateway);

            let spinner = ActionSpinner::start("Generating follow-up questions...", quiet);
            let result = use_case.execute(&history).await;
            spinner.finish();

            let questions = result.map_err(ActionError::from)?;
            info!("Generated {} follow-up questions", questions.questions().len());
            println!("{}", JsonFormatter::questions(&questions));
        }

        Command::Speech { text, voice, out } => {
            let provider = Arc::new(ElevenLabsSpeechProvider::new(&config.speech)?);
            let use_case = GenerateSpeechUseCase::new(provider, credentials)
                .with_api_key_env(params.speech_api_key_env.clone());

            let spinner = ActionSpinner::start("Synthesizing speech...", quiet);
            let result = use_case
                .execute(&SpeechRequest::new(text).with_voice(voice))
                .await;
            spinner.finish();

            let speech = result.map_err(ActionError::from)?;
            info!("Audio data URI is {} bytes", speech.data_uri().len());
            if let Some(path) = out {
                let audio = speech.decode_audio()?;
                std::fs::write(&path, audio)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote audio to {}", path.display());
            }
            println!("{}", JsonFormatter::speech(&speech));
        }

        Command::Metadata { url } => {
            let fetcher = Arc::new(HttpPageFetcher::new(&config.fetch));
            let use_case =
                FetchMetadataUseCase::new(fetcher).with_revalidate(params.metadata_revalidate);

            let spinner = ActionSpinner::start("Fetching page...", quiet);
            let metadata = use_case.execute(&url).await;
            spinner.finish();

            println!("{}", JsonFormatter::metadata(metadata.as_ref()));
        }

        Command::GroupConfig { group } => {
            let use_case = ResolveGroupConfigUseCase::new(Arc::new(SystemClock));
            println!("{}", JsonFormatter::group_config(&use_case.execute(group)));
        }

        Command::Tools => {
            print!("{}", ConsoleFormatter::tool_catalog());
        }
    }

    Ok(())
}
