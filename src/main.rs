use anyhow::Result;
use clap::Parser;
use log::info;

use crucible::cli::{self, Commands, CrucibleCli};
use crucible::implementations::assessor::LlmQualityAssessor;
use crucible::implementations::chat::ChatClient;
use crucible::implementations::config::HarnessConfig;
use crucible::implementations::executor::PistonExecutor;
use crucible::implementations::harness::VerificationHarness;
use crucible::implementations::synthesizer::LlmTestSynthesizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = CrucibleCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // .env carries the API key in development setups
    if dotenv::dotenv().is_ok() {
        info!("Loaded environment variables from .env file");
    }

    let config = match &cli.config {
        Some(path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };

    // Handle commands
    match &cli.command {
        Commands::Run {
            code,
            language,
            input,
        } => {
            let executor = PistonExecutor::new(config.executor.clone())?;
            cli::commands::run::execute(&executor, code, language.as_deref(), input.as_deref())
                .await?;
        }

        Commands::Synthesize {
            problem,
            code,
            output,
        } => {
            let chat = ChatClient::new(config.llm.clone())?;
            let synthesizer = LlmTestSynthesizer::new(chat);
            cli::commands::synthesize::execute(&synthesizer, problem, code, output.as_deref())
                .await?;
        }

        Commands::Assess {
            problem,
            code,
            input,
        } => {
            let chat = ChatClient::new(config.llm.clone())?;
            let assessor = LlmQualityAssessor::new(chat);
            cli::commands::assess::execute(&assessor, problem, code, input.as_deref()).await?;
        }

        Commands::Verify {
            problem,
            code,
            language,
            input,
            output,
        } => {
            let chat = ChatClient::new(config.llm.clone())?;
            let harness = VerificationHarness::new(
                Box::new(PistonExecutor::new(config.executor.clone())?),
                Box::new(LlmTestSynthesizer::new(chat.clone())),
                Box::new(LlmQualityAssessor::new(chat)),
            );
            cli::commands::verify::execute(
                &harness,
                problem,
                code,
                language.as_deref(),
                input.as_deref(),
                output.as_deref(),
            )
            .await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();
}
