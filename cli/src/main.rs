//! CLI entrypoint for Consilium
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use consilium_application::{
    ConsultationError, ConsultationLogger, ConsultationService, NoConsultationLogger,
    RunConsultationUseCase,
};
use consilium_infrastructure::{ConfigLoader, HttpSpecialistGateway, JsonlConsultationLogger};
use consilium_presentation::output::OutputFormatter;
use consilium_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load the specialist roster once; it is read-only afterwards
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.validate()?;
    let specialists = config.specialists();

    // === Dependency Injection ===
    let gateway = Arc::new(HttpSpecialistGateway::new());

    // Health mode: probe every specialist and exit
    if cli.health {
        println!("Specialist health:");
        for health in gateway.check_all_health(&specialists).await {
            match &health.detail {
                Some(detail) => println!("  {:<16} {} ({})", health.specialist, health.state, detail),
                None => println!("  {:<16} {}", health.specialist, health.state),
            }
        }
        return Ok(());
    }

    // Consultation mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --health to probe the specialists instead."),
    };

    let logger: Arc<dyn ConsultationLogger> = match &cli.log_file {
        Some(path) => match JsonlConsultationLogger::new(path) {
            Some(jsonl) => Arc::new(jsonl),
            None => Arc::new(NoConsultationLogger),
        },
        None => Arc::new(NoConsultationLogger),
    };

    // Ctrl-C cancels the whole consultation; no partial result is shown
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let use_case = RunConsultationUseCase::new(gateway, specialists)
        .with_policy(Arc::new(config.synthesis_policy()))
        .with_logger(logger)
        .with_cancellation(token);
    let service = ConsultationService::new(use_case)
        .with_max_question_chars(config.consultation.max_question_chars);

    info!("Starting consultation");

    // Execute with or without progress reporting
    let result = if cli.quiet {
        service.handle(&question, cli.language.as_deref()).await
    } else {
        let progress = ProgressReporter::new();
        service
            .handle_with_progress(&question, cli.language.as_deref(), &progress)
            .await
    };

    let result = match result {
        Ok(result) => result,
        Err(ConsultationError::Cancelled) => bail!("Consultation cancelled"),
        Err(e) => return Err(e.into()),
    };

    // Output results
    let formatter = ConsoleFormatter;
    let output = match cli.output {
        OutputFormat::Full => formatter.format(&result),
        OutputFormat::Summary => formatter.format_summary_only(&result),
        OutputFormat::Json => formatter.format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
