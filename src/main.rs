use clap::Parser;
use name_sorter::utils::{logger, validation::Validate};
use name_sorter::{CliConfig, NamePipeline, NameSortError, SortEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("Name sorting failed: {} (Kind: {:?})", e, e.kind());
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), NameSortError> {
    config.validate()?;

    let input_path = config
        .input_path()
        .ok_or_else(|| NameSortError::invalid_param("input path is absent"))?;

    let pipeline = NamePipeline::new(input_path)?;
    let summary = SortEngine::new(pipeline).run()?;

    tracing::info!(
        "Sorted {} names ({} lines skipped), output saved to: {}",
        summary.names_sorted,
        summary.lines_skipped,
        summary.output_path.display()
    );
    Ok(())
}
