use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the console logger.
///
/// Events go to stdout so skipped-line warnings are interleaved with the
/// sorted names they relate to. Failure summaries are printed to stderr by
/// the binary itself.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "name_sorter=debug,info"
    } else {
        "name_sorter=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(std::env::var_os("NO_COLOR").is_none())
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
