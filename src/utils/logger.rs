use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Verbosity comes from the command line only; `RUST_LOG` is ignored.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("amalgamate=debug,info")
    } else {
        EnvFilter::new("amalgamate=info")
    }
}

pub fn init_cli_logger(verbose: bool) {
    // stdout carries the dry-run report, so logs go to stderr
    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
