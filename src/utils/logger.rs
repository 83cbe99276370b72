use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `--verbose` wins over `--quiet`.
pub fn default_directives(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "line_gen=debug,info",
        (false, true) => "line_gen=warn",
        (false, false) => "line_gen=info",
    }
}

pub fn init_cli_logger(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false, false), "line_gen=info");
        assert_eq!(default_directives(false, true), "line_gen=warn");
        assert_eq!(default_directives(true, false), "line_gen=debug,info");
        assert_eq!(default_directives(true, true), "line_gen=debug,info");
    }

    #[test]
    fn test_directives_parse() {
        for (verbose, quiet) in [(false, false), (false, true), (true, false)] {
            assert!(EnvFilter::try_new(default_directives(verbose, quiet)).is_ok());
        }
    }
}
