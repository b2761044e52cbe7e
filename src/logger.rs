//! Logger setup for the binary.

/// Installs `env_logger` as the `log` backend.
///
/// `RUST_LOG` still applies on top of the chosen default level.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
