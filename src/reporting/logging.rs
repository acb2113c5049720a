use log::debug;

use crate::config::Config;
use crate::core::constants::timeouts;

/// Initialize the logger with appropriate level based on verbosity.
///
/// Quiet keeps errors only, verbose adds debug records. Safe to call more
/// than once; later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Level filter for the given flags (quiet takes precedence)
pub fn level_for(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Error
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config
        .timeout
        .unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS);
    let use_blocklist = config.use_blocklist.unwrap_or(true);

    debug!(
        "Configuration: timeout={timeout}s, archive={}, blocklist={use_blocklist}",
        config.archive_base_url()
    );
    if let Some(ref path) = config.blocklist_file {
        debug!("Blocklist file: {path}");
    }
}

/// Log the blocklist that will be applied
pub fn log_blocklist_info(domain_count: usize) {
    debug!("Checking against {domain_count} blocked domain(s)");
}
