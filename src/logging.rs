//! Structured logging helpers
//!
//! Structured logs are for debugging only; all user-facing output goes to
//! stdout through the reporter.

use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, silent: bool) {
    let level = if silent {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the per-run setup
pub fn log_run_info(target_count: usize, proxy: Option<&str>) {
    info!("Processing {target_count} target(s)");
    if let Some(proxy) = proxy {
        info!("Routing through proxy: {proxy}");
    }
}

/// Log one page's extraction outcome
pub fn log_page_result(url: &str, url_count: usize, path_count: usize) {
    debug!("{url} -> {url_count} URL(s), {path_count} path(s)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
