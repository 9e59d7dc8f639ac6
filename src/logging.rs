//! Debug tracing setup.

use log::LevelFilter;

/// Initialize `env_logger` for debug tracing.
///
/// Tracing is off unless `verbose` is set; `RUST_LOG` overrides either way.
/// Calling this more than once is harmless.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    let _ = builder.try_init();
}
