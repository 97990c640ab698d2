use log::LevelFilter;

/// Map `-v` occurrences to a log level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` on stderr.
///
/// `RUST_LOG`, when set, wins over the verbosity-derived level.
pub fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbose));
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.parse_default_env();
    builder.format_timestamp(None);

    // Only fails when a logger is already installed
    let _ = builder.try_init();
}
