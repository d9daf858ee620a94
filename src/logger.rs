/// Initializes the global logger.
///
/// Warnings and errors, including unsupported argument diagnostics, are
/// always shown. `verbose` adds debug output.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
