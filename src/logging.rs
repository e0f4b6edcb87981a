use env_logger::Builder;
use log::LevelFilter;

/// Installs the global logger at the level chosen on the command line.
/// Output is message-oriented: no timestamps or module targets.
pub fn init(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
