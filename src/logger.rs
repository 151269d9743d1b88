use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::{LevelFilter, SetLoggerError};

/// Sends log records to stderr as `[LEVEL] message`.
///
/// Stdout is left to the command output, so `list --json` stays parseable
/// whatever the verbosity.
pub fn initialize(level: LevelFilter, colored: bool) -> Result<(), SetLoggerError> {
    let dispatch = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);
        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{level}] {message}",
                level = colors.color(record.level()),
                message = message,
            ))
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{level}] {message}",
                level = record.level(),
                message = message,
            ))
        })
    };

    dispatch.level(level).chain(std::io::stderr()).apply()
}
