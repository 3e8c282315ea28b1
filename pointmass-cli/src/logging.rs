use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};

/// Setup console logging on stderr.
///
/// An explicit `level` wins over `RUST_LOG`; without either the level is
/// `info`. Keep the returned handle alive until the program exits.
pub fn setup(level: Option<&str>) -> Result<LoggerHandle> {
    let logger = match level {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str("info")?,
    };
    let handle = logger.format(single_line_format).log_to_stderr().start()?;

    log::debug!("Adjust the log level with --log-level or RUST_LOG");

    Ok(handle)
}

/// `LEVEL [time] [file:line] message`
pub fn single_line_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        record.level(),
        now.now().format("%H:%M:%S%.6f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args(),
    )
}
