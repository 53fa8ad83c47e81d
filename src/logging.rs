use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start the logger with the level from the environment, falling back to the
/// given spec. The handle must stay alive for the lifetime of the process.
pub fn setup_logging(fallback_spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(fallback_spec)?
        .format(flexi_logger::colored_default_format)
        .start()
}
