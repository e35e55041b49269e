use std::sync::OnceLock;

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Installs the process-wide logger: rotated files under `logs/`, all records
/// mirrored to stdout and warnings to stderr.
///
/// Only the first call has an effect, so tests may call it unconditionally.
pub fn setup_logging(base_level: &str) {
    LOGGER.get_or_init(|| {
        Logger::try_with_env_or_str(base_level)
            .unwrap_or_else(|e| panic!("Invalid log filter {base_level:?}: {e}"))
            .log_to_file(FileSpec::default().directory("logs"))
            .duplicate_to_stderr(Duplicate::Warn)
            .duplicate_to_stdout(Duplicate::All)
            .rotate(
                Criterion::Size(1024 * 1024), //1MB
                Naming::Timestamps,
                Cleanup::KeepLogFiles(5),
            )
            .start()
            .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
    });
}
