use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
  Off,
  Error,
  Warn,
  Info,
  Debug,
  Trace,
}

impl From<LogLevel> for LevelFilter {
  fn from(level: LogLevel) -> Self {
    match level {
      LogLevel::Off => LevelFilter::OFF,
      LogLevel::Error => LevelFilter::ERROR,
      LogLevel::Warn => LevelFilter::WARN,
      LogLevel::Info => LevelFilter::INFO,
      LogLevel::Debug => LevelFilter::DEBUG,
      LogLevel::Trace => LevelFilter::TRACE,
    }
  }
}

/// Stdout is reserved for messages to the host.
pub fn init_logging(level: LogLevel) {
  // ignore the error when already initialized
  let _ = tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_max_level(LevelFilter::from(level))
    .with_ansi(false)
    .with_target(false)
    .without_time()
    .try_init();
}
