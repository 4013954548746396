use clap::Parser;
use process_plugin_core::plugins::process::handle_process_stdio_messages;
use process_plugin_core::plugins::process::start_parent_process_checker_thread;
use process_plugin_core::plugins::process::start_parent_process_checker_thread_with_interval;
use std::time::Duration;

mod formatter;
mod handler;
mod logging;

use logging::LogLevel;

#[derive(Debug, Parser)]
#[command(version, about = "Formats plain text files for a host process over stdin and stdout.")]
struct Args {
  /// Process id of the host. This process exits once the host is gone.
  #[arg(long)]
  parent_pid: u32,
  /// Messages at this level and above are written to stderr.
  #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
  log_level: LogLevel,
  /// Milliseconds between checks for the parent process.
  #[arg(long, hide = true)]
  parent_check_interval_ms: Option<u64>,
}

fn main() {
  let args = Args::parse();
  logging::init_logging(args.log_level);

  let process_name = env!("CARGO_PKG_NAME").to_string();
  let checker_result = match args.parent_check_interval_ms {
    Some(interval_ms) => start_parent_process_checker_thread_with_interval(process_name, args.parent_pid, Duration::from_millis(interval_ms)),
    None => start_parent_process_checker_thread(process_name, args.parent_pid),
  };
  if let Err(err) = checker_result {
    tracing::error!("Error starting parent process checker: {}", err);
    std::process::exit(1);
  }

  if let Err(err) = handle_process_stdio_messages(handler::create_plugin_handler()) {
    tracing::error!("{}", err);
    std::process::exit(1);
  }
}
