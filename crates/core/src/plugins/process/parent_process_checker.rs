use std::thread;
use std::time::Duration;

/// How often the parent process is checked for.
pub const PARENT_PROCESS_CHECK_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
#[error("Parent process {0} is no longer running.")]
pub struct ParentProcessLostError(pub u32);

/// Starts a thread that polls for the existence of the parent process.
/// If the parent process no longer exists, then it will exit the current process.
pub fn start_parent_process_checker_thread(current_process_name: String, parent_process_id: u32) -> std::io::Result<thread::JoinHandle<()>> {
  start_parent_process_checker_thread_with_interval(current_process_name, parent_process_id, PARENT_PROCESS_CHECK_INTERVAL)
}

pub fn start_parent_process_checker_thread_with_interval(
  current_process_name: String,
  parent_process_id: u32,
  interval: Duration,
) -> std::io::Result<thread::JoinHandle<()>> {
  thread::Builder::new().name("parent-process-checker".to_string()).spawn(move || loop {
    thread::sleep(interval);
    check_parent_process_or_exit(&current_process_name, parent_process_id);
  })
}

/// Exits the current process with code 1 when the parent process is gone.
pub fn check_parent_process_or_exit(current_process_name: &str, parent_process_id: u32) {
  if let Err(err) = check_parent_process(parent_process_id) {
    tracing::error!("[{}]: Parent process lost. Exiting.", current_process_name);
    tracing::debug!("{:#}", err);
    std::process::exit(1);
  }
}

/// A single liveness check of the parent process.
pub fn check_parent_process(parent_process_id: u32) -> Result<(), ParentProcessLostError> {
  if is_process_active(parent_process_id) {
    Ok(())
  } else {
    Err(ParentProcessLostError(parent_process_id))
  }
}

#[cfg(unix)]
fn is_process_active(process_id: u32) -> bool {
  // 0 and negative values signal process groups
  let Ok(process_id) = libc::pid_t::try_from(process_id) else {
    return false;
  };
  if process_id <= 0 {
    return false;
  }

  // signal 0 only checks that the process could be signaled
  let result = unsafe { libc::kill(process_id, 0) };
  if result == 0 {
    true
  } else {
    // the process exists, but is owned by someone else
    std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
  }
}

#[cfg(windows)]
fn is_process_active(process_id: u32) -> bool {
  use winapi::shared::minwindef::DWORD;
  use winapi::shared::minwindef::FALSE;
  use winapi::um::handleapi::CloseHandle;
  use winapi::um::minwinbase::STILL_ACTIVE;
  use winapi::um::processthreadsapi::GetExitCodeProcess;
  use winapi::um::processthreadsapi::OpenProcess;
  use winapi::um::winnt::PROCESS_QUERY_LIMITED_INFORMATION;

  unsafe {
    let process = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, FALSE, process_id);
    if process.is_null() {
      return false;
    }
    let mut exit_code: DWORD = 0;
    let success = GetExitCodeProcess(process, &mut exit_code);
    CloseHandle(process);
    success != FALSE && exit_code == STILL_ACTIVE
  }
}
