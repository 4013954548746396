use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::ProtocolError;

const IDLE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
  Read = 1,
  Write = 2,
}

impl IoOperation {
  fn from_raw(value: u8) -> Option<IoOperation> {
    match value {
      1 => Some(IoOperation::Read),
      2 => Some(IoOperation::Write),
      _ => None,
    }
  }
}

impl std::fmt::Display for IoOperation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      IoOperation::Read => write!(f, "read"),
      IoOperation::Write => write!(f, "write"),
    }
  }
}

/// Ensures at most one read or write of the duplex stream is outstanding.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight(Arc<AtomicU8>);

impl SingleFlight {
  pub fn new() -> Self {
    Default::default()
  }

  /// Marks the operation as in progress until the returned guard is dropped.
  pub fn begin(&self, operation: IoOperation) -> Result<SingleFlightGuard<'_>, ProtocolError> {
    match self.0.compare_exchange(IDLE, operation as u8, Ordering::SeqCst, Ordering::SeqCst) {
      Ok(_) => Ok(SingleFlightGuard { flight: self }),
      Err(outstanding) => Err(ProtocolError::Reentrant {
        attempted: operation,
        // the state is only ever set from an IoOperation
        outstanding: IoOperation::from_raw(outstanding).unwrap_or(operation),
      }),
    }
  }

  pub fn outstanding(&self) -> Option<IoOperation> {
    IoOperation::from_raw(self.0.load(Ordering::SeqCst))
  }
}

pub struct SingleFlightGuard<'a> {
  flight: &'a SingleFlight,
}

impl Drop for SingleFlightGuard<'_> {
  fn drop(&mut self) {
    self.flight.0.store(IDLE, Ordering::SeqCst);
  }
}

#[cfg(test)]
mod test {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn releases_on_drop() {
    let flight = SingleFlight::new();
    {
      let _guard = flight.begin(IoOperation::Read).unwrap();
      assert_eq!(flight.outstanding(), Some(IoOperation::Read));
    }
    assert_eq!(flight.outstanding(), None);
    let _guard = flight.begin(IoOperation::Write).unwrap();
    assert_eq!(flight.outstanding(), Some(IoOperation::Write));
  }

  #[test]
  fn errors_when_overlapping() {
    let flight = SingleFlight::new();
    let other_handle = flight.clone();
    let _guard = flight.begin(IoOperation::Read).unwrap();
    match other_handle.begin(IoOperation::Write) {
      Err(ProtocolError::Reentrant { attempted, outstanding }) => {
        assert_eq!(attempted, IoOperation::Write);
        assert_eq!(outstanding, IoOperation::Read);
      }
      _ => panic!("Expected reentrant error."),
    }
    // the failed attempt must not release the outstanding operation
    assert_eq!(flight.outstanding(), Some(IoOperation::Read));
  }
}
