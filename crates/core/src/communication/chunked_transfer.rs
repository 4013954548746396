use std::ops::Range;

use super::BUFFER_SIZE;

/// Progress of a variable data transfer in either direction.
///
/// Every chunk after the first is preceded by a "ready" pulse
/// from the receiving side.
pub(super) struct ChunkedTransfer {
  total: usize,
  transferred: usize,
}

impl ChunkedTransfer {
  pub fn new(total: usize) -> Self {
    ChunkedTransfer { total, transferred: 0 }
  }

  /// The range of the next chunk or `None` when complete.
  pub fn next_chunk(&self) -> Option<Range<usize>> {
    if self.transferred >= self.total {
      None
    } else {
      Some(self.transferred..std::cmp::min(self.transferred + BUFFER_SIZE, self.total))
    }
  }

  /// If a ready pulse needs to be exchanged before the next chunk.
  pub fn needs_ready_pulse(&self) -> bool {
    self.transferred > 0
  }

  pub fn complete_chunk(&mut self, chunk: Range<usize>) {
    debug_assert_eq!(chunk.start, self.transferred);
    self.transferred = chunk.end;
  }
}
