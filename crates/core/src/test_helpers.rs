use std::io::ErrorKind;
use std::io::Read;
use std::io::Write;

use crossbeam_channel::Receiver;
use crossbeam_channel::Sender;

/// Reading end of an in-memory pipe. Returns EOF once the writer is dropped.
pub struct PipeReader {
  rx: Receiver<Vec<u8>>,
  buf: Vec<u8>,
  pos: usize,
}

impl Read for PipeReader {
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    if buf.is_empty() {
      return Ok(0);
    }
    while self.pos == self.buf.len() {
      match self.rx.recv() {
        Ok(data) => {
          self.buf = data;
          self.pos = 0;
        }
        Err(_) => return Ok(0),
      }
    }
    let len = std::cmp::min(buf.len(), self.buf.len() - self.pos);
    buf[..len].copy_from_slice(&self.buf[self.pos..self.pos + len]);
    self.pos += len;
    Ok(len)
  }
}

/// Writing end of an in-memory pipe.
pub struct PipeWriter {
  tx: Sender<Vec<u8>>,
}

impl Write for PipeWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    if !buf.is_empty() {
      self
        .tx
        .send(buf.to_vec())
        .map_err(|err| std::io::Error::new(ErrorKind::BrokenPipe, err.to_string()))?;
    }
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

pub fn pipe() -> (PipeReader, PipeWriter) {
  let (tx, rx) = crossbeam_channel::unbounded();
  (
    PipeReader {
      rx,
      buf: Vec::new(),
      pos: 0,
    },
    PipeWriter { tx },
  )
}

/// Creates the two ends of a duplex stream: `(host, worker)`,
/// each as `(reader, writer)`.
pub fn duplex_pair() -> ((PipeReader, PipeWriter), (PipeReader, PipeWriter)) {
  let (worker_stdin, host_stdin) = pipe();
  let (host_stdout, worker_stdout) = pipe();
  ((host_stdout, host_stdin), (worker_stdin, worker_stdout))
}
