use std::io::Read;
use std::io::Write;

use super::chunked_transfer::ChunkedTransfer;
use super::IoOperation;
use super::ProtocolError;
use super::SingleFlight;
use super::SUCCESS_BYTES;

/// Reads and writes the framing primitives over a duplex byte stream.
///
/// Every read or write either completes in full or errors. Reads and
/// writes are never allowed to overlap.
pub struct StdIoReaderWriter<TRead: Read, TWrite: Write> {
  reader: TRead,
  writer: TWrite,
  single_flight: SingleFlight,
}

impl<TRead: Read, TWrite: Write> StdIoReaderWriter<TRead, TWrite> {
  pub fn new(reader: TRead, writer: TWrite) -> Self {
    Self::with_single_flight(reader, writer, SingleFlight::new())
  }

  /// Creates the reader/writer sharing an existing in-flight state.
  pub fn with_single_flight(reader: TRead, writer: TWrite, single_flight: SingleFlight) -> Self {
    StdIoReaderWriter {
      reader,
      writer,
      single_flight,
    }
  }

  /// Send a u32 value.
  pub fn send_u32(&mut self, value: u32) -> Result<(), ProtocolError> {
    self.write_all(&value.to_be_bytes())
  }

  /// Reads a u32 value.
  pub fn read_u32(&mut self) -> Result<u32, ProtocolError> {
    let mut int_buf: [u8; 4] = [0; 4];
    self.read_exact(&mut int_buf)?;
    Ok(u32::from_be_bytes(int_buf))
  }

  pub fn send_success_bytes(&mut self) -> Result<(), ProtocolError> {
    self.write_all(SUCCESS_BYTES)?;
    self.flush()
  }

  pub fn read_success_bytes(&mut self) -> Result<(), ProtocolError> {
    let mut read_buf: [u8; 4] = [0; 4];
    self.read_exact(&mut read_buf)?;
    if &read_buf == SUCCESS_BYTES {
      Ok(())
    } else {
      Err(ProtocolError::InvalidSuccessBytes(read_buf))
    }
  }

  /// Sends variable width data (4 bytes length, X bytes data)
  pub fn send_variable_data(&mut self, data: &[u8]) -> Result<(), ProtocolError> {
    let size = u32::try_from(data.len()).map_err(|_| ProtocolError::PayloadTooLarge(data.len()))?;
    self.send_u32(size)?;

    let mut transfer = ChunkedTransfer::new(data.len());
    while let Some(chunk) = transfer.next_chunk() {
      if transfer.needs_ready_pulse() {
        // wait for "ready" from the client
        self.read_exact(&mut [0; 4])?;
      }

      self.write_all(&data[chunk.clone()])?;
      self.flush()?;
      transfer.complete_chunk(chunk);
    }

    Ok(())
  }

  /// Gets the message part (4 bytes length, X bytes data)
  /// Messages may have multiple parts.
  pub fn read_variable_data(&mut self) -> Result<Vec<u8>, ProtocolError> {
    let size = self.read_u32()? as usize;

    let mut message_data = Vec::new();
    let mut transfer = ChunkedTransfer::new(size);
    while let Some(chunk) = transfer.next_chunk() {
      if transfer.needs_ready_pulse() {
        // send "ready" to the client
        self.write_all(&[0; 4])?;
        self.flush()?;
      }

      message_data.resize(chunk.end, 0);
      self.read_exact(&mut message_data[chunk.clone()])?;
      transfer.complete_chunk(chunk);
    }

    Ok(message_data)
  }

  fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ProtocolError> {
    let _guard = self.single_flight.begin(IoOperation::Read)?;
    self.reader.read_exact(buf)?;
    Ok(())
  }

  fn write_all(&mut self, buf: &[u8]) -> Result<(), ProtocolError> {
    let _guard = self.single_flight.begin(IoOperation::Write)?;
    self.writer.write_all(buf)?;
    Ok(())
  }

  fn flush(&mut self) -> Result<(), ProtocolError> {
    let _guard = self.single_flight.begin(IoOperation::Write)?;
    self.writer.flush()?;
    Ok(())
  }
}
