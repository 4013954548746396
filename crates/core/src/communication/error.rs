use std::string::FromUtf8Error;

use super::IoOperation;

/// An error on the transport itself.
///
/// The framing has no way to resynchronize, so once one of these occurs
/// nothing further can be read from or written to the stream.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
  #[error("Error communicating over stdio: {0}")]
  Io(#[from] std::io::Error),
  #[error("Catastrophic error reading from process. Did not receive the success bytes at end of message. Found: {0:?}")]
  InvalidSuccessBytes([u8; 4]),
  #[error("Catastrophic error. Attempted to {attempted} while a {outstanding} was already in progress.")]
  Reentrant {
    attempted: IoOperation,
    outstanding: IoOperation,
  },
  #[error("Cannot send {0} bytes of variable data. The maximum is {max} bytes.", max = u32::MAX)]
  PayloadTooLarge(usize),
}

/// An error interpreting a message part that was fully received.
#[derive(Debug, thiserror::Error)]
pub enum MessagePartError {
  #[error("Programming error: Expected to take message part.")]
  MissingPart,
  #[error("Message part did not support converting to {0}.")]
  UnsupportedConversion(&'static str),
  #[error("Message part was not valid utf-8: {0}")]
  InvalidUtf8(#[from] FromUtf8Error),
}
