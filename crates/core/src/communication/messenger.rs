use std::collections::VecDeque;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use super::MessagePart;
use super::MessagePartError;
use super::ProtocolError;
use super::StdIoReaderWriter;

/// The parts of a message that was read in full, including its success bytes.
#[derive(Debug)]
pub struct ReadMessageParts {
  parts: VecDeque<MessagePart<'static>>,
}

impl ReadMessageParts {
  pub fn len(&self) -> usize {
    self.parts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.parts.is_empty()
  }

  pub fn take_path_buf(&mut self) -> Result<PathBuf, MessagePartError> {
    self.take_part()?.into_path_buf()
  }

  pub fn take_string(&mut self) -> Result<String, MessagePartError> {
    self.take_part()?.into_string()
  }

  pub fn take_part(&mut self) -> Result<MessagePart<'static>, MessagePartError> {
    self.parts.pop_front().ok_or(MessagePartError::MissingPart)
  }
}

/// Uses an StdIoReaderWriter to send and receive multi-part messages.
pub struct StdIoMessenger<TRead: Read, TWrite: Write> {
  reader_writer: StdIoReaderWriter<TRead, TWrite>,
}

impl<TRead: Read, TWrite: Write> StdIoMessenger<TRead, TWrite> {
  pub fn new(reader_writer: StdIoReaderWriter<TRead, TWrite>) -> Self {
    StdIoMessenger { reader_writer }
  }

  /// Reads the message or response kind.
  pub fn read_code(&mut self) -> Result<u32, ProtocolError> {
    self.reader_writer.read_u32()
  }

  pub fn read_multi_part_message(&mut self, part_count: usize) -> Result<ReadMessageParts, ProtocolError> {
    let mut parts = VecDeque::with_capacity(part_count);
    for _ in 0..part_count {
      parts.push_back(MessagePart::from(self.reader_writer.read_variable_data()?));
    }
    self.reader_writer.read_success_bytes()?;
    Ok(ReadMessageParts { parts })
  }

  pub fn read_single_part_message(&mut self) -> Result<MessagePart<'static>, ProtocolError> {
    let data = self.reader_writer.read_variable_data()?;
    self.reader_writer.read_success_bytes()?;
    Ok(MessagePart::from(data))
  }

  pub fn read_zero_part_message(&mut self) -> Result<(), ProtocolError> {
    self.reader_writer.read_success_bytes()
  }

  pub fn send_message(&mut self, code: u32, message_parts: Vec<MessagePart>) -> Result<(), ProtocolError> {
    self.reader_writer.send_u32(code)?;
    for message_part in message_parts {
      match message_part {
        MessagePart::Number(value) => self.reader_writer.send_u32(value)?,
        MessagePart::VariableData(value) => self.reader_writer.send_variable_data(&value)?,
      }
    }
    self.reader_writer.send_success_bytes()
  }
}

#[cfg(test)]
mod test {
  use pretty_assertions::assert_eq;
  use std::io::Cursor;

  use super::*;

  fn messenger_for_input(input: Vec<u8>) -> StdIoMessenger<Cursor<Vec<u8>>, Vec<u8>> {
    StdIoMessenger::new(StdIoReaderWriter::new(Cursor::new(input), Vec::new()))
  }

  fn variable_data(text: &str) -> Vec<u8> {
    let mut bytes = (text.len() as u32).to_be_bytes().to_vec();
    bytes.extend(text.as_bytes());
    bytes
  }

  #[test]
  fn reads_multi_part_message() {
    let mut input = variable_data("/file.txt");
    input.extend(variable_data("text"));
    input.extend([255, 255, 255, 255]);
    let mut messenger = messenger_for_input(input);
    let mut parts = messenger.read_multi_part_message(2).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts.take_path_buf().unwrap(), PathBuf::from("/file.txt"));
    assert_eq!(parts.take_string().unwrap(), "text");
    assert!(parts.is_empty());
    assert!(matches!(parts.take_part(), Err(MessagePartError::MissingPart)));
  }

  #[test]
  fn errors_on_missing_success_bytes() {
    let mut input = variable_data("{}");
    input.extend([0, 0, 0, 0]);
    let mut messenger = messenger_for_input(input);
    assert!(matches!(
      messenger.read_single_part_message(),
      Err(ProtocolError::InvalidSuccessBytes([0, 0, 0, 0]))
    ));
  }

  #[test]
  fn sends_message_parts_followed_by_success_bytes() {
    let mut output = Vec::new();
    {
      let mut messenger = StdIoMessenger::new(StdIoReaderWriter::new(Cursor::new(Vec::new()), &mut output));
      messenger.send_message(0, vec![1.into(), "ab".into()]).unwrap();
    }
    assert_eq!(
      output,
      vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, b'a', b'b', 255, 255, 255, 255]
    );
  }
}
