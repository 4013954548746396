use std::borrow::Cow;
use std::path::Path;
use std::path::PathBuf;

use super::MessagePartError;

/// A part of a message. Either a number or variable width data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart<'a> {
  VariableData(Cow<'a, [u8]>),
  Number(u32),
}

impl<'a> MessagePart<'a> {
  pub fn into_bytes(self) -> Result<Vec<u8>, MessagePartError> {
    match self {
      MessagePart::VariableData(data) => Ok(data.into_owned()),
      MessagePart::Number(_) => Err(MessagePartError::UnsupportedConversion("bytes")),
    }
  }

  pub fn into_string(self) -> Result<String, MessagePartError> {
    Ok(String::from_utf8(self.into_bytes()?)?)
  }

  pub fn into_path_buf(self) -> Result<PathBuf, MessagePartError> {
    Ok(PathBuf::from(self.into_string()?))
  }

  pub fn as_number(&self) -> Result<u32, MessagePartError> {
    match self {
      MessagePart::Number(value) => Ok(*value),
      MessagePart::VariableData(_) => Err(MessagePartError::UnsupportedConversion("a number")),
    }
  }
}

impl<'a> From<&'a Path> for MessagePart<'a> {
  fn from(value: &'a Path) -> Self {
    match value.to_string_lossy() {
      Cow::Owned(value) => value.into(),
      Cow::Borrowed(value) => value.into(),
    }
  }
}

impl<'a> From<String> for MessagePart<'a> {
  fn from(value: String) -> Self {
    MessagePart::VariableData(Cow::Owned(value.into_bytes()))
  }
}

impl<'a> From<&'a str> for MessagePart<'a> {
  fn from(value: &'a str) -> Self {
    MessagePart::VariableData(Cow::Borrowed(value.as_bytes()))
  }
}

impl<'a> From<&'a [u8]> for MessagePart<'a> {
  fn from(value: &'a [u8]) -> Self {
    MessagePart::VariableData(Cow::Borrowed(value))
  }
}

impl<'a> From<Vec<u8>> for MessagePart<'a> {
  fn from(value: Vec<u8>) -> Self {
    MessagePart::VariableData(Cow::Owned(value))
  }
}

impl<'a> From<u32> for MessagePart<'a> {
  fn from(value: u32) -> Self {
    MessagePart::Number(value)
  }
}

#[cfg(test)]
mod test {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn converts_variable_data_to_string() {
    let part = MessagePart::from("testing");
    assert_eq!(part.into_string().unwrap(), "testing");
  }

  #[test]
  fn number_does_not_convert_to_string() {
    let err = MessagePart::from(5).into_string().unwrap_err();
    assert_eq!(err.to_string(), "Message part did not support converting to bytes.");
  }

  #[test]
  fn variable_data_is_not_a_number() {
    assert!(MessagePart::from("5").as_number().is_err());
    assert_eq!(MessagePart::from(5).as_number().unwrap(), 5);
  }

  #[test]
  fn invalid_utf8_does_not_convert_to_string() {
    let part = MessagePart::from(vec![0xff, 0xfe]);
    assert!(matches!(part.into_string(), Err(MessagePartError::InvalidUtf8(_))));
  }
}
