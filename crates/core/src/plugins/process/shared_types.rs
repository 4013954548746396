/// The process plugin schema version.
pub const PLUGIN_SCHEMA_VERSION: u32 = 3;

/// Kinds of messages that process plugins must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
  GetPluginSchemaVersion = 0,
  GetPluginInfo = 1,
  GetLicenseText = 2,
  GetResolvedConfig = 3,
  SetGlobalConfig = 4,
  SetPluginConfig = 5,
  GetConfigDiagnostics = 6,
  /// Responds with a format result part, then a file text part when changed.
  FormatText = 7,
  Close = 8,
}

impl TryFrom<u32> for MessageKind {
  /// The unknown kind.
  type Error = u32;

  fn try_from(kind: u32) -> Result<Self, u32> {
    match kind {
      0 => Ok(MessageKind::GetPluginSchemaVersion),
      1 => Ok(MessageKind::GetPluginInfo),
      2 => Ok(MessageKind::GetLicenseText),
      3 => Ok(MessageKind::GetResolvedConfig),
      4 => Ok(MessageKind::SetGlobalConfig),
      5 => Ok(MessageKind::SetPluginConfig),
      6 => Ok(MessageKind::GetConfigDiagnostics),
      7 => Ok(MessageKind::FormatText),
      8 => Ok(MessageKind::Close),
      _ => Err(kind),
    }
  }
}

/// The kinds of responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
  Success = 0,
  Error = 1,
}

impl TryFrom<u32> for ResponseKind {
  type Error = u32;

  fn try_from(kind: u32) -> Result<Self, u32> {
    match kind {
      0 => Ok(ResponseKind::Success),
      1 => Ok(ResponseKind::Error),
      _ => Err(kind),
    }
  }
}

/// The kinds of format results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatResult {
  NoChange = 0,
  Change = 1,
}

impl TryFrom<u32> for FormatResult {
  type Error = u32;

  fn try_from(kind: u32) -> Result<Self, u32> {
    match kind {
      0 => Ok(FormatResult::NoChange),
      1 => Ok(FormatResult::Change),
      _ => Err(kind),
    }
  }
}
