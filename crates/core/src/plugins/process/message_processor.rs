use anyhow::anyhow;
use std::io::Read;
use std::io::Write;

use super::ConfigState;
use super::FormatResult;
use super::MessageKind;
use super::ResponseKind;
use super::PLUGIN_SCHEMA_VERSION;
use crate::communication::MessagePart;
use crate::communication::MessagePartError;
use crate::communication::ProtocolError;
use crate::communication::StdIoMessenger;
use crate::communication::StdIoReaderWriter;
use crate::configuration::parse_config_key_map;
use crate::configuration::ConfigError;
use crate::configuration::ConfigKeyMap;
use crate::plugins::PluginHandler;

/// An error handling a single message.
#[derive(Debug, thiserror::Error)]
pub enum MessageProcessorError {
  /// The stream can no longer be used.
  #[error(transparent)]
  Fatal(#[from] ProtocolError),
  /// Reported to the host as an error response.
  #[error(transparent)]
  Handler(#[from] anyhow::Error),
}

impl From<ConfigError> for MessageProcessorError {
  fn from(err: ConfigError) -> Self {
    MessageProcessorError::Handler(err.into())
  }
}

impl From<MessagePartError> for MessageProcessorError {
  fn from(err: MessagePartError) -> Self {
    MessageProcessorError::Handler(err.into())
  }
}

impl From<serde_json::Error> for MessageProcessorError {
  fn from(err: serde_json::Error) -> Self {
    MessageProcessorError::Handler(err.into())
  }
}

/// Handles the process' messages over stdin and stdout based on the provided handler.
///
/// Returns when the host sends a close message.
pub fn handle_process_stdio_messages<THandler: PluginHandler>(handler: THandler) -> Result<(), ProtocolError> {
  setup_exit_process_panic_hook();

  let stdin = std::io::stdin().lock();
  let stdout = std::io::stdout().lock();
  MessageProcessor::new(stdin, stdout, handler).run()
}

/// Reads messages from the host and responds to them one at a time.
pub struct MessageProcessor<TRead: Read, TWrite: Write, THandler: PluginHandler> {
  messenger: StdIoMessenger<TRead, TWrite>,
  handler: THandler,
  config_state: ConfigState,
}

impl<TRead: Read, TWrite: Write, THandler: PluginHandler> MessageProcessor<TRead, TWrite, THandler> {
  pub fn new(reader: TRead, writer: TWrite, handler: THandler) -> Self {
    MessageProcessor {
      messenger: StdIoMessenger::new(StdIoReaderWriter::new(reader, writer)),
      handler,
      config_state: ConfigState::new(),
    }
  }

  /// Runs until the host sends a close message or a protocol error occurs.
  pub fn run(mut self) -> Result<(), ProtocolError> {
    loop {
      let code = self.messenger.read_code()?;
      let result = match MessageKind::try_from(code) {
        Ok(kind) => {
          tracing::debug!("Received message: {:?}", kind);
          self.handle_message(kind)
        }
        // the part count is unknown so nothing can be drained
        Err(code) => Err(anyhow!("Unknown message kind: {}", code).into()),
      };

      match result {
        Ok(Some(parts)) => self.messenger.send_message(ResponseKind::Success as u32, parts)?,
        Ok(None) => return Ok(()),
        Err(MessageProcessorError::Handler(err)) => {
          tracing::warn!("Error handling message {}: {:#}", code, err);
          let text = format!("{}\n{:?}", err, err);
          self.messenger.send_message(ResponseKind::Error as u32, vec![text.into()])?;
        }
        Err(MessageProcessorError::Fatal(err)) => return Err(err),
      }
    }
  }

  /// Reads the rest of the message, then returns the parts of the success response
  /// or `None` when the processor should stop.
  fn handle_message(&mut self, kind: MessageKind) -> Result<Option<Vec<MessagePart<'static>>>, MessageProcessorError> {
    let parts: Vec<MessagePart<'static>> = match kind {
      MessageKind::GetPluginSchemaVersion => {
        self.messenger.read_zero_part_message()?;
        vec![PLUGIN_SCHEMA_VERSION.into()]
      }
      MessageKind::GetPluginInfo => {
        self.messenger.read_zero_part_message()?;
        let plugin_info = self.handler.plugin_info();
        vec![serde_json::to_vec(&plugin_info)?.into()]
      }
      MessageKind::GetLicenseText => {
        self.messenger.read_zero_part_message()?;
        vec![self.handler.license_text().into()]
      }
      MessageKind::GetResolvedConfig => {
        self.messenger.read_zero_part_message()?;
        let resolved_config = self.config_state.get_resolved_config()?;
        vec![serde_json::to_vec(resolved_config)?.into()]
      }
      MessageKind::SetGlobalConfig => {
        let message = self.messenger.read_single_part_message()?;
        self.config_state.set_global_config(parse_config_key_map(&message.into_bytes()?)?);
        Vec::new()
      }
      MessageKind::SetPluginConfig => {
        let message = self.messenger.read_single_part_message()?;
        self.config_state.set_plugin_config(parse_config_key_map(&message.into_bytes()?)?);
        Vec::new()
      }
      MessageKind::GetConfigDiagnostics => {
        self.messenger.read_zero_part_message()?;
        vec!["[]".into()]
      }
      MessageKind::FormatText => {
        let mut parts = self.messenger.read_multi_part_message(3)?;
        let file_path = parts.take_path_buf()?;
        let file_text = parts.take_string()?;
        let override_config = parse_override_config(&parts.take_part()?.into_bytes()?)?;

        let config = self.config_state.resolve_with_override(&override_config)?;
        let formatted_text = self.handler.format(&file_path, &file_text, &config)?;
        if formatted_text == file_text {
          vec![(FormatResult::NoChange as u32).into()]
        } else {
          vec![(FormatResult::Change as u32).into(), formatted_text.into()]
        }
      }
      // the host may already be closing the pipes, so nothing more is read
      MessageKind::Close => return Ok(None),
    };
    Ok(Some(parts))
  }
}

fn parse_override_config(bytes: &[u8]) -> Result<ConfigKeyMap, ConfigError> {
  if bytes.is_empty() {
    Ok(ConfigKeyMap::new())
  } else {
    parse_config_key_map(bytes)
  }
}

fn setup_exit_process_panic_hook() {
  // the parent process checker runs on another thread
  let orig_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |panic_info| {
    orig_hook(panic_info);
    std::process::exit(1);
  }));
}
