use process_plugin_core::plugins::EnginePluginHandler;
use process_plugin_core::plugins::PluginMetadata;

use crate::formatter::TextFormatter;

pub fn create_plugin_handler() -> EnginePluginHandler<TextFormatter> {
  EnginePluginHandler::new(
    PluginMetadata {
      name: env!("CARGO_PKG_NAME").to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
      config_key: "text".to_string(),
      help_url: "https://dprint.dev/plugins/text".to_string(),
      config_schema_url: "".to_string(),
      license_text: include_str!("../LICENSE").to_string(),
    },
    TextFormatter,
  )
}
