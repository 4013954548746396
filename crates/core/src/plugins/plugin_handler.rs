use anyhow::Result;
use std::path::Path;

use super::PluginInfo;
use crate::configuration::ResolvedConfig;

/// A language the formatting engine can format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
  pub name: String,
  /// File extensions, optionally with a leading period (ex. `.txt`).
  pub extensions: Vec<String>,
}

/// The external engine that does the actual formatting.
pub trait FormatEngine {
  /// The languages this engine supports.
  fn languages(&self) -> Vec<Language>;
  /// Formats the text, returning the same text when nothing changed.
  fn format(&self, file_path: &Path, file_text: &str, config: &ResolvedConfig) -> Result<String>;
}

/// Trait for implementing a process plugin.
pub trait PluginHandler {
  /// Gets the plugin's plugin info.
  fn plugin_info(&self) -> PluginInfo;
  /// Gets the plugin's license text.
  fn license_text(&self) -> String;
  /// Formats the provided file text based on the provided file path and configuration.
  fn format(&self, file_path: &Path, file_text: &str, config: &ResolvedConfig) -> Result<String>;
}

/// The static parts of the plugin info.
#[derive(Debug, Clone)]
pub struct PluginMetadata {
  pub name: String,
  pub version: String,
  pub config_key: String,
  pub help_url: String,
  pub config_schema_url: String,
  pub license_text: String,
}

/// A plugin handler backed by a formatting engine.
pub struct EnginePluginHandler<TEngine: FormatEngine> {
  metadata: PluginMetadata,
  engine: TEngine,
}

impl<TEngine: FormatEngine> EnginePluginHandler<TEngine> {
  pub fn new(metadata: PluginMetadata, engine: TEngine) -> Self {
    EnginePluginHandler { metadata, engine }
  }
}

impl<TEngine: FormatEngine> PluginHandler for EnginePluginHandler<TEngine> {
  fn plugin_info(&self) -> PluginInfo {
    PluginInfo {
      name: self.metadata.name.clone(),
      version: self.metadata.version.clone(),
      config_key: self.metadata.config_key.clone(),
      file_extensions: get_file_extensions(&self.engine.languages()),
      help_url: self.metadata.help_url.clone(),
      config_schema_url: self.metadata.config_schema_url.clone(),
    }
  }

  fn license_text(&self) -> String {
    self.metadata.license_text.clone()
  }

  fn format(&self, file_path: &Path, file_text: &str, config: &ResolvedConfig) -> Result<String> {
    self.engine.format(file_path, file_text, config)
  }
}

/// Gets the unique file extensions without the leading period.
fn get_file_extensions(languages: &[Language]) -> Vec<String> {
  let mut extensions: Vec<String> = Vec::new();
  for ext in languages.iter().flat_map(|language| language.extensions.iter()) {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if !extensions.iter().any(|e| e == ext) {
      extensions.push(ext.to_string());
    }
  }
  extensions
}
