use std::borrow::Cow;

use crate::configuration::resolve_config;
use crate::configuration::ConfigError;
use crate::configuration::ConfigKeyMap;
use crate::configuration::ResolvedConfig;

/// The configuration the host has sent, along with the memoized resolution.
#[derive(Debug, Default)]
pub struct ConfigState {
  global_config: ConfigKeyMap,
  plugin_config: ConfigKeyMap,
  resolved_config: Option<ResolvedConfig>,
}

impl ConfigState {
  pub fn new() -> Self {
    Default::default()
  }

  pub fn set_global_config(&mut self, global_config: ConfigKeyMap) {
    self.global_config = global_config;
    self.resolved_config = None;
  }

  pub fn set_plugin_config(&mut self, plugin_config: ConfigKeyMap) {
    self.plugin_config = plugin_config;
    self.resolved_config = None;
  }

  /// Gets the resolved config, computing it only when the config changed.
  pub fn get_resolved_config(&mut self) -> Result<&ResolvedConfig, ConfigError> {
    let resolved_config = match self.resolved_config.take() {
      Some(resolved_config) => resolved_config,
      None => resolve_config(&self.global_config, &self.plugin_config, &ConfigKeyMap::new())?,
    };
    let resolved_config: &ResolvedConfig = self.resolved_config.insert(resolved_config);
    Ok(resolved_config)
  }

  /// Gets the config to format a single file with.
  ///
  /// An empty override uses the memoized config. Otherwise the override is
  /// merged on top without affecting what's memoized.
  pub fn resolve_with_override(&mut self, override_config: &ConfigKeyMap) -> Result<Cow<'_, ResolvedConfig>, ConfigError> {
    if override_config.is_empty() {
      Ok(Cow::Borrowed(self.get_resolved_config()?))
    } else {
      Ok(Cow::Owned(resolve_config(&self.global_config, &self.plugin_config, override_config)?))
    }
  }
}
