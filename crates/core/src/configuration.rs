use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfigurationError(pub String);

impl std::fmt::Display for ParseConfigurationError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Found invalid value '{}'.", self.0)
  }
}

impl std::error::Error for ParseConfigurationError {}

macro_rules! generate_str_to_from {
  ($enum_name:ident, $([$member_name:ident, $string_value:expr]),* ) => {
    impl std::str::FromStr for $enum_name {
      type Err = ParseConfigurationError;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $($string_value => Ok($enum_name::$member_name)),*,
          _ => Err(ParseConfigurationError(String::from(s))),
        }
      }
    }

    impl std::fmt::Display for $enum_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
          $($enum_name::$member_name => write!(f, "{}", $string_value)),*,
        }
      }
    }
  };
}

#[derive(Clone, PartialEq, Eq, Debug, Copy, Serialize, Deserialize)]
pub enum NewLineKind {
  /// Decide which newline kind to use based on the last newline in the file.
  #[serde(rename = "auto")]
  Auto,
  /// Use slash n new lines.
  #[serde(rename = "lf")]
  LineFeed,
  /// Use slash r slash n new lines.
  #[serde(rename = "crlf")]
  CarriageReturnLineFeed,
  /// Use the system standard (ex. crlf on Windows)
  #[serde(rename = "system")]
  System,
}

generate_str_to_from![
  NewLineKind,
  [Auto, "auto"],
  [LineFeed, "lf"],
  [CarriageReturnLineFeed, "crlf"],
  [System, "system"]
];

impl NewLineKind {
  /// Gets the `endOfLine` option value, resolving `system` for the current OS.
  pub fn as_end_of_line(&self) -> &'static str {
    match self {
      NewLineKind::Auto => "auto",
      NewLineKind::LineFeed => "lf",
      NewLineKind::CarriageReturnLineFeed => "crlf",
      NewLineKind::System => {
        if cfg!(windows) {
          "crlf"
        } else {
          "lf"
        }
      }
    }
  }
}

/// A scalar configuration value.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigKeyValue {
  String(String),
  Number(serde_json::Number),
  Bool(bool),
  Null,
}

impl From<ConfigKeyValue> for Value {
  fn from(value: ConfigKeyValue) -> Self {
    match value {
      ConfigKeyValue::String(value) => Value::String(value),
      ConfigKeyValue::Number(value) => Value::Number(value),
      ConfigKeyValue::Bool(value) => Value::Bool(value),
      ConfigKeyValue::Null => Value::Null,
    }
  }
}

impl From<&str> for ConfigKeyValue {
  fn from(value: &str) -> Self {
    ConfigKeyValue::String(value.to_string())
  }
}

impl From<u32> for ConfigKeyValue {
  fn from(value: u32) -> Self {
    ConfigKeyValue::Number(value.into())
  }
}

impl From<bool> for ConfigKeyValue {
  fn from(value: bool) -> Self {
    ConfigKeyValue::Bool(value)
  }
}

pub type ConfigKeyMap = IndexMap<String, ConfigKeyValue>;

/// The configuration handed to the formatting engine.
pub type ResolvedConfig = serde_json::Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Error parsing configuration: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Expected the configuration to be an object.")]
  ExpectedObject,
  #[error("Expected a string, number, boolean, or null for '{0}'.")]
  ExpectedScalar(String),
  #[error("Expected a {expected} for '{key}'.")]
  InvalidValueType { key: String, expected: &'static str },
  #[error("Error parsing configuration value for '{key}'. Message: {source}")]
  InvalidValue {
    key: String,
    source: ParseConfigurationError,
  },
}

/// Parses a JSON object of scalar values.
pub fn parse_config_key_map(json: &[u8]) -> Result<ConfigKeyMap, ConfigError> {
  let value: Value = serde_json::from_slice(json)?;
  let Value::Object(object) = value else {
    return Err(ConfigError::ExpectedObject);
  };

  let mut config = ConfigKeyMap::with_capacity(object.len());
  for (key, value) in object {
    let value = match value {
      Value::String(value) => ConfigKeyValue::String(value),
      Value::Number(value) => ConfigKeyValue::Number(value),
      Value::Bool(value) => ConfigKeyValue::Bool(value),
      Value::Null => ConfigKeyValue::Null,
      Value::Array(_) | Value::Object(_) => return Err(ConfigError::ExpectedScalar(key)),
    };
    config.insert(key, value);
  }
  Ok(config)
}

pub const DEFAULT_GLOBAL_CONFIGURATION: DefaultGlobalConfiguration = DefaultGlobalConfiguration {
  line_width: 120,
  indent_width: 2,
  use_tabs: false,
  new_line_kind: NewLineKind::LineFeed,
};

pub struct DefaultGlobalConfiguration {
  pub line_width: u32,
  pub indent_width: u8,
  pub use_tabs: bool,
  pub new_line_kind: NewLineKind,
}

/// Merges the configuration into the options for the formatting engine.
///
/// From lowest to highest precedence: the defaults, the global config's
/// known properties, the plugin config, then the override config. For the
/// plugin and override config, the known global properties are mapped to
/// their engine names first, then every property is passed through verbatim.
pub fn resolve_config(
  global_config: &ConfigKeyMap,
  plugin_config: &ConfigKeyMap,
  override_config: &ConfigKeyMap,
) -> Result<ResolvedConfig, ConfigError> {
  let defaults = &DEFAULT_GLOBAL_CONFIGURATION;
  let mut resolved = ResolvedConfig::new();
  resolved.insert("printWidth".to_string(), defaults.line_width.into());
  resolved.insert("tabWidth".to_string(), defaults.indent_width.into());
  resolved.insert("useTabs".to_string(), defaults.use_tabs.into());
  resolved.insert("endOfLine".to_string(), defaults.new_line_kind.as_end_of_line().into());

  apply_global_properties(&mut resolved, global_config)?;
  apply_plugin_config(&mut resolved, plugin_config)?;
  apply_plugin_config(&mut resolved, override_config)?;

  Ok(resolved)
}

fn apply_plugin_config(resolved: &mut ResolvedConfig, config: &ConfigKeyMap) -> Result<(), ConfigError> {
  // formatter specific keys win over the generic ones in the same config
  apply_global_properties(resolved, config)?;
  for (key, value) in config {
    resolved.insert(key.clone(), value.clone().into());
  }
  Ok(())
}

fn apply_global_properties(resolved: &mut ResolvedConfig, config: &ConfigKeyMap) -> Result<(), ConfigError> {
  if let Some(line_width) = get_u32(config, "lineWidth")? {
    resolved.insert("printWidth".to_string(), line_width.into());
  }
  if let Some(indent_width) = get_u32(config, "indentWidth")? {
    resolved.insert("tabWidth".to_string(), indent_width.into());
  }
  match config.get("useTabs") {
    None | Some(ConfigKeyValue::Null) => {}
    Some(ConfigKeyValue::Bool(use_tabs)) => {
      resolved.insert("useTabs".to_string(), (*use_tabs).into());
    }
    Some(_) => return Err(invalid_value_type("useTabs", "boolean")),
  }
  match config.get("newLineKind") {
    None | Some(ConfigKeyValue::Null) => {}
    Some(ConfigKeyValue::String(text)) => {
      let new_line_kind = text.parse::<NewLineKind>().map_err(|source| ConfigError::InvalidValue {
        key: "newLineKind".to_string(),
        source,
      })?;
      resolved.insert("endOfLine".to_string(), new_line_kind.as_end_of_line().into());
    }
    Some(_) => return Err(invalid_value_type("newLineKind", "string")),
  }
  Ok(())
}

fn get_u32(config: &ConfigKeyMap, key: &'static str) -> Result<Option<u32>, ConfigError> {
  match config.get(key) {
    None | Some(ConfigKeyValue::Null) => Ok(None),
    Some(ConfigKeyValue::Number(value)) => match value.as_u64().and_then(|value| u32::try_from(value).ok()) {
      Some(value) => Ok(Some(value)),
      None => Err(invalid_value_type(key, "non-negative integer")),
    },
    Some(_) => Err(invalid_value_type(key, "number")),
  }
}

fn invalid_value_type(key: &str, expected: &'static str) -> ConfigError {
  ConfigError::InvalidValueType {
    key: key.to_string(),
    expected,
  }
}
