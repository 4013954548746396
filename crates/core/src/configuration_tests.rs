use pretty_assertions::assert_eq;
use serde_json::json;

use super::configuration::*;

fn parse(json: &str) -> ConfigKeyMap {
  parse_config_key_map(json.as_bytes()).unwrap()
}

fn resolve(global: &str, plugin: &str, override_config: &str) -> serde_json::Value {
  serde_json::Value::Object(resolve_config(&parse(global), &parse(plugin), &parse(override_config)).unwrap())
}

#[test]
fn get_default_config_when_empty() {
  assert_eq!(
    resolve("{}", "{}", "{}"),
    json!({
      "printWidth": 120,
      "tabWidth": 2,
      "useTabs": false,
      "endOfLine": "lf",
    })
  );
}

#[test]
fn maps_global_properties() {
  assert_eq!(
    resolve(r#"{ "lineWidth": 80, "indentWidth": 4, "useTabs": true, "newLineKind": "crlf" }"#, "{}", "{}"),
    json!({
      "printWidth": 80,
      "tabWidth": 4,
      "useTabs": true,
      "endOfLine": "crlf",
    })
  );
}

#[test]
fn global_config_only_maps_known_properties() {
  let resolved = resolve(r#"{ "lineWidth": 80, "semi": false }"#, "{}", "{}");
  assert_eq!(resolved.get("semi"), None);
  assert_eq!(resolved.get("lineWidth"), None);
  assert_eq!(resolved["printWidth"], 80);
}

#[test]
fn plugin_config_takes_precedence_over_global_config() {
  let resolved = resolve(
    r#"{ "lineWidth": 80, "useTabs": true }"#,
    r#"{ "lineWidth": 100, "semi": false }"#,
    "{}",
  );
  assert_eq!(
    resolved,
    json!({
      "printWidth": 100,
      "tabWidth": 2,
      "useTabs": true,
      "endOfLine": "lf",
      "lineWidth": 100,
      "semi": false,
    })
  );
}

#[test]
fn plugin_specific_keys_override_mapped_keys() {
  let resolved = resolve(r#"{ "lineWidth": 80 }"#, r#"{ "printWidth": 90 }"#, "{}");
  assert_eq!(resolved["printWidth"], 90);
}

#[test]
fn specific_keys_override_generic_keys_in_same_config() {
  let resolved = resolve("{}", r#"{ "lineWidth": 100, "printWidth": 90 }"#, "{}");
  assert_eq!(resolved["printWidth"], 90);
  assert_eq!(resolved["lineWidth"], 100);

  let resolved = resolve("{}", r#"{ "printWidth": 90, "lineWidth": 100 }"#, "{}");
  assert_eq!(resolved["printWidth"], 90);

  let resolved = resolve("{}", r#"{ "tabWidth": 5 }"#, r#"{ "indentWidth": 8, "tabWidth": 3 }"#);
  assert_eq!(resolved["tabWidth"], 3);
}

#[test]
fn override_generic_keys_override_plugin_specific_keys() {
  let resolved = resolve("{}", r#"{ "printWidth": 90 }"#, r#"{ "lineWidth": 40 }"#);
  assert_eq!(resolved["printWidth"], 40);
}

#[test]
fn override_config_has_highest_precedence() {
  let resolved = resolve(
    r#"{ "lineWidth": 80 }"#,
    r#"{ "lineWidth": 100, "singleQuote": true }"#,
    r#"{ "lineWidth": 40, "singleQuote": false }"#,
  );
  assert_eq!(resolved["printWidth"], 40);
  assert_eq!(resolved["singleQuote"], false);
}

#[test]
fn resolves_system_new_line_kind() {
  let resolved = resolve(r#"{ "newLineKind": "system" }"#, "{}", "{}");
  let expected = if cfg!(windows) { "crlf" } else { "lf" };
  assert_eq!(resolved["endOfLine"], expected);
}

#[test]
fn null_global_properties_are_ignored() {
  let resolved = resolve(r#"{ "lineWidth": null, "newLineKind": null }"#, "{}", "{}");
  assert_eq!(resolved["printWidth"], 120);
  assert_eq!(resolved["endOfLine"], "lf");
}

#[test]
fn error_for_invalid_new_line_kind() {
  let err = resolve_config(&parse(r#"{ "newLineKind": "something" }"#), &parse("{}"), &parse("{}")).unwrap_err();
  assert_eq!(
    err.to_string(),
    "Error parsing configuration value for 'newLineKind'. Message: Found invalid value 'something'."
  );
}

#[test]
fn error_for_invalid_value_type() {
  let err = resolve_config(&parse("{}"), &parse(r#"{ "useTabs": "yes" }"#), &parse("{}")).unwrap_err();
  assert_eq!(err.to_string(), "Expected a boolean for 'useTabs'.");
  let err = resolve_config(&parse(r#"{ "lineWidth": -1 }"#), &parse("{}"), &parse("{}")).unwrap_err();
  assert_eq!(err.to_string(), "Expected a non-negative integer for 'lineWidth'.");
}

#[test]
fn parse_preserves_key_order() {
  let config = parse(r#"{ "b": 1, "a": "text", "c": true, "d": null }"#);
  assert_eq!(config.keys().collect::<Vec<_>>(), vec!["b", "a", "c", "d"]);
  assert_eq!(config["a"], ConfigKeyValue::from("text"));
  assert_eq!(config["c"], ConfigKeyValue::Bool(true));
  assert_eq!(config["d"], ConfigKeyValue::Null);
}

#[test]
fn parse_errors_for_non_object() {
  assert!(matches!(parse_config_key_map(b"[]"), Err(ConfigError::ExpectedObject)));
  assert!(matches!(parse_config_key_map(b"{"), Err(ConfigError::Json(_))));
  match parse_config_key_map(br#"{ "a": [1] }"#) {
    Err(ConfigError::ExpectedScalar(key)) => assert_eq!(key, "a"),
    _ => panic!("Expected scalar error."),
  }
}

#[test]
fn new_line_kind_to_and_from_string() {
  assert_eq!("crlf".parse::<NewLineKind>().unwrap(), NewLineKind::CarriageReturnLineFeed);
  assert_eq!(NewLineKind::Auto.to_string(), "auto");
  assert_eq!(
    "other".parse::<NewLineKind>().unwrap_err(),
    ParseConfigurationError("other".to_string())
  );
}
