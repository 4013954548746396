use anyhow::bail;
use anyhow::Result;
use process_plugin_core::configuration::ResolvedConfig;
use process_plugin_core::plugins::FormatEngine;
use process_plugin_core::plugins::Language;
use serde_json::Value;
use std::path::Path;

const MAX_TAB_WIDTH: u32 = 255;

/// Formats plain text files.
#[derive(Debug, Default)]
pub struct TextFormatter;

impl FormatEngine for TextFormatter {
  fn languages(&self) -> Vec<Language> {
    vec![Language {
      name: "Plain Text".to_string(),
      extensions: vec![".txt".to_string(), ".text".to_string(), ".log".to_string()],
    }]
  }

  fn format(&self, _file_path: &Path, file_text: &str, config: &ResolvedConfig) -> Result<String> {
    let options = FormatOptions::from_config(config)?;
    format_text(file_text, &options)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormatOptions {
  print_width: u32,
  tab_width: u32,
  use_tabs: bool,
  end_of_line: EndOfLine,
  strict_line_width: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndOfLine {
  Auto,
  Lf,
  Crlf,
}

impl FormatOptions {
  fn from_config(config: &ResolvedConfig) -> Result<Self> {
    let end_of_line = match config.get("endOfLine") {
      None | Some(Value::Null) => EndOfLine::Lf,
      Some(Value::String(value)) => match value.as_str() {
        "auto" => EndOfLine::Auto,
        "lf" => EndOfLine::Lf,
        "crlf" => EndOfLine::Crlf,
        _ => bail!("Unsupported endOfLine value: {}", value),
      },
      Some(_) => bail!("Expected a string for 'endOfLine'."),
    };
    let tab_width = get_u32(config, "tabWidth", 2)?;
    if tab_width == 0 || tab_width > MAX_TAB_WIDTH {
      bail!("Expected 'tabWidth' to be between 1 and {}.", MAX_TAB_WIDTH);
    }

    Ok(FormatOptions {
      print_width: get_u32(config, "printWidth", 120)?,
      tab_width,
      use_tabs: get_bool(config, "useTabs", false)?,
      end_of_line,
      strict_line_width: get_bool(config, "strictLineWidth", false)?,
    })
  }
}

fn get_u32(config: &ResolvedConfig, key: &str, default_value: u32) -> Result<u32> {
  match config.get(key) {
    None | Some(Value::Null) => Ok(default_value),
    Some(value) => match value.as_u64().and_then(|value| u32::try_from(value).ok()) {
      Some(value) => Ok(value),
      None => bail!("Expected a non-negative integer for '{}'.", key),
    },
  }
}

fn get_bool(config: &ResolvedConfig, key: &str, default_value: bool) -> Result<bool> {
  match config.get(key) {
    None | Some(Value::Null) => Ok(default_value),
    Some(Value::Bool(value)) => Ok(*value),
    Some(_) => bail!("Expected a boolean for '{}'.", key),
  }
}

fn format_text(file_text: &str, options: &FormatOptions) -> Result<String> {
  if file_text.contains('\0') {
    bail!("Cannot format binary file (found NUL byte).");
  }

  let newline = match options.end_of_line {
    EndOfLine::Lf => "\n",
    EndOfLine::Crlf => "\r\n",
    EndOfLine::Auto => match file_text.find('\n') {
      Some(index) if file_text[..index].ends_with('\r') => "\r\n",
      _ => "\n",
    },
  };

  let mut lines = Vec::new();
  for (index, line) in file_text.lines().enumerate() {
    let line = format_line(line, options);
    if options.strict_line_width {
      let width = get_line_width(&line, options.tab_width);
      if width > options.print_width as usize {
        bail!(
          "Line {} exceeds printWidth of {} ({} columns).",
          index + 1,
          options.print_width,
          width
        );
      }
    }
    lines.push(line);
  }

  while lines.last().is_some_and(|line| line.is_empty()) {
    lines.pop();
  }
  if lines.is_empty() {
    return Ok(String::new());
  }

  let mut text = lines.join(newline);
  text.push_str(newline);
  Ok(text)
}

fn format_line(line: &str, options: &FormatOptions) -> String {
  let line = line.trim_end_matches([' ', '\t', '\r']);
  let content = line.trim_start_matches([' ', '\t']);
  let indent = &line[..line.len() - content.len()];
  let indent_width = get_line_width(indent, options.tab_width);

  let mut result = String::with_capacity(line.len());
  if options.use_tabs {
    let tab_width = options.tab_width as usize;
    result.push_str(&"\t".repeat(indent_width / tab_width));
    result.push_str(&" ".repeat(indent_width % tab_width));
  } else {
    result.push_str(&" ".repeat(indent_width));
  }
  result.push_str(content);
  result
}

/// Gets the width of the text with tabs expanded to the tab width.
fn get_line_width(text: &str, tab_width: u32) -> usize {
  text
    .chars()
    .map(|c| if c == '\t' { tab_width as usize } else { 1 })
    .sum()
}
