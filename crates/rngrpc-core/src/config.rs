//! Generator configuration types

use crate::LogLevel;
use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Options controlling a generation run
///
/// Protoc passes these as a comma separated parameter string
/// (`--rngrpc_opt=package=com.example,strict=true`). The offline `generate`
/// command can also load them from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Java package of the generated module, overriding `java_package`
    #[serde(default)]
    pub package: Option<String>,

    /// Suffix appended to the outer class name to form the module class
    #[serde(default = "default_module_suffix")]
    pub module_suffix: String,

    /// Log level applied once the request has been read
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Turn expansion diagnostics into errors
    #[serde(default)]
    pub strict: bool,

    /// Produce no artifact for files that declare no services
    #[serde(default)]
    pub skip_empty: bool,
}

fn default_module_suffix() -> String {
    "Module".to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: None,
            module_suffix: default_module_suffix(),
            log_level: default_log_level(),
            strict: false,
            skip_empty: false,
        }
    }
}

impl GeneratorOptions {
    /// Create options with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a protoc parameter string
    ///
    /// An empty string yields the defaults.
    pub fn from_parameter(parameter: &str) -> GenerateResult<Self> {
        Self::default().with_parameter(parameter)
    }

    /// Parse options from TOML text
    pub fn from_toml_str(content: &str) -> GenerateResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> GenerateResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Apply a protoc parameter string on top of these options
    ///
    /// Keys present in the parameter replace the current values, all other
    /// keys keep theirs.
    pub fn with_parameter(&self, parameter: &str) -> GenerateResult<Self> {
        let overrides = parse_parameter(parameter)?;
        if overrides.is_empty() {
            return Ok(self.clone());
        }

        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merged.extend(overrides);

        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}

/// Split `k=v,k2=v2` into a JSON object
///
/// `true` and `false` become booleans so they deserialize into flag fields.
fn parse_parameter(parameter: &str) -> GenerateResult<Map<String, Value>> {
    let mut map = Map::new();

    for pair in parameter.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| GenerateError::invalid_parameter(format!("missing '=' in '{pair}'")))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(GenerateError::invalid_parameter(format!(
                "empty key in '{pair}'"
            )));
        }

        let value = match value.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            other => Value::String(other.to_string()),
        };
        map.insert(key.to_string(), value);
    }

    Ok(map)
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
