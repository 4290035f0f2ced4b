//! YAML configuration
//!
//! All keys are optional; a missing configuration file is an empty
//! configuration, a present-but-malformed one is a fatal error.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Label-transformation and render configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace IRI → short name overrides; win over the bindings the
    /// source document declares
    pub extra_prefixes: IndexMap<String, String>,

    /// Triples whose raw `s|p|o` form contains any of these substrings are
    /// dropped before graph construction
    pub filter: Vec<String>,

    /// Edge-label substrings whose matches fold the target node into the
    /// source node's tooltip properties
    pub propertize: Vec<String>,

    /// Edge-label substrings whose matches copy the target node's label
    /// onto the source node, in list order
    pub label_overrides: Vec<String>,

    /// Render canvas height (CSS size)
    pub height_px: String,

    /// Render canvas width (CSS size)
    pub width_px: String,

    /// Show the property-filter menu in the rendered page
    pub filter_menu: bool,

    /// Show the node-select menu in the rendered page
    pub select_menu: bool,

    /// Show the render-engine configuration panel
    pub show_buttons: bool,

    /// Render-engine options, serialized to JSON for the page
    pub pyvis_config_options: Option<serde_json::Value>,

    /// Raw render-engine options JSON, passed through verbatim; takes
    /// precedence over `pyvis_config_options`
    pub pyvis_config_options_json: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extra_prefixes: IndexMap::new(),
            filter: Vec::new(),
            propertize: Vec::new(),
            label_overrides: Vec::new(),
            height_px: "1000px".to_string(),
            width_px: "1500px".to_string(),
            filter_menu: true,
            select_menu: true,
            show_buttons: true,
            pyvis_config_options: None,
            pyvis_config_options_json: None,
        }
    }
}

impl Config {
    /// Load the configuration from an optional path. `None` yields the
    /// default (empty) configuration.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => {
                let input = std::fs::read_to_string(path)?;
                Ok(serde_yaml::from_str(&input)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve the render-engine options to a JSON string, if any are
    /// configured. The verbatim passthrough wins when both keys are set.
    pub fn render_options_json(&self) -> Result<Option<String>, serde_json::Error> {
        if let Some(raw) = &self.pyvis_config_options_json {
            return Ok(Some(raw.clone()));
        }
        match &self.pyvis_config_options {
            Some(value) => Ok(Some(serde_json::to_string(value)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.height_px, "1000px");
        assert_eq!(config.width_px, "1500px");
        assert!(config.filter_menu);
        assert!(config.select_menu);
        assert!(config.show_buttons);
        assert!(config.extra_prefixes.is_empty());
        assert!(config.filter.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
extra_prefixes:
  "http://example.org/": ex
filter:
  - bob
propertize:
  - hasId
label_overrides:
  - hasName
height_px: "800px"
show_buttons: false
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.extra_prefixes.get("http://example.org/").unwrap(), "ex");
        assert_eq!(config.filter, vec!["bob"]);
        assert_eq!(config.propertize, vec!["hasId"]);
        assert_eq!(config.label_overrides, vec!["hasName"]);
        assert_eq!(config.height_px, "800px");
        assert!(!config.show_buttons);
        // untouched keys keep their defaults
        assert_eq!(config.width_px, "1500px");
        assert!(config.select_menu);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let result: Result<Config, _> = serde_yaml::from_str("filter: {not: [valid");
        assert!(result.is_err());
    }

    #[test]
    fn test_options_json_passthrough_wins() {
        let yaml = r#"
pyvis_config_options:
  physics:
    enabled: true
pyvis_config_options_json: '{"physics": {"enabled": false}}'
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let options = config.render_options_json().unwrap().unwrap();
        assert_eq!(options, r#"{"physics": {"enabled": false}}"#);
    }

    #[test]
    fn test_options_mapping_serializes() {
        let yaml = r#"
pyvis_config_options:
  physics:
    enabled: false
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let options = config.render_options_json().unwrap().unwrap();
        assert!(options.contains("\"enabled\":false"));
    }
}
