use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Version literal written to the `openapi` key of every generated document.
pub const DEFAULT_OPENAPI_VERSION: &str = "3.0.0";

/// Words that make a declared endpoint name too common to stand on its own.
pub const DEFAULT_GENERIC_NAMES: &[&str] = &[
    "Details", "List", "Create", "Update", "Delete", "Get", "Post", "Put", "Patch", "Restart",
    "Stop", "Start", "Info", "Status", "Check", "Add", "Remove", "Set", "Generate", "Enable",
    "Disable", "Send", "Receive", "Upload", "Download",
];

/// Top-level converter configuration loaded from `.apidoc2oas.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub openapi_version: String,
    pub info: InfoConfig,
    pub server: ServerConfig,
    pub naming: NamingConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            openapi_version: DEFAULT_OPENAPI_VERSION.to_string(),
            info: InfoConfig::default(),
            server: ServerConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

/// Static document metadata. Values are copied verbatim into `info`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InfoConfig {
    pub title: String,
    pub description: String,
    pub version: String,
    pub contact_name: String,
    pub contact_url: String,
    pub license_name: String,
    pub license_url: String,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            title: "API".to_string(),
            description: "Generated from apiDoc endpoint documentation".to_string(),
            version: "1.0.0".to_string(),
            contact_name: "API Support".to_string(),
            contact_url: "https://example.com/support".to_string(),
            license_name: "Proprietary".to_string(),
            license_url: "https://example.com/license".to_string(),
        }
    }
}

/// The single server entry of the generated document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
    pub description: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "https://api.example.com".to_string(),
            description: "API server".to_string(),
        }
    }
}

/// Operation identifier heuristics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Replaces the built-in generic vocabulary entirely when set.
    pub generic_names: Vec<String>,
    /// Group name treated as "no group" when building contextual identifiers.
    pub default_group: String,
    /// Declared names shorter than this are always treated as generic.
    pub min_specific_length: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            generic_names: DEFAULT_GENERIC_NAMES.iter().map(|s| s.to_string()).collect(),
            default_group: "default".to_string(),
            min_specific_length: 4,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apidoc2oas.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ConverterConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: ConverterConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apidoc2oas configuration
openapi_version: "3.0.0"

info:
  title: API
  description: Generated from apiDoc endpoint documentation
  version: 1.0.0
  contact_name: API Support
  contact_url: https://example.com/support
  license_name: Proprietary
  license_url: https://example.com/license

server:
  url: https://api.example.com
  description: API server

naming:
  default_group: default
  min_specific_length: 4
  # Replaces the built-in list of generic endpoint names.
  # generic_names: [Details, List, Create, Update, Delete, Get]
"#
}
