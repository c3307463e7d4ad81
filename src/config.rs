//! Configuration file support for sbom-kit.
//!
//! Provides YAML-based configuration through `sbom-kit.config.yml` files,
//! environment overrides, and resolution into explicit generator settings.

use anyhow::bail;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::sbom_generation::domain::sbom_metadata::DEFAULT_SPDX_NAMESPACE_PREFIX;
use crate::sbom_generation::domain::{GeneratorSettings, ToolInfo};
use crate::shared::error::SbomError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-kit.config.yml";

const DEFAULT_SOURCE: &str = "sbom-kit";
const DEFAULT_DOCUMENT_NAME: &str = "sbom";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub tool_vendor: Option<String>,
    pub tool_name: Option<String>,
    pub tool_version: Option<String>,
    pub source: Option<String>,
    pub document_name: Option<String>,
    pub spdx_namespace_prefix: Option<String>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub settings: GeneratorSettings,
    pub source: String,
    pub log_level: Option<String>,
    /// Unknown config keys, reported once logging is up
    pub ignored_fields: Vec<String>,
}

impl AppConfig {
    /// Applies environment overrides to the (optional) file, validates, and
    /// fills defaults.
    pub fn resolve<F>(file: Option<ConfigFile>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut file = file.unwrap_or_default();
        apply_env_overrides(&mut file, env);
        validate_config(&file)?;

        let mut ignored_fields: Vec<String> = file.unknown_fields.keys().cloned().collect();
        ignored_fields.sort();

        let defaults = ToolInfo::default();
        Ok(Self {
            settings: GeneratorSettings {
                tool: ToolInfo::new(
                    file.tool_vendor.unwrap_or(defaults.vendor),
                    file.tool_name.unwrap_or(defaults.name),
                    file.tool_version.unwrap_or(defaults.version),
                ),
                document_name: file
                    .document_name
                    .unwrap_or_else(|| DEFAULT_DOCUMENT_NAME.to_string()),
                spdx_namespace_prefix: file
                    .spdx_namespace_prefix
                    .unwrap_or_else(|| DEFAULT_SPDX_NAMESPACE_PREFIX.to_string()),
            },
            source: file.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            log_level: file.log_level,
            ignored_fields,
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| SbomError::ConfigError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| SbomError::ConfigError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn apply_env_overrides<F>(config: &mut ConfigFile, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let overrides: [(&str, &mut Option<String>); 5] = [
        ("SBOM_KIT_TOOL_VENDOR", &mut config.tool_vendor),
        ("SBOM_KIT_TOOL_NAME", &mut config.tool_name),
        ("SBOM_KIT_TOOL_VERSION", &mut config.tool_version),
        ("SBOM_KIT_SOURCE", &mut config.source),
        ("SBOM_KIT_LOG_LEVEL", &mut config.log_level),
    ];
    for (key, slot) in overrides {
        if let Some(value) = env(key) {
            *slot = Some(value);
        }
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let fields = [
        ("tool_vendor", &config.tool_vendor),
        ("tool_name", &config.tool_name),
        ("tool_version", &config.tool_version),
        ("source", &config.source),
        ("document_name", &config.document_name),
        ("spdx_namespace_prefix", &config.spdx_namespace_prefix),
        ("log_level", &config.log_level),
    ];
    for (name, value) in fields {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default value.",
                name
            );
        }
    }

    if let Some(ref prefix) = config.spdx_namespace_prefix {
        if !prefix.starts_with("http://") && !prefix.starts_with("https://") {
            bail!(
                "Invalid config: spdx_namespace_prefix must be an http(s) URI, got '{}'.\n\n\
                 💡 Hint: e.g. \"https://spdx.org/spdxdocs/\"",
                prefix
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
tool_vendor: Acme Corp
tool_name: acme-sbom
tool_version: 2.0.0
source: acme
document_name: platform
spdx_namespace_prefix: https://sbom.acme.example/
log_level: debug
"#,
        )
        .unwrap();

        let file = load_config_from_path(&config_path).unwrap();
        let config = AppConfig::resolve(Some(file), no_env).unwrap();
        assert_eq!(config.settings.tool, ToolInfo::new("Acme Corp", "acme-sbom", "2.0.0"));
        assert_eq!(config.settings.document_name, "platform");
        assert_eq!(config.settings.spdx_namespace_prefix, "https://sbom.acme.example/");
        assert_eq!(config.source, "acme");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.ignored_fields.is_empty());
    }

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::resolve(None, no_env).unwrap();
        assert_eq!(config.settings, GeneratorSettings::default());
        assert_eq!(config.source, "sbom-kit");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = ConfigFile {
            source: Some("from-file".to_string()),
            tool_name: Some("file-tool".to_string()),
            ..ConfigFile::default()
        };
        let env = |key: &str| match key {
            "SBOM_KIT_SOURCE" => Some("from-env".to_string()),
            "SBOM_KIT_LOG_LEVEL" => Some("warn".to_string()),
            _ => None,
        };

        let config = AppConfig::resolve(Some(file), env).unwrap();
        assert_eq!(config.source, "from-env");
        assert_eq!(config.settings.tool.name, "file-tool");
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "source: discovered\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().source.as_deref(), Some("discovered"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to load config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to load config file"));
    }

    #[test]
    fn test_empty_value_validation_error() {
        let file = ConfigFile {
            tool_vendor: Some("   ".to_string()),
            ..ConfigFile::default()
        };
        let err = format!("{}", AppConfig::resolve(Some(file), no_env).unwrap_err());
        assert!(err.contains("tool_vendor must not be empty"));
    }

    #[test]
    fn test_namespace_prefix_must_be_uri() {
        let file = ConfigFile {
            spdx_namespace_prefix: Some("spdx-docs/".to_string()),
            ..ConfigFile::default()
        };
        let err = format!("{}", AppConfig::resolve(Some(file), no_env).unwrap_err());
        assert!(err.contains("spdx_namespace_prefix"));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "source: x\nzeta: 1\nalpha: true\n").unwrap();

        let file = load_config_from_path(&config_path).unwrap();
        assert_eq!(file.unknown_fields.len(), 2);
        let config = AppConfig::resolve(Some(file), no_env).unwrap();
        assert_eq!(config.ignored_fields, vec!["alpha", "zeta"]);
    }
}
