use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::profile::CasingStyle;

/// Top-level project configuration loaded from `.cfgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CfgenConfig {
    pub input: String,
    pub language: LanguageId,
    pub options: LanguageOptions,
}

impl Default for CfgenConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            language: LanguageId::Go,
            options: LanguageOptions::default(),
        }
    }
}

/// Target languages with a built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageId {
    Go,
    Javascript,
    PythonFlask,
    Swift4,
    Swift5,
}

impl LanguageId {
    pub const ALL: [LanguageId; 5] = [
        LanguageId::Go,
        LanguageId::Javascript,
        LanguageId::PythonFlask,
        LanguageId::Swift4,
        LanguageId::Swift5,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::Go => "go",
            LanguageId::Javascript => "javascript",
            LanguageId::PythonFlask => "python_flask",
            LanguageId::Swift4 => "swift4",
            LanguageId::Swift5 => "swift5",
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "go" => Ok(LanguageId::Go),
            "javascript" | "js" => Ok(LanguageId::Javascript),
            "python_flask" | "python" | "flask" => Ok(LanguageId::PythonFlask),
            "swift4" | "swift" => Ok(LanguageId::Swift4),
            "swift5" => Ok(LanguageId::Swift5),
            _ => Err(ConfigError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Per-run naming and decoration options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageOptions {
    pub model_name_prefix: Option<String>,
    pub model_name_suffix: Option<String>,
    /// Explicit replacements for reserved words, applied before the default escape.
    pub reserved_word_mappings: IndexMap<String, String>,
    /// Property identifier casing. Only JavaScript accepts every style.
    pub property_naming: Option<CasingStyle>,
    /// Swift: required scalars are emitted non-optional.
    pub unwrap_required: bool,
    /// JavaScript: keep a leading `$` or `_` on parameter names.
    pub preserve_leading_param_char: bool,
    /// Python Flask: package holding the generated controllers.
    pub controller_package: String,
}

impl Default for LanguageOptions {
    fn default() -> Self {
        Self {
            model_name_prefix: None,
            model_name_suffix: None,
            reserved_word_mappings: IndexMap::new(),
            property_naming: None,
            unwrap_required: false,
            preserve_leading_param_char: false,
            controller_package: "controllers".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".cfgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<CfgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: CfgenConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# cfgen configuration
input: openapi.yaml
language: go            # go | javascript | python_flask | swift4 | swift5

options:
  # model_name_prefix: Api
  # model_name_suffix: Dto
  reserved_word_mappings: {}
    # return: ret
  # property_naming: camelCase   # PascalCase | camelCase | snake_case | original (javascript only)
  unwrap_required: false         # swift: required scalars are non-optional
  preserve_leading_param_char: false  # javascript: keep leading $ or _ on parameters
  controller_package: controllers     # python_flask
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CfgenConfig::default();
        assert_eq!(config.input, "openapi.yaml");
        assert_eq!(config.language, LanguageId::Go);
        assert!(config.options.reserved_word_mappings.is_empty());
        assert_eq!(config.options.controller_package, "controllers");
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: spec.yaml
language: javascript
options:
  model_name_prefix: Api
  reserved_word_mappings:
    return: ret
  property_naming: snake_case
  preserve_leading_param_char: true
"#;
        let config: CfgenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "spec.yaml");
        assert_eq!(config.language, LanguageId::Javascript);
        assert_eq!(config.options.model_name_prefix.as_deref(), Some("Api"));
        assert_eq!(config.options.reserved_word_mappings["return"], "ret");
        assert_eq!(config.options.property_naming, Some(CasingStyle::Snake));
        assert!(config.options.preserve_leading_param_char);
        assert!(!config.options.unwrap_required);
    }

    #[test]
    fn test_default_content_parses() {
        let config: CfgenConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.language, LanguageId::Go);
        assert_eq!(config.options.controller_package, "controllers");
    }

    #[test]
    fn test_unknown_casing_in_yaml_is_an_error() {
        let yaml = "options:\n  property_naming: kebab-case\n";
        assert!(serde_yaml_ng::from_str::<CfgenConfig>(yaml).is_err());
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("python-flask".parse::<LanguageId>().unwrap(), LanguageId::PythonFlask);
        assert_eq!("JS".parse::<LanguageId>().unwrap(), LanguageId::Javascript);
        assert!(matches!(
            "cobol".parse::<LanguageId>(),
            Err(ConfigError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "language: swift5\noptions:\n  unwrap_required: true\n").unwrap();
        let loaded = load_config(&path).unwrap().unwrap();
        assert_eq!(loaded.language, LanguageId::Swift5);
        assert!(loaded.options.unwrap_required);
    }
}
