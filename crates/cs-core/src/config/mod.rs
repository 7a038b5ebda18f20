//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTOs and the TOML → DTO mapping. No validation, no
//! defaults beyond "empty": a missing key is a fact, not an error.
//!
//! 此模块只包含数据结构定义，不做验证或默认值计算。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite contact database path (no existence check)
    pub database_path: PathBuf,

    /// Directory holding one scope blob per application
    pub scope_state_dir: PathBuf,

    /// Optional TOML table of foreign-package string resources
    pub resource_labels_path: Option<PathBuf>,

    /// Theme passed to resource lookups; empty means the default theme
    pub theme: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Must not validate: empty strings are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
        };

        Ok(Self {
            database_path: PathBuf::from(str_at("storage", "database_path").unwrap_or("")),
            scope_state_dir: PathBuf::from(str_at("storage", "scope_state_dir").unwrap_or("")),
            resource_labels_path: str_at("resources", "labels_path").map(PathBuf::from),
            theme: str_at("resources", "theme").unwrap_or("").to_string(),
        })
    }

    /// Create empty AppConfig (all empty values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            database_path: PathBuf::new(),
            scope_state_dir: PathBuf::new(),
            resource_labels_path: None,
            theme: String::new(),
        }
    }

    /// Paths under a caller-supplied base directory.
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs`
    /// crate); this constructor only joins paths.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            database_path: base.join("contacts.db"),
            scope_state_dir: base.join("scopes"),
            resource_labels_path: None,
            theme: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_maps_every_key() {
        let value: toml::Value = toml::from_str(
            r#"
            [storage]
            database_path = "/data/contacts.db"
            scope_state_dir = "/data/scopes"

            [resources]
            labels_path = "/data/labels.toml"
            theme = "dark"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/data/contacts.db"));
        assert_eq!(config.scope_state_dir, PathBuf::from("/data/scopes"));
        assert_eq!(
            config.resource_labels_path,
            Some(PathBuf::from("/data/labels.toml"))
        );
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_missing_sections_are_empty_facts() {
        let value: toml::Value = toml::from_str("").unwrap();
        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_with_base_dir_joins_paths() {
        let config = AppConfig::with_base_dir(PathBuf::from("/base"));
        assert_eq!(config.database_path, PathBuf::from("/base/contacts.db"));
        assert_eq!(config.scope_state_dir, PathBuf::from("/base/scopes"));
    }
}
