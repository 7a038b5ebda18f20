//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. No validation: a
//! missing key becomes an empty value and is reported later by whichever
//! adapter needs it.
//! 仅纯数据加载，不做验证。

use std::path::{Path, PathBuf};

use anyhow::Context;
use cs_core::AppConfig;

const APP_DIR_NAME: &str = "contact-scopes";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/contact-scopes/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the configuration for this run.
///
/// An explicit path must load. Otherwise the default config file is used
/// when present, and the data directory layout when it is not.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if let Some(path) = default_config_path().filter(|p| p.is_file()) {
        log::debug!("using config file {}", path.display());
        return load_config(&path);
    }

    let base = dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .context("No config file given and no platform data directory available")?;
    log::debug!("no config file, using data dir {}", base.display());
    Ok(AppConfig::with_base_dir(base))
}
