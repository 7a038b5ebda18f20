//! # Dependency Wiring / 依赖装配
//!
//! Builds the concrete adapters named by [`AppConfig`] and groups them into
//! [`AppDeps`]. This is the only place that knows which adapter backs which
//! port.

use std::sync::Arc;

use anyhow::Result;
use cs_app::AppDeps;
use cs_core::ports::ThemeHint;
use cs_core::AppConfig;
use cs_infra::db::pool::open_read_only_pool;
use cs_infra::{
    BincodeScopeStateDecoder, DieselRecordStore, DieselSqliteExecutor, FileScopeStateSource,
    TomlResourceLabels,
};

/// Empty theme name means the default theme.
pub fn theme_hint(theme: &str) -> ThemeHint {
    if theme.is_empty() {
        ThemeHint::Default
    } else {
        ThemeHint::Named(theme.to_string())
    }
}

pub async fn build_app_deps(config: &AppConfig) -> Result<AppDeps> {
    if config.database_path.as_os_str().is_empty() {
        anyhow::bail!("storage.database_path is not configured");
    }

    let pool = open_read_only_pool(&config.database_path)?;
    let record_store = DieselRecordStore::new(DieselSqliteExecutor::new(pool));

    let resource_labels = match &config.resource_labels_path {
        Some(path) => TomlResourceLabels::load(path).await?,
        None => TomlResourceLabels::empty(),
    };

    tracing::debug!(
        database = %config.database_path.display(),
        scopes = %config.scope_state_dir.display(),
        "wired adapters"
    );

    Ok(AppDeps {
        record_store: Arc::new(record_store),
        resource_labels: Arc::new(resource_labels),
        theme: theme_hint(&config.theme),
        scope_decoder: Arc::new(BincodeScopeStateDecoder::new()),
        scope_source: Arc::new(FileScopeStateSource::new(config.scope_state_dir.clone())),
    })
}
