//! Use case for building the scope view model of one application
//! 构建应用作用域视图模型的用例

use std::sync::Arc;

use cs_core::ids::AppId;
use cs_core::ports::{RecordStoreError, ScopeStateDecoderPort, ScopeStateSourcePort};
use cs_core::scope::{EntityTypeTag, ScopeEntry, ScopeState, ScopesViewModel};
use futures::future::try_join_all;
use tracing::{info_span, Instrument};

use super::EntityResolvers;

#[derive(Debug, thiserror::Error)]
pub enum ScopesViewModelError {
    #[error("Record store error: {0}")]
    RecordStore(#[from] RecordStoreError),

    #[error("Failed to load scope state for {app}: {error}")]
    ScopeSource { app: String, error: anyhow::Error },
}

/// Decodes an application's scope and resolves every id into a
/// [`ScopeEntry`], grouped by entity type.
///
/// Best-effort per entry: a stale id still yields an entry. Only record
/// store failures abort the request.
pub struct GetAppScopesViewModel {
    resolvers: EntityResolvers,
    scope_decoder: Arc<dyn ScopeStateDecoderPort>,
    scope_source: Arc<dyn ScopeStateSourcePort>,
}

impl GetAppScopesViewModel {
    pub fn new(
        resolvers: EntityResolvers,
        scope_decoder: Arc<dyn ScopeStateDecoderPort>,
        scope_source: Arc<dyn ScopeStateSourcePort>,
    ) -> Self {
        Self {
            resolvers,
            scope_decoder,
            scope_source,
        }
    }

    /// Build the view model from an already loaded blob. `None` means the
    /// application has no stored scope.
    pub async fn execute(
        &self,
        app: &AppId,
        blob: Option<&[u8]>,
    ) -> Result<ScopesViewModel, ScopesViewModelError> {
        let span = info_span!("usecase.get_app_scopes_view_model.execute", app = %app);
        async move {
            let state = self.scope_decoder.decode(blob.unwrap_or_default(), app);
            let view_model = self.assemble(&state).await?;

            tracing::info!(
                ids = state.len(),
                entries = view_model.entry_count(),
                "built scope view model"
            );
            Ok(view_model)
        }
        .instrument(span)
        .await
    }

    /// Load the application's blob from the scope source, then build.
    pub async fn execute_for_app(
        &self,
        app: &AppId,
    ) -> Result<ScopesViewModel, ScopesViewModelError> {
        let blob = self
            .scope_source
            .load(app)
            .await
            .map_err(|error| ScopesViewModelError::ScopeSource {
                app: app.to_string(),
                error,
            })?;

        self.execute(app, blob.as_deref()).await
    }

    async fn assemble(&self, state: &ScopeState) -> Result<ScopesViewModel, RecordStoreError> {
        let mut view_model = ScopesViewModel::new();

        for tag in EntityTypeTag::ALL {
            let entries = self.resolve_bucket(tag, state.ids(tag)).await?;
            view_model.insert(tag, entries);
        }

        Ok(view_model)
    }

    /// Resolves ids concurrently; `try_join_all` keeps input order.
    async fn resolve_bucket(
        &self,
        tag: EntityTypeTag,
        ids: &[i64],
    ) -> Result<Vec<ScopeEntry>, RecordStoreError> {
        try_join_all(ids.iter().map(|id| self.resolvers.resolve(tag, *id))).await
    }
}
