use std::path::Path;

use anyhow::{Context, Result};
use cs_app::UseCases;
use cs_core::{AppId, ScopesViewModel};

/// Build the view model of `app`. With `blob`, that file is decoded instead
/// of the application's stored scope.
pub async fn run(use_cases: &UseCases, app: &str, blob: Option<&Path>) -> Result<ScopesViewModel> {
    let app = AppId::new(app);
    let usecase = use_cases.get_app_scopes_view_model();

    let view_model = match blob {
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read scope blob: {}", path.display()))?;
            usecase.execute(&app, Some(&bytes)).await?
        }
        None => usecase.execute_for_app(&app).await?,
    };

    Ok(view_model)
}
