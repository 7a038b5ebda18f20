use async_trait::async_trait;

use crate::ids::AppId;
use crate::scope::ScopeState;

/// Turns the serialized per-application scope blob into a [`ScopeState`].
pub trait ScopeStateDecoderPort: Send + Sync {
    /// Never fails: an empty, corrupt or unsupported blob yields
    /// [`ScopeState::empty`], since the state may simply not exist yet.
    fn decode(&self, blob: &[u8], app: &AppId) -> ScopeState;
}

/// Where the serialized scope blob of an application lives.
#[async_trait]
pub trait ScopeStateSourcePort: Send + Sync {
    /// `Ok(None)` when the application has no stored scope.
    async fn load(&self, app: &AppId) -> anyhow::Result<Option<Vec<u8>>>;
}
