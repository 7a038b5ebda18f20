use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use async_trait::async_trait;
use log::debug;

use cs_core::ports::ScopeStateSourcePort;
use cs_core::AppId;

const SCOPE_FILE_EXTENSION: &str = "scope";

/// Reads scope blobs from `<dir>/<app-id>.scope`.
#[derive(Debug, Clone)]
pub struct FileScopeStateSource {
    dir: PathBuf,
}

impl FileScopeStateSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the blob for `app`. Ids that could escape `dir` are refused.
    pub fn path_for(&self, app: &AppId) -> anyhow::Result<PathBuf> {
        let id = app.as_str();
        if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
            bail!("invalid application id for scope lookup: {:?}", id);
        }
        Ok(self.dir.join(format!("{id}.{SCOPE_FILE_EXTENSION}")))
    }
}

#[async_trait]
impl ScopeStateSourcePort for FileScopeStateSource {
    async fn load(&self, app: &AppId) -> anyhow::Result<Option<Vec<u8>>> {
        let path = self.path_for(app)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no scope state at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let source = FileScopeStateSource::new(dir.path());

        let blob = source.load(&AppId::new("com.example.none")).await.unwrap();
        assert!(blob.is_none());
    }

    #[tokio::test]
    async fn test_reads_blob_by_app_id() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("com.example.mail.scope"), [1u8, 2, 3]).unwrap();
        let source = FileScopeStateSource::new(dir.path());

        let blob = source.load(&AppId::new("com.example.mail")).await.unwrap();
        assert_eq!(blob, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_path_like_app_id_is_refused() {
        let dir = TempDir::new().unwrap();
        let source = FileScopeStateSource::new(dir.path());

        assert!(source.load(&AppId::new("../etc/passwd")).await.is_err());
        assert!(source.load(&AppId::new("..")).await.is_err());
    }
}
