use async_trait::async_trait;

/// A string resource owned by another package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub package: String,
    pub resource_id: i32,
}

impl ResourceRef {
    pub fn new(package: impl Into<String>, resource_id: i32) -> Self {
        Self {
            package: package.into(),
            resource_id,
        }
    }
}

/// Theme to resolve a resource against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeHint {
    #[default]
    Default,
    Named(String),
}

/// Resolves foreign-package string resources to localized text.
///
/// 解析外部包的字符串资源
#[async_trait]
pub trait ResourceLabelPort: Send + Sync {
    /// `None` when the package or resource is unknown.
    async fn resolve_text(&self, resource: &ResourceRef, theme: &ThemeHint) -> Option<String>;
}
