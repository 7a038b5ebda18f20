//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for use case construction. Not a builder: no build
//! steps, no defaults, no hidden logic.
//! 仅用于参数打包。

use std::sync::Arc;

use cs_core::ports::{
    RecordStorePort, ResourceLabelPort, ScopeStateDecoderPort, ScopeStateSourcePort, ThemeHint,
};

/// Application dependency grouping. All dependencies are required.
/// 应用依赖分组（所有依赖都是必需的）
#[derive(Clone)]
pub struct AppDeps {
    // Record store / 记录存储
    pub record_store: Arc<dyn RecordStorePort>,

    // Foreign resources / 外部资源
    pub resource_labels: Arc<dyn ResourceLabelPort>,
    pub theme: ThemeHint,

    // Scope state / 作用域状态
    pub scope_decoder: Arc<dyn ScopeStateDecoderPort>,
    pub scope_source: Arc<dyn ScopeStateSourcePort>,
}
