//! Factory functions for creating use cases with AppDeps
//! 使用 AppDeps 创建用例的工厂函数

use crate::deps::AppDeps;
use crate::usecases::{
    EntityResolvers, GetAppScopesViewModel, ListPickableGroups, ResolveReferenceIds,
};

/// Builds use cases from one set of dependencies.
pub struct UseCases {
    deps: AppDeps,
}

impl UseCases {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn entity_resolvers(&self) -> EntityResolvers {
        EntityResolvers::new(
            self.deps.record_store.clone(),
            self.deps.resource_labels.clone(),
            self.deps.theme.clone(),
        )
    }

    pub fn get_app_scopes_view_model(&self) -> GetAppScopesViewModel {
        GetAppScopesViewModel::new(
            self.entity_resolvers(),
            self.deps.scope_decoder.clone(),
            self.deps.scope_source.clone(),
        )
    }

    pub fn resolve_reference_ids(&self) -> ResolveReferenceIds {
        ResolveReferenceIds::new(self.entity_resolvers())
    }

    pub fn list_pickable_groups(&self) -> ListPickableGroups {
        ListPickableGroups::new(
            self.deps.record_store.clone(),
            self.deps.resource_labels.clone(),
            self.deps.theme.clone(),
        )
    }
}
