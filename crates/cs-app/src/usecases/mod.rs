//! Business logic use cases
//!
//! scope blob ──decode──► ScopeState ──resolve per id──► ScopesViewModel
//!
//! Reference resolution and the group picker run while a scope is being
//! edited and do not touch the scope blob.

pub mod groups;
pub mod scopes;

pub use groups::{ListGroupsError, ListPickableGroups};
pub use scopes::{
    EntityResolvers, GetAppScopesViewModel, ResolveReferenceIds, ResolveReferencesError,
    ScopesViewModelError,
};
