//! Use case for mapping user-selected references to scope ids
//! 将用户选择的实体引用解析为 id

use cs_core::contacts::{DetailReference, ReferenceParseError};
use cs_core::ports::RecordStoreError;
use tracing::{info_span, Instrument};

use super::EntityResolvers;

#[derive(Debug, thiserror::Error)]
pub enum ResolveReferencesError {
    #[error("Reference #{index} is malformed ({reference}): {reason}")]
    Malformed {
        index: usize,
        reference: String,
        reason: ReferenceParseError,
    },

    #[error("Reference #{index} does not resolve: {reference}")]
    Unresolved { index: usize, reference: String },

    #[error("Record store error: {0}")]
    RecordStore(#[from] RecordStoreError),
}

/// Resolves entity references to their numeric ids, all or nothing.
///
/// Used while entries are being added to a scope. An unresolvable reference
/// is a selection error the user must see, so the first miss fails the whole
/// call and no partial list is returned.
pub struct ResolveReferenceIds {
    resolvers: EntityResolvers,
}

impl ResolveReferenceIds {
    pub fn new(resolvers: EntityResolvers) -> Self {
        Self { resolvers }
    }

    /// One id per reference, in input order.
    pub async fn execute<S: AsRef<str>>(
        &self,
        references: &[S],
    ) -> Result<Vec<i64>, ResolveReferencesError> {
        let span = info_span!(
            "usecase.resolve_reference_ids.execute",
            count = references.len()
        );
        async move {
            let mut ids = Vec::with_capacity(references.len());

            for (index, raw) in references.iter().enumerate() {
                let raw = raw.as_ref();
                let reference = raw.parse::<DetailReference>().map_err(|reason| {
                    ResolveReferencesError::Malformed {
                        index,
                        reference: raw.to_string(),
                        reason,
                    }
                })?;

                let id = self
                    .resolvers
                    .row_id(&reference.address())
                    .await?
                    .ok_or_else(|| ResolveReferencesError::Unresolved {
                        index,
                        reference: raw.to_string(),
                    })?;

                ids.push(id);
            }

            Ok(ids)
        }
        .instrument(span)
        .await
    }
}
