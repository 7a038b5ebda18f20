//! Use case for listing the groups offered in the scope group picker
//! 列出可供选择的联系人分组

use std::sync::Arc;

use cs_core::contacts::{collation::compare_titles, GroupInfo};
use cs_core::ports::{RecordField, RecordStoreError, RecordStorePort, ResourceLabelPort, ThemeHint};
use tracing::{info_span, Instrument};

use super::{group_info_from_record, GROUP_FIELDS};

#[derive(Debug, thiserror::Error)]
pub enum ListGroupsError {
    #[error("Record store error: {0}")]
    RecordStore(#[from] RecordStoreError),

    #[error("Group row without id")]
    MissingId,
}

/// Lists every group a user may add to a scope, independent of any
/// application. Sorted by displayed title, case- and accent-insensitively.
pub struct ListPickableGroups {
    record_store: Arc<dyn RecordStorePort>,
    resource_labels: Arc<dyn ResourceLabelPort>,
    theme: ThemeHint,
}

impl ListPickableGroups {
    pub fn new(
        record_store: Arc<dyn RecordStorePort>,
        resource_labels: Arc<dyn ResourceLabelPort>,
        theme: ThemeHint,
    ) -> Self {
        Self {
            record_store,
            resource_labels,
            theme,
        }
    }

    pub async fn execute(&self) -> Result<Vec<GroupInfo>, ListGroupsError> {
        let span = info_span!("usecase.list_pickable_groups.execute");
        async move {
            let records = self.record_store.list_pickable_groups(GROUP_FIELDS).await?;

            let mut groups = Vec::with_capacity(records.len());
            for record in &records {
                let id = record
                    .get_i64(RecordField::Id)
                    .ok_or(ListGroupsError::MissingId)?;
                groups.push(
                    group_info_from_record(id, record, self.resource_labels.as_ref(), &self.theme)
                        .await,
                );
            }

            groups.sort_by(|a, b| {
                compare_titles(a.title.as_deref(), b.title.as_deref()).then(a.id.cmp(&b.id))
            });

            tracing::debug!(count = groups.len(), "listed pickable groups");
            Ok(groups)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cs_core::contacts::EntityAddress;
    use cs_core::ports::{FieldValue, Record, ResourceRef, RowFilter};

    struct StubRecordStore {
        groups: Vec<Record>,
    }

    #[async_trait]
    impl RecordStorePort for StubRecordStore {
        async fn lookup(
            &self,
            _address: &EntityAddress,
            _fields: &[RecordField],
            _filter: RowFilter,
        ) -> Result<Option<Record>, RecordStoreError> {
            unimplemented!()
        }

        async fn list_pickable_groups(
            &self,
            fields: &[RecordField],
        ) -> Result<Vec<Record>, RecordStoreError> {
            assert_eq!(fields, GROUP_FIELDS);
            Ok(self.groups.clone())
        }
    }

    struct StubLabels;

    #[async_trait]
    impl ResourceLabelPort for StubLabels {
        async fn resolve_text(&self, resource: &ResourceRef, _theme: &ThemeHint) -> Option<String> {
            (resource.resource_id == 1).then(|| "Zebra club".to_string())
        }
    }

    fn group(id: i64, title: Option<&str>, res: Option<(&str, &str)>) -> Record {
        let (package, title_res) = match res {
            Some((p, r)) => (Some(p.to_string()), Some(r.to_string())),
            None => (None, None),
        };
        Record::new()
            .with(RecordField::Id, FieldValue::Integer(id))
            .with(RecordField::Title, FieldValue::from(title.map(str::to_string)))
            .with(RecordField::ResPackage, FieldValue::from(package))
            .with(RecordField::TitleRes, FieldValue::from(title_res))
            .with(RecordField::AccountName, FieldValue::Null)
            .with(RecordField::SummaryCount, FieldValue::Null)
    }

    #[tokio::test]
    async fn test_sorts_by_displayed_title() {
        let store = StubRecordStore {
            groups: vec![
                group(1, Some("beta"), None),
                group(2, Some("stored"), Some(("com.sync", "1"))),
                group(3, None, None),
                group(4, Some("Älpha"), None),
            ],
        };
        let use_case =
            ListPickableGroups::new(Arc::new(store), Arc::new(StubLabels), ThemeHint::Default);

        let groups = use_case.execute().await.unwrap();
        let ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
        assert_eq!(groups[2].title.as_deref(), Some("Zebra club"));
    }

    #[tokio::test]
    async fn test_row_without_id_is_an_error() {
        let store = StubRecordStore {
            groups: vec![Record::new().with(RecordField::Title, FieldValue::Text("x".into()))],
        };
        let use_case =
            ListPickableGroups::new(Arc::new(store), Arc::new(StubLabels), ThemeHint::Default);

        let result = use_case.execute().await;
        assert!(matches!(result, Err(ListGroupsError::MissingId)));
    }
}
