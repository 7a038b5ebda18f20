//! Per-type entity resolvers.
//! 按实体类型解析标题、摘要与详情引用
//!
//! Each resolver turns one scope id into a [`ScopeEntry`]. A missing backing
//! record is not an error: the entry is still produced, with the optional
//! fields left empty. No record means no detail reference either.

use std::sync::Arc;

use cs_core::contacts::{
    subtype::subtype_label, CommonDataRecord, DataKind, DetailReference, EntityAddress,
    SubtypeField,
};
use cs_core::ports::{
    RecordField, RecordStoreError, RecordStorePort, ResourceLabelPort, RowFilter, ThemeHint,
};
use cs_core::scope::{EntityTypeTag, ScopeEntry};

use crate::usecases::groups::{group_info_from_record, GROUP_FIELDS};

const DISPLAY_NAME_FIELDS: &[RecordField] = &[RecordField::DisplayNamePrimary];
const NAME_SOURCE_FIELDS: &[RecordField] = &[RecordField::NameRawContactId];
const COMMON_DATA_FIELDS: &[RecordField] = &[
    RecordField::RawContactId,
    RecordField::Data1,
    RecordField::Data2,
];
const ID_FIELDS: &[RecordField] = &[RecordField::Id];

/// The group, contact, number and email resolvers over shared ports.
#[derive(Clone)]
pub struct EntityResolvers {
    record_store: Arc<dyn RecordStorePort>,
    resource_labels: Arc<dyn ResourceLabelPort>,
    theme: ThemeHint,
}

impl EntityResolvers {
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

    /// Resolve `id` with the resolver matching `tag`.
    pub async fn resolve(
        &self,
        tag: EntityTypeTag,
        id: i64,
    ) -> Result<ScopeEntry, RecordStoreError> {
        match tag {
            EntityTypeTag::Group => self.resolve_group(id).await,
            EntityTypeTag::Contact => self.resolve_contact(id).await,
            EntityTypeTag::Number => self.resolve_common_data(DataKind::Phone, id).await,
            EntityTypeTag::Email => self.resolve_common_data(DataKind::Email, id).await,
        }
    }

    pub async fn resolve_group(&self, id: i64) -> Result<ScopeEntry, RecordStoreError> {
        let record = self
            .record_store
            .lookup(&EntityAddress::group(id), GROUP_FIELDS, RowFilter::LiveOnly)
            .await?;

        let Some(record) = record else {
            tracing::debug!(group_id = id, "group not found or deleted");
            return Ok(ScopeEntry::unresolved(EntityTypeTag::Group, id));
        };

        let info =
            group_info_from_record(id, &record, self.resource_labels.as_ref(), &self.theme).await;

        Ok(ScopeEntry::new(
            EntityTypeTag::Group,
            id,
            info.title,
            info.summary,
            Some(DetailReference::group(id)),
        ))
    }

    pub async fn resolve_contact(&self, id: i64) -> Result<ScopeEntry, RecordStoreError> {
        let record = self
            .record_store
            .lookup(&EntityAddress::contact(id), NAME_SOURCE_FIELDS, RowFilter::Any)
            .await?;

        let Some(record) = record else {
            tracing::debug!(contact_id = id, "contact not found");
            return Ok(ScopeEntry::unresolved(EntityTypeTag::Contact, id));
        };

        let title = match record.get_i64(RecordField::NameRawContactId) {
            Some(raw_contact_id) => self.display_name(raw_contact_id).await?,
            None => None,
        };

        Ok(ScopeEntry::new(
            EntityTypeTag::Contact,
            id,
            title,
            None,
            Some(DetailReference::contact(id)),
        ))
    }

    /// Number and email entries share this path; `kind` picks the label table.
    pub async fn resolve_common_data(
        &self,
        kind: DataKind,
        id: i64,
    ) -> Result<ScopeEntry, RecordStoreError> {
        let tag = kind.type_tag();

        let Some(data) = self.common_data(id).await? else {
            tracing::debug!(data_id = id, kind = ?kind, "data row not found");
            return Ok(ScopeEntry::unresolved(tag, id));
        };

        let label = subtype_label(kind, &data.subtype);
        let summary = format!("{}: {}", label, data.data1.as_deref().unwrap_or_default());

        let (title, detail) = match data.raw_contact_id {
            Some(raw_contact_id) => (
                self.display_name(raw_contact_id).await?,
                Some(DetailReference::raw_contact(raw_contact_id)),
            ),
            None => (None, None),
        };

        Ok(ScopeEntry::new(tag, id, title, Some(summary), detail))
    }

    /// Primary display name of a raw contact.
    pub async fn display_name(&self, raw_contact_id: i64) -> Result<Option<String>, RecordStoreError> {
        let record = self
            .record_store
            .lookup(
                &EntityAddress::raw_contact(raw_contact_id),
                DISPLAY_NAME_FIELDS,
                RowFilter::Any,
            )
            .await?;

        Ok(record.and_then(|r| r.get_text(RecordField::DisplayNamePrimary)))
    }

    async fn common_data(&self, id: i64) -> Result<Option<CommonDataRecord>, RecordStoreError> {
        let record = self
            .record_store
            .lookup(&EntityAddress::data(id), COMMON_DATA_FIELDS, RowFilter::Any)
            .await?;

        Ok(record.map(|r| {
            CommonDataRecord::new(
                r.get_i64(RecordField::RawContactId),
                r.get_text(RecordField::Data1),
                SubtypeField::from_stored(r.get_text(RecordField::Data2).as_deref()),
            )
        }))
    }

    /// Id of the row at `address`, if it exists.
    pub async fn row_id(&self, address: &EntityAddress) -> Result<Option<i64>, RecordStoreError> {
        let record = self
            .record_store
            .lookup(address, ID_FIELDS, RowFilter::Any)
            .await?;

        Ok(record.and_then(|r| r.get_i64(RecordField::Id)))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use cs_core::contacts::{EntityAddress, EntityKind};
    use cs_core::ports::{
        FieldValue, Record, RecordField, RecordStoreError, RecordStorePort, ResourceLabelPort,
        ResourceRef, RowFilter, ThemeHint,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory record store keyed by address. Rows flagged deleted are
    /// hidden from `RowFilter::LiveOnly` lookups.
    #[derive(Default)]
    pub struct InMemoryRecordStore {
        rows: HashMap<EntityAddress, Record>,
        deleted: Vec<EntityAddress>,
        pub lookups: Mutex<Vec<EntityAddress>>,
    }

    impl InMemoryRecordStore {
        pub fn with_row(mut self, address: EntityAddress, record: Record) -> Self {
            let record = record.with(RecordField::Id, FieldValue::Integer(address.id));
            self.rows.insert(address, record);
            self
        }

        pub fn with_deleted(mut self, address: EntityAddress, record: Record) -> Self {
            self.deleted.push(address);
            self.with_row(address, record)
        }

        pub fn raw_contact(self, id: i64, name: &str) -> Self {
            self.with_row(
                EntityAddress::raw_contact(id),
                Record::new().with(RecordField::DisplayNamePrimary, FieldValue::Text(name.into())),
            )
        }

        pub fn data(self, id: i64, raw_contact_id: i64, data1: &str, data2: Option<&str>) -> Self {
            self.with_row(
                EntityAddress::data(id),
                Record::new()
                    .with(RecordField::RawContactId, FieldValue::Integer(raw_contact_id))
                    .with(RecordField::Data1, FieldValue::Text(data1.into()))
                    .with(RecordField::Data2, FieldValue::from(data2.map(str::to_string))),
            )
        }
    }

    #[async_trait]
    impl RecordStorePort for InMemoryRecordStore {
        async fn lookup(
            &self,
            address: &EntityAddress,
            fields: &[RecordField],
            filter: RowFilter,
        ) -> Result<Option<Record>, RecordStoreError> {
            self.lookups.lock().unwrap().push(*address);
            if filter == RowFilter::LiveOnly && self.deleted.contains(address) {
                return Ok(None);
            }
            let Some(row) = self.rows.get(address) else {
                return Ok(None);
            };
            let mut projected = Record::new();
            for field in fields {
                let value = row.get(*field).cloned().unwrap_or(FieldValue::Null);
                projected.insert(*field, value);
            }
            Ok(Some(projected))
        }

        async fn list_pickable_groups(
            &self,
            _fields: &[RecordField],
        ) -> Result<Vec<Record>, RecordStoreError> {
            Ok(self
                .rows
                .iter()
                .filter(|(address, _)| address.kind == EntityKind::Group)
                .map(|(_, record)| record.clone())
                .collect())
        }
    }

    /// Resource lookup returning fixed text per (package, id).
    #[derive(Default)]
    pub struct FixedLabels {
        pub texts: HashMap<(String, i32), String>,
    }

    #[async_trait]
    impl ResourceLabelPort for FixedLabels {
        async fn resolve_text(&self, resource: &ResourceRef, _theme: &ThemeHint) -> Option<String> {
            self.texts
                .get(&(resource.package.clone(), resource.resource_id))
                .cloned()
        }
    }
}
