use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::contacts::EntityAddress;
use crate::ports::RecordStoreError;

/// Column a caller may request from the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordField {
    /// Row id, available on every kind.
    Id,
    // groups
    ResPackage,
    TitleRes,
    Title,
    AccountName,
    SummaryCount,
    // contacts
    NameRawContactId,
    // raw contacts
    DisplayNamePrimary,
    // data rows
    RawContactId,
    Data1,
    Data2,
}

/// A single stored value, typed the way the store holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Text(String),
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Integer)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}

/// Field-keyed row returned by a lookup. Holds exactly the requested fields.
///
/// Accessors coerce the way a cursor does: integers read as text render in
/// decimal, numeric text reads as an integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<RecordField, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: RecordField, value: FieldValue) -> Self {
        self.fields.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: RecordField, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn get(&self, field: RecordField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn get_i64(&self, field: RecordField) -> Option<i64> {
        match self.fields.get(&field)? {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(text) => text.trim().parse().ok(),
            FieldValue::Null => None,
        }
    }

    pub fn get_text(&self, field: RecordField) -> Option<String> {
        match self.fields.get(&field)? {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Integer(value) => Some(value.to_string()),
            FieldValue::Null => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = RecordField> + '_ {
        self.fields.keys().copied()
    }
}

/// Row visibility applied to a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFilter {
    #[default]
    Any,
    /// Skip rows flagged as deleted. Kinds without a deleted flag ignore it.
    LiveOnly,
}

/// Read-only access to the contact record store.
///
/// Every call checks out its own connection and releases it before
/// returning, whatever the outcome.
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    /// Look up one row. `Ok(None)` means the row does not exist (or is
    /// filtered out); errors are reserved for storage failures and requests
    /// for fields the kind does not have.
    async fn lookup(
        &self,
        address: &EntityAddress,
        fields: &[RecordField],
        filter: RowFilter,
    ) -> Result<Option<Record>, RecordStoreError>;

    /// Groups a user may pick: not deleted, not auto-add, not favorites and
    /// not read-only. Order is unspecified.
    async fn list_pickable_groups(
        &self,
        fields: &[RecordField],
    ) -> Result<Vec<Record>, RecordStoreError>;
}
