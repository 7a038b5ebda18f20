use cs_core::contacts::EntityKind;
use cs_core::ports::{FieldValue, Record, RecordField, RecordStoreError};

/// Projects a typed row onto the field-keyed [`Record`] callers ask for.
pub trait RecordMapper<R>: Sync + Send {
    fn kind(&self) -> EntityKind;

    /// Value of `field` on `row`, or `None` if this kind has no such field.
    fn field(&self, row: &R, field: RecordField) -> Option<FieldValue>;

    fn to_record(&self, row: &R, fields: &[RecordField]) -> Result<Record, RecordStoreError> {
        let mut record = Record::new();
        for field in fields {
            let value = self
                .field(row, *field)
                .ok_or(RecordStoreError::UnsupportedField {
                    kind: self.kind(),
                    field: *field,
                })?;
            record.insert(*field, value);
        }
        Ok(record)
    }
}
