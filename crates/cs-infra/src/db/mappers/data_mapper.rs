use cs_core::contacts::EntityKind;
use cs_core::ports::{FieldValue, RecordField};

use crate::db::models::DataRow;
use crate::db::ports::RecordMapper;

pub struct DataRowMapper;

impl RecordMapper<DataRow> for DataRowMapper {
    fn kind(&self) -> EntityKind {
        EntityKind::Data
    }

    fn field(&self, row: &DataRow, field: RecordField) -> Option<FieldValue> {
        let value = match field {
            RecordField::Id => FieldValue::Integer(row.id),
            RecordField::RawContactId => FieldValue::Integer(row.raw_contact_id),
            RecordField::Data1 => row.data1.clone().into(),
            // Stored subtype is passed through untouched; callers decide
            // whether it is a code or a label.
            RecordField::Data2 => row.data2.clone().into(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_subtype_is_passed_through() {
        let row = DataRow {
            id: 42,
            raw_contact_id: 7,
            mimetype: "vnd.android.cursor.item/phone_v2".into(),
            data1: Some("555-1234".into()),
            data2: Some("Boat".into()),
        };

        let record = DataRowMapper
            .to_record(
                &row,
                &[RecordField::RawContactId, RecordField::Data1, RecordField::Data2],
            )
            .unwrap();

        assert_eq!(record.get_i64(RecordField::RawContactId), Some(7));
        assert_eq!(record.get_text(RecordField::Data2), Some("Boat".into()));
    }
}
