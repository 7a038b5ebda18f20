use cs_core::contacts::EntityKind;
use cs_core::ports::{FieldValue, RecordField};

use crate::db::models::ContactRow;
use crate::db::ports::RecordMapper;

pub struct ContactRowMapper;

impl RecordMapper<ContactRow> for ContactRowMapper {
    fn kind(&self) -> EntityKind {
        EntityKind::Contact
    }

    fn field(&self, row: &ContactRow, field: RecordField) -> Option<FieldValue> {
        match field {
            RecordField::Id => Some(FieldValue::Integer(row.id)),
            RecordField::NameRawContactId => Some(row.name_raw_contact_id.into()),
            _ => None,
        }
    }
}
