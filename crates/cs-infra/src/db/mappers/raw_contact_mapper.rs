use cs_core::contacts::EntityKind;
use cs_core::ports::{FieldValue, RecordField};

use crate::db::models::RawContactRow;
use crate::db::ports::RecordMapper;

pub struct RawContactRowMapper;

impl RecordMapper<RawContactRow> for RawContactRowMapper {
    fn kind(&self) -> EntityKind {
        EntityKind::RawContact
    }

    fn field(&self, row: &RawContactRow, field: RecordField) -> Option<FieldValue> {
        match field {
            RecordField::Id => Some(FieldValue::Integer(row.id)),
            RecordField::DisplayNamePrimary => Some(row.display_name_primary.clone().into()),
            _ => None,
        }
    }
}
