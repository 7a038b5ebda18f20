use cs_core::contacts::EntityKind;
use cs_core::ports::{FieldValue, RecordField};

use crate::db::models::GroupRow;
use crate::db::ports::RecordMapper;

pub struct GroupRowMapper;

impl RecordMapper<GroupRow> for GroupRowMapper {
    fn kind(&self) -> EntityKind {
        EntityKind::Group
    }

    fn field(&self, row: &GroupRow, field: RecordField) -> Option<FieldValue> {
        let value = match field {
            RecordField::Id => FieldValue::Integer(row.id),
            RecordField::ResPackage => row.res_package.clone().into(),
            RecordField::TitleRes => row.title_res.clone().into(),
            RecordField::Title => row.title.clone().into(),
            RecordField::AccountName => row.account_name.clone().into(),
            RecordField::SummaryCount => row.summary_count.into(),
            _ => return None,
        };
        Some(value)
    }
}
