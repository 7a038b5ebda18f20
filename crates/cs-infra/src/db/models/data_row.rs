use crate::db::schema::data;
use diesel::prelude::*;

/// One row of the generic data table. Phone numbers and email addresses
/// share it; `data1` holds the value and `data2` the subtype.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DataRow {
    pub id: i64,
    pub raw_contact_id: i64,
    pub mimetype: String,
    pub data1: Option<String>,
    pub data2: Option<String>,
}
