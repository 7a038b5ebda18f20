use crate::db::schema::raw_contacts;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = raw_contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RawContactRow {
    pub id: i64,
    pub contact_id: Option<i64>,
    pub display_name_primary: Option<String>,
    pub deleted: bool,
}
