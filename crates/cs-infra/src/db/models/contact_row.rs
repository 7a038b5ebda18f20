use crate::db::schema::contacts;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactRow {
    pub id: i64,
    pub name_raw_contact_id: Option<i64>,
}
