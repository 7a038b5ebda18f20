use crate::db::schema::groups;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = groups)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GroupRow {
    pub id: i64,
    pub title: Option<String>,
    pub res_package: Option<String>,
    pub title_res: Option<String>,
    pub account_name: Option<String>,
    pub summary_count: Option<i64>,
    pub deleted: bool,
    pub auto_add: bool,
    pub favorites: bool,
    pub group_is_read_only: bool,
}
