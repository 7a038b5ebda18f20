use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;

use cs_core::contacts::{EntityAddress, EntityKind};
use cs_core::ports::{Record, RecordField, RecordStoreError, RecordStorePort, RowFilter};

use crate::db::mappers::{ContactRowMapper, DataRowMapper, GroupRowMapper, RawContactRowMapper};
use crate::db::models::{ContactRow, DataRow, GroupRow, RawContactRow};
use crate::db::ports::{DbExecutor, RecordMapper};
use crate::db::schema::{contacts, data, groups, raw_contacts};

/// Read-only record store over the SQLite contact database.
pub struct DieselRecordStore<E> {
    executor: E,
}

impl<E> DieselRecordStore<E>
where
    E: DbExecutor,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    fn find_group(&self, group_id: i64, filter: RowFilter) -> anyhow::Result<Option<GroupRow>> {
        self.executor.run(|conn| {
            let query = groups::table
                .filter(groups::id.eq(group_id))
                .select(GroupRow::as_select());
            let row = match filter {
                RowFilter::Any => query.first::<GroupRow>(conn).optional()?,
                RowFilter::LiveOnly => query
                    .filter(groups::deleted.eq(false))
                    .first::<GroupRow>(conn)
                    .optional()?,
            };
            Ok(row)
        })
    }

    fn find_contact(&self, contact_id: i64) -> anyhow::Result<Option<ContactRow>> {
        self.executor.run(|conn| {
            let row = contacts::table
                .filter(contacts::id.eq(contact_id))
                .select(ContactRow::as_select())
                .first::<ContactRow>(conn)
                .optional()?;
            Ok(row)
        })
    }

    fn find_raw_contact(
        &self,
        raw_contact_id: i64,
        filter: RowFilter,
    ) -> anyhow::Result<Option<RawContactRow>> {
        self.executor.run(|conn| {
            let query = raw_contacts::table
                .filter(raw_contacts::id.eq(raw_contact_id))
                .select(RawContactRow::as_select());
            let row = match filter {
                RowFilter::Any => query.first::<RawContactRow>(conn).optional()?,
                RowFilter::LiveOnly => query
                    .filter(raw_contacts::deleted.eq(false))
                    .first::<RawContactRow>(conn)
                    .optional()?,
            };
            Ok(row)
        })
    }

    fn find_data(&self, data_id: i64) -> anyhow::Result<Option<DataRow>> {
        self.executor.run(|conn| {
            let row = data::table
                .filter(data::id.eq(data_id))
                .select(DataRow::as_select())
                .first::<DataRow>(conn)
                .optional()?;
            Ok(row)
        })
    }

    fn load_pickable_groups(&self) -> anyhow::Result<Vec<GroupRow>> {
        self.executor.run(|conn| {
            let rows = groups::table
                .filter(groups::deleted.eq(false))
                .filter(groups::auto_add.eq(false))
                .filter(groups::favorites.eq(false))
                .filter(groups::group_is_read_only.eq(false))
                .select(GroupRow::as_select())
                .load::<GroupRow>(conn)?;
            Ok(rows)
        })
    }
}

fn storage_error(err: anyhow::Error) -> RecordStoreError {
    RecordStoreError::Storage(format!("{err:#}"))
}

fn project<R, M>(
    mapper: &M,
    row: Option<R>,
    fields: &[RecordField],
) -> Result<Option<Record>, RecordStoreError>
where
    M: RecordMapper<R>,
{
    row.map(|row| mapper.to_record(&row, fields)).transpose()
}

#[async_trait]
impl<E> RecordStorePort for DieselRecordStore<E>
where
    E: DbExecutor,
{
    async fn lookup(
        &self,
        address: &EntityAddress,
        fields: &[RecordField],
        filter: RowFilter,
    ) -> Result<Option<Record>, RecordStoreError> {
        let record = match address.kind {
            EntityKind::Group => {
                let row = self.find_group(address.id, filter).map_err(storage_error)?;
                project(&GroupRowMapper, row, fields)?
            }
            EntityKind::Contact => {
                let row = self.find_contact(address.id).map_err(storage_error)?;
                project(&ContactRowMapper, row, fields)?
            }
            EntityKind::RawContact => {
                let row = self
                    .find_raw_contact(address.id, filter)
                    .map_err(storage_error)?;
                project(&RawContactRowMapper, row, fields)?
            }
            EntityKind::Data => {
                let row = self.find_data(address.id).map_err(storage_error)?;
                project(&DataRowMapper, row, fields)?
            }
        };

        debug!(
            "lookup {} ({:?}) -> {}",
            address,
            filter,
            if record.is_some() { "found" } else { "not found" }
        );
        Ok(record)
    }

    async fn list_pickable_groups(
        &self,
        fields: &[RecordField],
    ) -> Result<Vec<Record>, RecordStoreError> {
        let rows = self.load_pickable_groups().map_err(storage_error)?;
        debug!("loaded {} pickable groups", rows.len());

        rows.iter()
            .map(|row| GroupRowMapper.to_record(row, fields))
            .collect()
    }
}
