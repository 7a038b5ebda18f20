mod contact_mapper;
mod data_mapper;
mod group_mapper;
mod raw_contact_mapper;

pub use contact_mapper::ContactRowMapper;
pub use data_mapper::DataRowMapper;
pub use group_mapper::GroupRowMapper;
pub use raw_contact_mapper::RawContactRowMapper;
