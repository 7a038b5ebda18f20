pub mod contact_row;
pub mod data_row;
pub mod group_row;
pub mod raw_contact_row;

pub use contact_row::ContactRow;
pub use data_row::DataRow;
pub use group_row::GroupRow;
pub use raw_contact_row::RawContactRow;
