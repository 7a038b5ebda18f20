//! Contact group helpers shared by the scope view model and the picker.

mod group_info;
mod list_pickable_groups;

pub(crate) use group_info::{group_info_from_record, GROUP_FIELDS};
pub use list_pickable_groups::{ListGroupsError, ListPickableGroups};
