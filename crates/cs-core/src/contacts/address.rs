use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of row in the contact record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Group,
    Contact,
    RawContact,
    Data,
}

impl EntityKind {
    /// Path segment used in reference URIs.
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Group => "groups",
            EntityKind::Contact => "contacts",
            EntityKind::RawContact => "raw_contacts",
            EntityKind::Data => "data",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "groups" => Some(EntityKind::Group),
            "contacts" => Some(EntityKind::Contact),
            "raw_contacts" => Some(EntityKind::RawContact),
            "data" => Some(EntityKind::Data),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A single row in the record store, addressed by kind and numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityAddress {
    pub kind: EntityKind,
    pub id: i64,
}

impl EntityAddress {
    pub fn new(kind: EntityKind, id: i64) -> Self {
        Self { kind, id }
    }

    pub fn group(id: i64) -> Self {
        Self::new(EntityKind::Group, id)
    }

    pub fn contact(id: i64) -> Self {
        Self::new(EntityKind::Contact, id)
    }

    pub fn raw_contact(id: i64) -> Self {
        Self::new(EntityKind::RawContact, id)
    }

    pub fn data(id: i64) -> Self {
        Self::new(EntityKind::Data, id)
    }
}

impl fmt::Display for EntityAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}
