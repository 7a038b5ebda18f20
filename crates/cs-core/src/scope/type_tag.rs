use serde::{Serialize, Serializer};
use std::fmt;

use super::ScopeError;

/// Entity type a scope bucket holds.
///
/// The set is closed: every dispatch on it is an exhaustive `match`, and the
/// only way to build one from a raw value is `TryFrom`, which rejects
/// anything outside the four known ordinals.
///
/// 作用域条目的实体类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityTypeTag {
    Group = 0,
    Contact = 1,
    Number = 2,
    Email = 3,
}

impl EntityTypeTag {
    /// All tags in enumeration order.
    pub const ALL: [EntityTypeTag; 4] = [
        EntityTypeTag::Group,
        EntityTypeTag::Contact,
        EntityTypeTag::Number,
        EntityTypeTag::Email,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityTypeTag::Group => "group",
            EntityTypeTag::Contact => "contact",
            EntityTypeTag::Number => "number",
            EntityTypeTag::Email => "email",
        }
    }
}

impl fmt::Display for EntityTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EntityTypeTag> for u8 {
    fn from(tag: EntityTypeTag) -> Self {
        tag.ordinal()
    }
}

impl TryFrom<i64> for EntityTypeTag {
    type Error = ScopeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EntityTypeTag::Group),
            1 => Ok(EntityTypeTag::Contact),
            2 => Ok(EntityTypeTag::Number),
            3 => Ok(EntityTypeTag::Email),
            other => Err(ScopeError::UnknownTypeTag(other)),
        }
    }
}

impl TryFrom<u8> for EntityTypeTag {
    type Error = ScopeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i32> for EntityTypeTag {
    type Error = ScopeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl Serialize for EntityTypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}
