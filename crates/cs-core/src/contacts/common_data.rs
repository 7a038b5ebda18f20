use serde::{Deserialize, Serialize};

use crate::scope::EntityTypeTag;

/// Which data-row label table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataKind {
    Phone,
    Email,
}

impl DataKind {
    /// Scope bucket this data kind is listed under.
    pub fn type_tag(self) -> EntityTypeTag {
        match self {
            DataKind::Phone => EntityTypeTag::Number,
            DataKind::Email => EntityTypeTag::Email,
        }
    }
}

/// Subtype column of a data row, parsed once where it is read.
///
/// The column is nominally an integer code, but it is stored as text and
/// some producers write free-form labels into it.
///
/// 数据行子类型：数字代码或（不规范写入的）自由文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtypeField {
    Absent,
    Code(i32),
    Text(String),
}

impl SubtypeField {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => SubtypeField::Absent,
            Some(raw) => match raw.parse::<i32>() {
                Ok(code) => SubtypeField::Code(code),
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(value = raw, "non-numeric subtype stored, using it as label");
                    SubtypeField::Text(raw.to_string())
                }
            },
        }
    }
}

/// Columns shared by phone and email rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonDataRecord {
    pub raw_contact_id: Option<i64>,
    pub data1: Option<String>,
    pub subtype: SubtypeField,
}

impl CommonDataRecord {
    pub fn new(raw_contact_id: Option<i64>, data1: Option<String>, subtype: SubtypeField) -> Self {
        Self {
            raw_contact_id,
            data1,
            subtype,
        }
    }
}
