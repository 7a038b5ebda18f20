use serde::Serialize;

use super::EntityTypeTag;
use crate::contacts::DetailReference;

/// One resolved scope item as shown in the permission UI.
///
/// `title`, `summary` and `detail` are best-effort: they are `None` when the
/// backing record is gone or lacks the field. The entry itself is always
/// emitted because the id is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeEntry {
    #[serde(rename = "type")]
    pub tag: EntityTypeTag,
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "detail_uri")]
    pub detail: Option<DetailReference>,
}

impl ScopeEntry {
    pub fn new(
        tag: EntityTypeTag,
        id: i64,
        title: Option<String>,
        summary: Option<String>,
        detail: Option<DetailReference>,
    ) -> Self {
        Self {
            tag,
            id,
            title,
            summary,
            detail,
        }
    }

    /// Entry for an id whose backing record could not be found.
    pub fn unresolved(tag: EntityTypeTag, id: i64) -> Self {
        Self::new(tag, id, None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_external_field_names() {
        let entry = ScopeEntry::new(
            EntityTypeTag::Number,
            42,
            Some("Ann".to_string()),
            Some("Mobile: 555-1234".to_string()),
            Some(DetailReference::raw_contact(7)),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], 2);
        assert_eq!(json["id"], 42);
        assert_eq!(json["title"], "Ann");
        assert_eq!(json["summary"], "Mobile: 555-1234");
        assert_eq!(json["detail_uri"], "content://contacts/raw_contacts/7");
    }

    #[test]
    fn test_unresolved_entry_has_no_optional_fields() {
        let entry = ScopeEntry::unresolved(EntityTypeTag::Group, 9);
        assert_eq!(entry.tag, EntityTypeTag::Group);
        assert_eq!(entry.id, 9);
        assert!(entry.title.is_none());
        assert!(entry.summary.is_none());
        assert!(entry.detail.is_none());
    }
}
