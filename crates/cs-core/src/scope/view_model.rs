use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use super::{EntityTypeTag, ScopeEntry};

/// Keyed view model handed to the permission UI.
///
/// Maps each entity type to its resolved entries in scope order. A type with
/// no entries has no key: empty lists are never stored.
///
/// 权限界面使用的视图模型（空列表不会出现）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopesViewModel {
    sections: BTreeMap<EntityTypeTag, Vec<ScopeEntry>>,
}

impl ScopesViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the entries for `tag`. An empty list leaves the tag absent.
    pub fn insert(&mut self, tag: EntityTypeTag, entries: Vec<ScopeEntry>) {
        if entries.is_empty() {
            self.sections.remove(&tag);
        } else {
            self.sections.insert(tag, entries);
        }
    }

    pub fn get(&self, tag: EntityTypeTag) -> Option<&[ScopeEntry]> {
        self.sections.get(&tag).map(Vec::as_slice)
    }

    pub fn tags(&self) -> impl Iterator<Item = EntityTypeTag> + '_ {
        self.sections.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityTypeTag, &[ScopeEntry])> + '_ {
        self.sections.iter().map(|(tag, list)| (*tag, list.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }
}

/// Keys are the tag ordinal rendered as text (`"0"`..`"3"`).
impl Serialize for ScopesViewModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (tag, entries) in &self.sections {
            map.serialize_entry(&tag.ordinal().to_string(), entries)?;
        }
        map.end()
    }
}
