use super::{EntityTypeTag, ScopeError};

/// Decoded per-application scope.
///
/// Holds one ordered id list per [`EntityTypeTag`]. Order is insertion order
/// from the upstream store and is carried into the view model unchanged.
///
/// 解码后的应用作用域（每种类型一个有序 id 列表）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeState {
    buckets: [Vec<i64>; EntityTypeTag::COUNT],
}

impl ScopeState {
    /// State with no entries of any type. This is what absent or corrupt
    /// input decodes to.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from `(tag, ids)` pairs. A tag may appear at most once.
    pub fn from_buckets<I>(buckets: I) -> Result<Self, ScopeError>
    where
        I: IntoIterator<Item = (EntityTypeTag, Vec<i64>)>,
    {
        let mut state = Self::empty();
        let mut seen = [false; EntityTypeTag::COUNT];
        for (tag, ids) in buckets {
            if seen[tag.index()] {
                return Err(ScopeError::DuplicateBucket(tag.ordinal()));
            }
            seen[tag.index()] = true;
            state.buckets[tag.index()] = ids;
        }
        Ok(state)
    }

    pub fn with_ids(mut self, tag: EntityTypeTag, ids: Vec<i64>) -> Self {
        self.buckets[tag.index()] = ids;
        self
    }

    pub fn ids(&self, tag: EntityTypeTag) -> &[i64] {
        &self.buckets[tag.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Total number of ids across all types.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}
