use log::{debug, log, Level};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cs_core::ports::ScopeStateDecoderPort;
use cs_core::{AppId, EntityTypeTag, ScopeError, ScopeState};

/// Current blob format version.
pub const SCOPE_BLOB_VERSION: u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ScopeBlob {
    version: u8,
    buckets: Vec<(u8, Vec<i64>)>,
}

#[derive(Debug, Error)]
pub enum ScopeBlobError {
    /// No stored state. Normal for an application that never had a scope.
    #[error("scope blob is empty")]
    Empty,

    #[error("malformed scope blob: {0}")]
    Malformed(#[from] bincode::Error),

    #[error("unsupported scope blob version {0}")]
    UnsupportedVersion(u8),

    #[error(transparent)]
    Invalid(#[from] ScopeError),
}

impl ScopeBlobError {
    /// Level to log a discarded blob at: only real corruption is a warning.
    pub fn log_level(&self) -> Level {
        match self {
            ScopeBlobError::Empty => Level::Debug,
            _ => Level::Warn,
        }
    }
}

/// Strict decode. Most callers want [`BincodeScopeStateDecoder`], which
/// turns every failure into an empty state.
pub fn decode_scope_state(blob: &[u8]) -> Result<ScopeState, ScopeBlobError> {
    if blob.is_empty() {
        return Err(ScopeBlobError::Empty);
    }

    let decoded: ScopeBlob = bincode::deserialize(blob)?;
    if decoded.version != SCOPE_BLOB_VERSION {
        return Err(ScopeBlobError::UnsupportedVersion(decoded.version));
    }

    let buckets = decoded
        .buckets
        .into_iter()
        .map(|(tag, ids)| EntityTypeTag::try_from(tag).map(|tag| (tag, ids)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScopeState::from_buckets(buckets)?)
}

/// Encode `state` in the current blob format. Empty buckets are omitted.
pub fn encode_scope_state(state: &ScopeState) -> anyhow::Result<Vec<u8>> {
    let blob = ScopeBlob {
        version: SCOPE_BLOB_VERSION,
        buckets: EntityTypeTag::ALL
            .iter()
            .filter(|tag| !state.ids(**tag).is_empty())
            .map(|tag| (tag.ordinal(), state.ids(*tag).to_vec()))
            .collect(),
    };
    Ok(bincode::serialize(&blob)?)
}

/// Lenient decoder used on the read path.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeScopeStateDecoder;

impl BincodeScopeStateDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ScopeStateDecoderPort for BincodeScopeStateDecoder {
    fn decode(&self, blob: &[u8], app: &AppId) -> ScopeState {
        match decode_scope_state(blob) {
            Ok(state) => {
                debug!("decoded scope for {}: {} entries", app, state.len());
                state
            }
            Err(e) => {
                log!(e.log_level(), "discarding scope state for {}: {}", app, e);
                ScopeState::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppId {
        AppId::new("com.example.dialer")
    }

    #[test]
    fn test_encoded_state_decodes_back_in_order() {
        let state = ScopeState::empty()
            .with_ids(EntityTypeTag::Number, vec![42, 7, 13])
            .with_ids(EntityTypeTag::Group, vec![5]);

        let blob = encode_scope_state(&state).unwrap();
        let decoded = BincodeScopeStateDecoder.decode(&blob, &app());

        assert_eq!(decoded.ids(EntityTypeTag::Number), &[42, 7, 13]);
        assert_eq!(decoded.ids(EntityTypeTag::Group), &[5]);
        assert!(decoded.ids(EntityTypeTag::Email).is_empty());
    }

    #[test]
    fn test_empty_and_garbage_blobs_decode_to_empty_state() {
        assert!(BincodeScopeStateDecoder.decode(&[], &app()).is_empty());
        assert!(BincodeScopeStateDecoder.decode(&[0xff, 0x01], &app()).is_empty());
    }

    #[test]
    fn test_missing_state_is_not_a_warning() {
        let empty = decode_scope_state(&[]).unwrap_err();
        let garbage = decode_scope_state(&[0xff, 0x01]).unwrap_err();

        assert!(matches!(empty, ScopeBlobError::Empty));
        assert_eq!(empty.log_level(), Level::Debug);
        assert_eq!(garbage.log_level(), Level::Warn);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let blob = bincode::serialize(&ScopeBlob {
            version: SCOPE_BLOB_VERSION,
            buckets: vec![(1, vec![3]), (9, vec![4])],
        })
        .unwrap();

        assert!(matches!(
            decode_scope_state(&blob),
            Err(ScopeBlobError::Invalid(ScopeError::UnknownTypeTag(9)))
        ));
        assert!(BincodeScopeStateDecoder.decode(&blob, &app()).is_empty());
    }

    #[test]
    fn test_duplicate_bucket_is_rejected() {
        let blob = bincode::serialize(&ScopeBlob {
            version: SCOPE_BLOB_VERSION,
            buckets: vec![(2, vec![1]), (2, vec![2])],
        })
        .unwrap();

        assert!(matches!(
            decode_scope_state(&blob),
            Err(ScopeBlobError::Invalid(ScopeError::DuplicateBucket(2)))
        ));
    }

    #[test]
    fn test_future_version_is_rejected() {
        let blob = bincode::serialize(&ScopeBlob {
            version: SCOPE_BLOB_VERSION + 1,
            buckets: vec![],
        })
        .unwrap();

        assert!(matches!(
            decode_scope_state(&blob),
            Err(ScopeBlobError::UnsupportedVersion(2))
        ));
    }
}
