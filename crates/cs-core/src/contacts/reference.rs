use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;
use url::Url;

use super::{EntityAddress, EntityKind};

/// Authority part of every reference URI.
pub const CONTACTS_AUTHORITY: &str = "contacts";

const SCHEME: &str = "content";

/// Opaque pointer into the record store's addressing scheme.
///
/// Rendered as `content://contacts/<kind>/<id>`. This crate only builds and
/// parses references; it never dereferences them.
///
/// 记录存储中实体的详情引用（只构造，不解引用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailReference {
    address: EntityAddress,
}

impl DetailReference {
    pub fn new(address: EntityAddress) -> Self {
        Self { address }
    }

    pub fn group(id: i64) -> Self {
        Self::new(EntityAddress::group(id))
    }

    pub fn contact(id: i64) -> Self {
        Self::new(EntityAddress::contact(id))
    }

    pub fn raw_contact(id: i64) -> Self {
        Self::new(EntityAddress::raw_contact(id))
    }

    pub fn address(&self) -> EntityAddress {
        self.address
    }

    pub fn kind(&self) -> EntityKind {
        self.address.kind
    }

    pub fn id(&self) -> i64 {
        self.address.id
    }
}

impl fmt::Display for DetailReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}/{}/{}",
            SCHEME,
            CONTACTS_AUTHORITY,
            self.address.kind.path(),
            self.address.id
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceParseError {
    #[error("not a valid URI: {0}")]
    InvalidUri(String),

    #[error("unexpected scheme: {0}")]
    UnexpectedScheme(String),

    #[error("unexpected authority: {0}")]
    UnexpectedAuthority(String),

    #[error("unknown entity path: {0}")]
    UnknownPath(String),

    #[error("invalid entity id: {0}")]
    InvalidId(String),
}

impl FromStr for DetailReference {
    type Err = ReferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s).map_err(|e| ReferenceParseError::InvalidUri(e.to_string()))?;

        if url.scheme() != SCHEME {
            return Err(ReferenceParseError::UnexpectedScheme(url.scheme().to_string()));
        }

        let authority = url.host_str().unwrap_or_default();
        if authority != CONTACTS_AUTHORITY {
            return Err(ReferenceParseError::UnexpectedAuthority(authority.to_string()));
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.collect())
            .unwrap_or_default();

        let (path, id) = match segments.as_slice() {
            [path, id] => (*path, *id),
            _ => return Err(ReferenceParseError::UnknownPath(url.path().to_string())),
        };

        let kind = EntityKind::from_path(path)
            .ok_or_else(|| ReferenceParseError::UnknownPath(path.to_string()))?;
        let id = id
            .parse::<i64>()
            .map_err(|_| ReferenceParseError::InvalidId(id.to_string()))?;

        Ok(Self::new(EntityAddress::new(kind, id)))
    }
}

impl Serialize for DetailReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_kind_path() {
        assert_eq!(
            DetailReference::group(9).to_string(),
            "content://contacts/groups/9"
        );
        assert_eq!(
            DetailReference::contact(3).to_string(),
            "content://contacts/contacts/3"
        );
        assert_eq!(
            DetailReference::raw_contact(7).to_string(),
            "content://contacts/raw_contacts/7"
        );
    }

    #[test]
    fn test_parse_accepts_rendered_reference() {
        let parsed: DetailReference = "content://contacts/data/42".parse().unwrap();
        assert_eq!(parsed.kind(), EntityKind::Data);
        assert_eq!(parsed.id(), 42);
        assert_eq!(parsed.to_string(), "content://contacts/data/42");
    }

    #[test]
    fn test_parse_rejects_foreign_references() {
        assert!(matches!(
            "https://contacts/groups/1".parse::<DetailReference>(),
            Err(ReferenceParseError::UnexpectedScheme(_))
        ));
        assert!(matches!(
            "content://media/groups/1".parse::<DetailReference>(),
            Err(ReferenceParseError::UnexpectedAuthority(_))
        ));
        assert!(matches!(
            "content://contacts/calls/1".parse::<DetailReference>(),
            Err(ReferenceParseError::UnknownPath(_))
        ));
        assert!(matches!(
            "content://contacts/groups/abc".parse::<DetailReference>(),
            Err(ReferenceParseError::InvalidId(_))
        ));
        assert!(matches!(
            "content://contacts/groups".parse::<DetailReference>(),
            Err(ReferenceParseError::UnknownPath(_))
        ));
        assert!(matches!(
            "not a uri".parse::<DetailReference>(),
            Err(ReferenceParseError::InvalidUri(_))
        ));
    }
}
