//! Opaque document identifiers
//!
//! A `DocumentId` is assigned by the store on insert and only ever leaves the
//! process as its canonical string. Nothing converts a string back into an
//! identifier.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Store-assigned, immutable identifier of one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    ObjectId(ObjectId),
    Uuid(Uuid),
    /// Any other identifier a store hands back, kept as its textual form
    Native(String),
}

impl DocumentId {
    pub(crate) fn native(token: impl Into<String>) -> Self {
        Self(Repr::Native(token.into()))
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(Repr::ObjectId(oid))
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(Repr::Uuid(uuid))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::ObjectId(oid) => write!(f, "{}", oid.to_hex()),
            Repr::Uuid(uuid) => write!(f, "{}", uuid.hyphenated()),
            Repr::Native(token) => f.write_str(token),
        }
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
