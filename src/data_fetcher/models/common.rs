use serde::{Deserialize, Serialize};

/// Nested `{ "name": ... }` object used by the upstream API for teams and players.
/// Every other field of the object (ids, crests, nationality, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
