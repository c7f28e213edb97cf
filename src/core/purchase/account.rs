// Opaque account identifier.
//
// Purpose
// - Identify the purchasing account towards the payment and reservation sinks.
//
// Boundaries
// - This crate never validates or generates account ids in the core; the
//   shell (or whatever session collaborator sits in front of the handler)
//   provisions them, and the core passes them through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
