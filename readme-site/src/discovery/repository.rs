//! Discovered repository information.

use serde::{Deserialize, Serialize};

/// A repository found while listing the target's repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name, unique within the owner.
    pub name: String,
}

impl RepositoryRecord {
    /// Creates a record for the named repository.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
