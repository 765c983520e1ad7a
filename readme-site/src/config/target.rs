//! The owner scope whose repositories are fetched.

/// Whether the owner scope is an organization or a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    /// Repositories owned by an organization.
    Organization,
    /// Repositories owned by a user account.
    User,
}

/// Organization or user whose public repositories are discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    /// Organization name or user login.
    pub owner: String,

    /// How `owner` is interpreted.
    pub kind: OwnerKind,
}

impl FetchTarget {
    /// Creates a target for an organization.
    pub fn organization(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            kind: OwnerKind::Organization,
        }
    }

    /// Creates a target for a user account.
    pub fn user(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            kind: OwnerKind::User,
        }
    }

    /// Returns true for user-owned targets.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.kind == OwnerKind::User
    }
}
