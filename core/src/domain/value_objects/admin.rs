//! Admin allow-list value object.

use std::collections::HashSet;

/// The configured set of identities allowed to hold admin sessions
///
/// Membership is an exact string match: `Admin@Example.com` and
/// `admin@example.com` are different identities. The set comes from
/// configuration at startup and never changes at runtime; there is no
/// admin table and no management API.
#[derive(Debug, Clone)]
pub struct AdminAllowlist {
    identities: HashSet<String>,
}

impl AdminAllowlist {
    /// Builds the allow-list from configured identities
    pub fn new(identities: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            identities: identities.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks whether an identity is an admin
    pub fn contains(&self, identity: &str) -> bool {
        self.identities.contains(identity)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
