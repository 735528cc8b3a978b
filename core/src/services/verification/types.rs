//! Types for verification service results

/// Result of a verification code request
///
/// Both outcomes are acknowledged identically to the caller so the
/// response does not reveal whether an identity is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A code was generated, persisted, and handed to the messenger
    Sent,
    /// The identity is not on the admin allowlist; nothing was stored or sent
    Ignored,
}

/// Result of a successful code submission
#[derive(Debug, Clone)]
pub struct SessionGrant {
    /// The verified identity the session was issued for
    pub identity: String,
    /// Signed session token authorizing subsequent admin requests
    pub token: String,
}
