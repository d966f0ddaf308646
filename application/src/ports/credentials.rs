//! Credential source port

/// Looks up API credentials by name at call time.
///
/// Implementations must treat an empty value as absent.
pub trait CredentialSource: Send + Sync {
    fn credential(&self, name: &str) -> Option<String>;
}
