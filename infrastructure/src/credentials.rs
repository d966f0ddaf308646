//! Environment-backed credential source.

use miniperplx_application::CredentialSource;

/// Reads credentials from the process environment on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialSource;

impl CredentialSource for EnvCredentialSource {
    fn credential(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable() {
        assert_eq!(
            EnvCredentialSource.credential("MINIPERPLX_TEST_SURELY_UNSET_VARIABLE"),
            None
        );
    }

    #[test]
    fn test_reads_path() {
        // PATH is set in any environment that can run the test suite
        assert!(EnvCredentialSource.credential("PATH").is_some());
    }
}
