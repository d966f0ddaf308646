//! Resolve Group Config use case.
//!
//! Pure lookup into the static group table. Never fails and never awaits;
//! the only time-dependent input is the date read from the [`Clock`].

use crate::ports::clock::Clock;
use miniperplx_domain::{GroupConfig, SearchGroupId};
use std::sync::Arc;

#[derive(Clone)]
pub struct ResolveGroupConfigUseCase {
    clock: Arc<dyn Clock>,
}

impl ResolveGroupConfigUseCase {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn execute(&self, group: SearchGroupId) -> GroupConfig {
        GroupConfig::resolve(group, self.clock.today())
    }

    /// Resolve the default group (`web`).
    pub fn execute_default(&self) -> GroupConfig {
        self.execute(SearchGroupId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use chrono::NaiveDate;
    use miniperplx_domain::ToolName;

    fn use_case() -> ResolveGroupConfigUseCase {
        let day = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        ResolveGroupConfigUseCase::new(Arc::new(FixedClock(day)))
    }

    #[test]
    fn test_every_group_resolves() {
        let use_case = use_case();
        for group in SearchGroupId::ALL {
            let config = use_case.execute(group);
            assert!(!config.system_prompt.is_empty());
            assert!(config.tools.iter().all(|t| ToolName::ALL.contains(t)));
        }
    }

    #[test]
    fn test_default_is_web() {
        let use_case = use_case();
        assert_eq!(
            use_case.execute_default(),
            use_case.execute(SearchGroupId::Web)
        );
    }

    #[test]
    fn test_writing_has_no_tools() {
        assert!(use_case().execute(SearchGroupId::Writing).tools.is_empty());
    }

    #[test]
    fn test_prompt_uses_injected_clock() {
        let config = use_case().execute(SearchGroupId::Shopping);
        assert!(config.system_prompt.contains("Thu, Oct 15, 2026"));
    }
}
