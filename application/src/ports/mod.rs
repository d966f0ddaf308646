//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clock;
pub mod credentials;
pub mod llm_gateway;
pub mod page_fetcher;
pub mod speech_provider;
