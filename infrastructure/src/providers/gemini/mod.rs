//! Google Gemini provider (structured output over REST)

mod adapter;
mod schema;
mod types;

pub use adapter::GeminiLlmGateway;
pub use schema::to_gemini_schema;
