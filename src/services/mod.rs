pub mod cancellation;
pub mod llm_service;
pub mod retry;

pub use cancellation::CancellationToken;
pub use llm_service::{GenerationParams, LlmService, TextGenerator};
pub use retry::{Attempt, RetryPolicy};
