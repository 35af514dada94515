pub mod critique;
pub mod search;

pub use critique::{stamp_request_time, system_prompt, user_prompt};
pub use search::search_prompt;

/// Company wording used when the person did not name an employer.
pub const DEFAULT_COMPANY: &str = "their current company";
