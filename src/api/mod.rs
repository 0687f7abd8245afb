pub mod client;
pub mod types;

pub use client::{create_client, ApiClient};
pub use types::{ScoresResponse, TeamEntry};
