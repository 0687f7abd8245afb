pub mod aggregate;
pub mod clamp;
pub mod lint;
pub mod resolve;
pub mod types;

pub use aggregate::aggregate_details;
pub use clamp::{clamp, clamp_score, clamp_weight};
pub use lint::lint_score;
pub use resolve::{resolve, resolve_score, Resolution, ScoreSource};
pub use types::{Score, ScoreDetail, ScoreValue};
