use super::aggregate::aggregate;
use super::clamp::clamp_score;
use super::types::Score;

/// Where a resolved score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    /// Hand-entered overall value took precedence.
    Manual,
    /// Derived from judged criteria.
    Aggregate { weighted: bool, used: usize },
    /// Raw overall value, used because no criteria data was usable.
    Overall,
    /// Nothing usable anywhere in the record.
    Missing,
}

impl ScoreSource {
    pub fn describe(&self) -> String {
        match self {
            ScoreSource::Manual => "manual override".to_string(),
            ScoreSource::Aggregate { weighted, used } => {
                let noun = if *used == 1 { "criterion" } else { "criteria" };
                if *weighted {
                    format!("weighted sum of {} {}", used, noun)
                } else {
                    format!("mean of {} {}", used, noun)
                }
            }
            ScoreSource::Overall => "overall value".to_string(),
            ScoreSource::Missing => "no usable data".to_string(),
        }
    }
}

/// A resolved score together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub value: Option<f64>,
    pub source: ScoreSource,
}

/// Resolve the single authoritative score for a record.
///
/// Precedence: a usable manual override wins outright, then the criteria
/// aggregate, then the raw overall value. A manual override that carries no
/// usable number does not block the chain; resolution continues as if the
/// flag were off. Returns `Missing` only when no tier yields a number.
pub fn resolve(score: &Score) -> Resolution {
    if score.use_manual_nilai {
        if let Some(value) = clamp_score(score.nilai.as_f64()) {
            return Resolution {
                value: Some(value),
                source: ScoreSource::Manual,
            };
        }
    }

    if let Some(agg) = aggregate(&score.details) {
        return Resolution {
            value: Some(agg.value),
            source: ScoreSource::Aggregate {
                weighted: agg.weighted,
                used: agg.used,
            },
        };
    }

    match clamp_score(score.nilai.as_f64()) {
        Some(value) => Resolution {
            value: Some(value),
            source: ScoreSource::Overall,
        },
        None => Resolution {
            value: None,
            source: ScoreSource::Missing,
        },
    }
}

/// Plain-value form of [`resolve`] for callers that only need the number.
pub fn resolve_score(score: Option<&Score>) -> Option<f64> {
    score.and_then(|score| resolve(score).value)
}
