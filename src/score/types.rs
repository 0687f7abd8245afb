use serde::{Deserialize, Deserializer};

/// A numeric field as the league API actually sends it: a number, a string
/// that may or may not contain a number, or nothing at all. Absence is never
/// zero.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
    /// JSON null, or the field was missing entirely.
    #[default]
    Absent,
    /// Any other JSON shape. Treated the same as absent.
    Other(serde_json::Value),
}

impl ScoreValue {
    /// Coerce to a number. Strings are trimmed and parsed; NaN and infinite
    /// values count as absent, as does anything non-numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScoreValue::Number(n) if n.is_finite() => Some(*n),
            ScoreValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ScoreValue::Absent)
    }
}

impl From<f64> for ScoreValue {
    fn from(n: f64) -> Self {
        ScoreValue::Number(n)
    }
}

impl From<&str> for ScoreValue {
    fn from(s: &str) -> Self {
        ScoreValue::Text(s.to_string())
    }
}

/// One judged criterion within a score record.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ScoreDetail {
    /// Criterion label, e.g. "PBB Murni" or "Variasi Formasi".
    #[serde(default)]
    pub kriteria: Option<String>,
    /// Raw value, expected range 0-100.
    #[serde(default)]
    pub nilai: ScoreValue,
    /// Weight, expected range 0-1. Optional: a record may mix weighted and
    /// unweighted criteria.
    #[serde(default)]
    pub bobot: ScoreValue,
}

/// One team's score for one event/category.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Score {
    /// Manual/overall value.
    #[serde(default)]
    pub nilai: ScoreValue,
    /// When true, `nilai` was hand-entered and takes precedence over the
    /// criteria in `details`.
    #[serde(default, rename = "useManualNilai", deserialize_with = "null_as_false")]
    pub use_manual_nilai: bool,
    /// Per-criterion entries. A JSON null deserializes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub details: Vec<ScoreDetail>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ScoreDetail>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ScoreDetail>>::deserialize(deserializer)?.unwrap_or_default())
}
