use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::score::Score;

/// Envelope the league API wraps list responses in.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoresResponse {
    #[serde(default)]
    pub data: Vec<TeamEntry>,
}

/// One team's score record for one event, as returned by the league API.
/// The score fields (`nilai`, `useManualNilai`, `details`) sit at the top
/// level of the wire record.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub id: u64,
    /// Team name.
    pub tim: String,
    /// Division level, e.g. "SMP" or "SMA".
    #[serde(default)]
    pub jenjang: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub score: Score,
    /// Slug of the event this record was fetched for. Not part of the wire
    /// record; filled in by the client.
    #[serde(skip)]
    pub event: String,
}

impl TeamEntry {
    /// Time since the record was last updated, when the API says.
    pub fn age(&self) -> Option<chrono::Duration> {
        self.updated_at.map(|updated| Utc::now() - updated)
    }

    /// Short reference in the format "event-slug#Team Name".
    pub fn short_ref(&self) -> String {
        format!("{}#{}", self.event, self.tim)
    }

    /// Team name with the division in parentheses, when known.
    pub fn label(&self) -> String {
        match &self.jenjang {
            Some(jenjang) => format!("{} ({})", self.tim, jenjang),
            None => self.tim.clone(),
        }
    }

    /// URL of this record's page on the league site.
    pub fn page_url(&self, site_url: &str) -> String {
        format!("{}/penilaian/{}", site_url.trim_end_matches('/'), self.id)
    }
}
