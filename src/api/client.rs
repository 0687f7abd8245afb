use anyhow::{anyhow, Context, Result};
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use super::types::{ScoresResponse, TeamEntry};
use crate::config::ApiConfig;

/// Authenticated client for the league REST API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Build the league API client from config. When `api.token_env` is set, the
/// bearer token is read from that environment variable; an unset or empty
/// variable means unauthenticated requests.
pub fn create_client(config: &ApiConfig) -> Result<ApiClient> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout()?)
        .user_agent(concat!("papan-skor/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")?;

    let token = config.token_env.as_deref().and_then(|var| {
        std::env::var(var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    });

    Ok(ApiClient {
        http,
        base_url: config.base_url.trim_end_matches('/').to_string(),
        token,
    })
}

impl ApiClient {
    /// Fetch all score records for one event.
    pub async fn fetch_event_scores(&self, slug: &str) -> Result<Vec<TeamEntry>> {
        let url = format!("{}/api/events/{}/scores", self.base_url, slug);

        // Retry strategy: exponential backoff with 3 attempts
        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(std::time::Duration::from_secs(5))
            .take(3);

        let response = Retry::spawn(retry_strategy, || async {
            let mut request = self.http.get(&url);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| anyhow!("League API unreachable: {}", e))?;

            match response.status().as_u16() {
                200..=299 => Ok(response),
                401 => Err(anyhow!(
                    "Authentication failed. Your league API token may be invalid or expired."
                )),
                403 | 429 => Err(anyhow!(
                    "League API rate limit exceeded or access denied. Wait a few minutes and try again."
                )),
                404 => Err(anyhow!(
                    "Event '{}' not found. Check the event slug in your config.",
                    slug
                )),
                status => Err(anyhow!("League API error: HTTP {}", status)),
            }
        })
        .await?;

        let body: ScoresResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse scores for event '{}'", slug))?;

        let mut entries = body.data;
        for entry in &mut entries {
            entry.event = slug.to_string();
        }
        Ok(entries)
    }
}
