use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::api::{ApiClient, TeamEntry};
use crate::config::Config;
use crate::score::{resolve, Resolution};

/// A score record with its resolution, ready for display.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub entry: TeamEntry,
    pub resolution: Resolution,
}

/// Fetch score records for all configured events, deduplicate, resolve each
/// record's score, and sort into standings order.
///
/// Events are fetched concurrently. A failing event is reported on stderr and
/// the rest proceed; only all events failing is an error.
pub async fn fetch_and_rank(
    client: &ApiClient,
    config: &Config,
    verbose: bool,
) -> Result<Vec<RankedEntry>> {
    let mut futures = FuturesUnordered::new();
    for event_config in &config.events {
        let slug = event_config.slug.clone();
        let name = event_config.name.clone();
        futures.push(async move {
            let result = client.fetch_event_scores(&slug).await;
            (name, slug, result)
        });
    }

    let mut all_entries = Vec::new();
    let mut any_succeeded = false;

    while let Some((name, slug, result)) = futures.next().await {
        match result {
            Ok(entries) => {
                if verbose {
                    eprintln!(
                        "  Found {} records for {}",
                        entries.len(),
                        name.as_deref().unwrap_or(&slug)
                    );
                }
                all_entries.extend(entries);
                any_succeeded = true;
            }
            Err(e) => {
                eprintln!("Event failed: {} - {}", name.as_deref().unwrap_or(&slug), e);
            }
        }
    }

    if !any_succeeded && !config.events.is_empty() {
        anyhow::bail!("All events failed. Check your network connection and API settings.");
    }

    // Deduplicate by (event, id): overlapping event configs can return the
    // same record twice.
    let mut seen = HashSet::new();
    let unique_entries: Vec<_> = all_entries
        .into_iter()
        .filter(|entry| seen.insert((entry.event.clone(), entry.id)))
        .collect();

    if verbose {
        eprintln!("After deduplication: {} records", unique_entries.len());
    }

    let mut ranked: Vec<RankedEntry> = unique_entries
        .into_iter()
        .map(|entry| {
            let resolution = resolve(&entry.score);
            RankedEntry { entry, resolution }
        })
        .collect();

    ranked.sort_by(rank_order);
    Ok(ranked)
}

/// Standings order: resolved score descending, records without a usable score
/// last, ties broken by team name ascending.
pub fn rank_order(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    match (a.resolution.value, b.resolution.value) {
        (Some(score_a), Some(score_b)) => score_b
            .partial_cmp(&score_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.entry.tim.cmp(&b.entry.tim)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.entry.tim.cmp(&b.entry.tim),
    }
}
