use std::io::IsTerminal;

use chrono::Duration;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::fetch::RankedEntry;
use crate::score::ScoreValue;

/// Placeholder shown for records without a usable score.
pub const DEFAULT_FALLBACK: &str = "-";
/// Decimal digits for non-whole scores.
pub const DEFAULT_DECIMALS: u8 = 1;

/// Round to `decimals` digits; whole values render without a decimal point
/// (e.g. "85", not "85.0").
fn render_number(value: f64, decimals: u8) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.*}", decimals as usize, rounded)
    }
}

/// Format a raw score value for display.
///
/// Absent values, empty strings, and the literal strings "null"/"undefined"
/// (trimmed, any case) become the fallback text. Numbers and numeric strings
/// are rounded; any other text passes through trimmed, so already-formatted
/// inputs survive unchanged.
pub fn format_score_for_display(value: &ScoreValue, fallback: &str, decimals: u8) -> String {
    match value {
        ScoreValue::Number(n) if n.is_finite() => render_number(*n, decimals),
        ScoreValue::Number(_) => fallback.to_string(),
        ScoreValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty()
                || trimmed.eq_ignore_ascii_case("null")
                || trimmed.eq_ignore_ascii_case("undefined")
            {
                return fallback.to_string();
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => render_number(n, decimals),
                _ => trimmed.to_string(),
            }
        }
        _ => fallback.to_string(),
    }
}

/// Format an already-resolved score.
pub fn format_score(value: Option<f64>, fallback: &str, decimals: u8) -> String {
    match value {
        Some(value) => render_number(value, decimals),
        None => fallback.to_string(),
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a team label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format standings as a table with columns: Rank, Score, Team, Event
/// Rank column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 6 chars wide (fits "100.0")
pub fn format_standings_table(
    entries: &[RankedEntry],
    fallback: &str,
    decimals: u8,
    use_colors: bool,
) -> String {
    if entries.is_empty() {
        return "No score records found.".to_string();
    }

    let term_width = get_terminal_width();

    let rank_width = 3;
    let score_width = 6;
    let separator = "  ";

    entries
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            // 1-based rank, right-aligned with trailing dot
            let rank_str = format!("{:>2}.", idx + 1);
            let score_str = format_score(item.resolution.value, fallback, decimals);
            let score_padded = format!("{:>width$}", score_str, width = score_width);

            let event_len = item.entry.event.chars().count();
            let fixed_width = rank_width + 1 + score_width + separator.len() * 2 + event_len;

            let label = item.entry.label();
            let label = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_label(&label, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_label(&label, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                label
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    label,
                    separator,
                    item.entry.event.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str, score_padded, separator, label, separator, item.entry.event
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single record with detailed multi-line output (for verbose mode)
pub fn format_entry_detail(
    item: &RankedEntry,
    warnings: &[String],
    fallback: &str,
    decimals: u8,
    use_colors: bool,
) -> String {
    let entry = &item.entry;
    let score_str = format_score(item.resolution.value, fallback, decimals);
    let age = entry
        .age()
        .map(format_age)
        .unwrap_or_else(|| fallback.to_string());

    let mut lines = Vec::new();
    if use_colors {
        lines.push(format!("{}", entry.label().bold()));
        lines.push(format!("  Event: {}", entry.event.cyan()));
        lines.push(format!(
            "  Score: {} ({})",
            score_str.bold(),
            item.resolution.source.describe()
        ));
    } else {
        lines.push(entry.label());
        lines.push(format!("  Event: {}", entry.event));
        lines.push(format!(
            "  Score: {} ({})",
            score_str,
            item.resolution.source.describe()
        ));
    }

    if !entry.score.details.is_empty() {
        lines.push("  Criteria:".to_string());
        for detail in &entry.score.details {
            let kriteria = detail.kriteria.as_deref().unwrap_or("(unnamed)");
            let nilai = format_score_for_display(&detail.nilai, fallback, decimals);
            match format_weight(&detail.bobot) {
                Some(bobot) => {
                    lines.push(format!("    {}: {} (weight {})", kriteria, nilai, bobot))
                }
                None => lines.push(format!("    {}: {}", kriteria, nilai)),
            }
        }
    }

    lines.push(format!("  Updated: {}", age));

    for warning in warnings {
        if use_colors {
            lines.push(format!("  Warning: {}", warning.yellow()));
        } else {
            lines.push(format!("  Warning: {}", warning));
        }
    }

    lines.join("\n")
}

/// Render a criterion weight, or None when the criterion has none.
fn format_weight(bobot: &ScoreValue) -> Option<String> {
    bobot.as_f64().map(|b| format!("{}", b))
}

/// Format standings as tab-separated values for scripting
/// Columns: score, team, division, event (no headers, no colors)
pub fn format_tsv(entries: &[RankedEntry], fallback: &str, decimals: u8) -> String {
    if entries.is_empty() {
        return String::new();
    }

    entries
        .iter()
        .map(|item| {
            format!(
                "{}\t{}\t{}\t{}",
                format_score(item.resolution.value, fallback, decimals),
                item.entry.tim,
                item.entry.jenjang.as_deref().unwrap_or(""),
                item.entry.event
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
