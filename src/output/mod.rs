pub mod formatter;

pub use formatter::{
    format_age, format_entry_detail, format_score, format_score_for_display,
    format_standings_table, format_tsv, should_use_colors, DEFAULT_DECIMALS, DEFAULT_FALLBACK,
};
