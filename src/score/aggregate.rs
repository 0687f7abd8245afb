use super::clamp::{clamp_score, clamp_weight};
use super::types::ScoreDetail;

/// Outcome of aggregating a detail set, with enough context for display code
/// to say how the number was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Aggregate {
    pub value: f64,
    pub weighted: bool,
    /// Entries that contributed to the result.
    pub used: usize,
}

pub(crate) fn aggregate(details: &[ScoreDetail]) -> Option<Aggregate> {
    // Normalize: an entry without a usable value is discarded outright.
    // Weights are clamped only when present; an absent weight stays absent.
    let normalized: Vec<(f64, Option<f64>)> = details
        .iter()
        .filter_map(|detail| {
            let nilai = clamp_score(detail.nilai.as_f64())?;
            Some((nilai, clamp_weight(detail.bobot.as_f64())))
        })
        .collect();

    if normalized.is_empty() {
        return None;
    }

    // One present weight switches the whole set to weighted mode.
    if normalized.iter().any(|(_, bobot)| bobot.is_some()) {
        let mut sum = 0.0;
        let mut used = 0;
        for (nilai, bobot) in &normalized {
            // Weightless entries are skipped entirely: they are not given a
            // zero weight and they do not enter any denominator.
            if let Some(bobot) = bobot {
                sum += nilai * bobot;
                used += 1;
            }
        }
        if used == 0 {
            return None;
        }
        // The sum is not renormalized by total weight; a correctly weighted
        // record sums to <= 100 on its own.
        let value = clamp_score(Some(sum))?;
        Some(Aggregate {
            value,
            weighted: true,
            used,
        })
    } else {
        let sum: f64 = normalized.iter().map(|(nilai, _)| nilai).sum();
        let value = clamp_score(Some(sum / normalized.len() as f64))?;
        Some(Aggregate {
            value,
            weighted: false,
            used: normalized.len(),
        })
    }
}

/// Aggregate judged criteria into a single value in [0, 100], or `None` when
/// no entry carries usable data. Weighted when any entry has a weight,
/// arithmetic mean otherwise.
pub fn aggregate_details(details: &[ScoreDetail]) -> Option<f64> {
    aggregate(details).map(|agg| agg.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::types::ScoreValue;

    fn detail(nilai: ScoreValue, bobot: ScoreValue) -> ScoreDetail {
        ScoreDetail {
            kriteria: None,
            nilai,
            bobot,
        }
    }

    #[test]
    fn test_empty_details() {
        assert_eq!(aggregate_details(&[]), None);
    }

    #[test]
    fn test_unweighted_mean() {
        let details = vec![
            detail(80.0.into(), ScoreValue::Absent),
            detail(60.0.into(), ScoreValue::Absent),
        ];
        assert_eq!(aggregate_details(&details), Some(70.0));
    }

    #[test]
    fn test_weighted_sum_no_normalization() {
        let details = vec![
            detail(80.0.into(), 0.5.into()),
            detail(60.0.into(), 0.3.into()),
        ];
        // 80*0.5 + 60*0.3 = 58; weights summing to 0.8 are trusted as-is.
        let result = aggregate_details(&details).unwrap();
        assert!((result - 58.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_weights_skip_weightless() {
        let details = vec![
            detail(80.0.into(), 0.5.into()),
            detail(60.0.into(), ScoreValue::Absent),
        ];
        // Weighted mode; the weightless entry contributes nothing.
        assert_eq!(aggregate_details(&details), Some(40.0));
    }

    #[test]
    fn test_invalid_value_discards_entry() {
        let details = vec![
            detail(ScoreValue::from("abc"), 0.9.into()),
            detail(80.0.into(), ScoreValue::Absent),
            detail(90.0.into(), ScoreValue::Absent),
        ];
        // The junk entry is gone along with its weight, so the set is
        // unweighted: mean of 80 and 90.
        assert_eq!(aggregate_details(&details), Some(85.0));
    }

    #[test]
    fn test_all_entries_invalid() {
        let details = vec![
            detail(ScoreValue::Absent, 0.5.into()),
            detail(ScoreValue::from("n/a"), ScoreValue::Absent),
        ];
        assert_eq!(aggregate_details(&details), None);
    }

    #[test]
    fn test_values_clamped_before_use() {
        let details = vec![
            detail(150.0.into(), ScoreValue::Absent),
            detail((-50.0).into(), ScoreValue::Absent),
        ];
        // 150 -> 100, -50 -> 0, mean 50.
        assert_eq!(aggregate_details(&details), Some(50.0));
    }

    #[test]
    fn test_weights_clamped_before_use() {
        let details = vec![detail(80.0.into(), 2.0.into())];
        // Weight 2.0 clamps to 1.0.
        assert_eq!(aggregate_details(&details), Some(80.0));
    }

    #[test]
    fn test_weighted_sum_clamped_to_max() {
        let details = vec![
            detail(90.0.into(), 1.0.into()),
            detail(80.0.into(), 1.0.into()),
        ];
        // 90 + 80 = 170, clamped to 100.
        assert_eq!(aggregate_details(&details), Some(100.0));
    }

    #[test]
    fn test_numeric_strings_count() {
        let details = vec![
            detail(ScoreValue::from("80"), ScoreValue::Absent),
            detail(ScoreValue::from("90"), ScoreValue::Absent),
        ];
        assert_eq!(aggregate_details(&details), Some(85.0));
    }

    #[test]
    fn test_aggregate_reports_mode() {
        let unweighted = vec![detail(80.0.into(), ScoreValue::Absent)];
        let agg = aggregate(&unweighted).unwrap();
        assert!(!agg.weighted);
        assert_eq!(agg.used, 1);

        let weighted = vec![
            detail(80.0.into(), 0.5.into()),
            detail(60.0.into(), ScoreValue::Absent),
        ];
        let agg = aggregate(&weighted).unwrap();
        assert!(agg.weighted);
        assert_eq!(agg.used, 1);
    }
}
