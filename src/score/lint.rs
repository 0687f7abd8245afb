use super::clamp::{SCORE_MAX, SCORE_MIN, WEIGHT_MAX, WEIGHT_MIN};
use super::types::Score;

/// Weight sums within this distance of 1.0 are accepted without comment.
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Collect data-quality warnings for a record, all at once.
///
/// Warnings never change how a record resolves; they make odd inputs visible
/// in verbose output. Out-of-range values still get clamped, unusable manual
/// overrides still fall through, weight sums are still trusted as-is.
pub fn lint_score(score: &Score) -> Vec<String> {
    let mut warnings = Vec::new();

    if score.use_manual_nilai && score.nilai.as_f64().is_none() {
        warnings.push(
            "manual override requested but the manual value is unusable; falling back".to_string(),
        );
    }

    if let Some(nilai) = score.nilai.as_f64() {
        if !(SCORE_MIN..=SCORE_MAX).contains(&nilai) {
            warnings.push(format!("overall value {} outside 0-100, will be clamped", nilai));
        }
    }

    let mut weight_sum = 0.0;
    let mut weighted_entries = 0;
    for (i, entry) in score.details.iter().enumerate() {
        let nilai = entry.nilai.as_f64();
        match nilai {
            Some(nilai) if !(SCORE_MIN..=SCORE_MAX).contains(&nilai) => {
                warnings.push(format!(
                    "details[{}]: value {} outside 0-100, will be clamped",
                    i, nilai
                ));
            }
            Some(_) => {}
            None if !entry.nilai.is_absent() => {
                warnings.push(format!("details[{}]: value is not a number, entry ignored", i));
            }
            None => {}
        }

        if let Some(bobot) = entry.bobot.as_f64() {
            if !(WEIGHT_MIN..=WEIGHT_MAX).contains(&bobot) {
                warnings.push(format!(
                    "details[{}]: weight {} outside 0-1, will be clamped",
                    i, bobot
                ));
            }
            // Only entries the aggregator will actually use count toward the sum.
            if nilai.is_some() {
                weight_sum += bobot.clamp(WEIGHT_MIN, WEIGHT_MAX);
                weighted_entries += 1;
            }
        }
    }

    if weighted_entries > 0 && (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        warnings.push(format!(
            "weights sum to {:.2}, not 1.0; the aggregate is not renormalized",
            weight_sum
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::types::{ScoreDetail, ScoreValue};

    fn detail(nilai: ScoreValue, bobot: ScoreValue) -> ScoreDetail {
        ScoreDetail {
            kriteria: None,
            nilai,
            bobot,
        }
    }

    #[test]
    fn test_clean_record_has_no_warnings() {
        let score = Score {
            nilai: ScoreValue::Absent,
            use_manual_nilai: false,
            details: vec![
                detail(80.0.into(), 0.6.into()),
                detail(70.0.into(), 0.4.into()),
            ],
        };
        assert!(lint_score(&score).is_empty());
    }

    #[test]
    fn test_manual_without_value() {
        let score = Score {
            nilai: ScoreValue::Absent,
            use_manual_nilai: true,
            details: vec![],
        };
        let warnings = lint_score(&score);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("manual override"));
    }

    #[test]
    fn test_weight_sum_off() {
        let score = Score {
            nilai: ScoreValue::Absent,
            use_manual_nilai: false,
            details: vec![
                detail(80.0.into(), 0.5.into()),
                detail(60.0.into(), 0.3.into()),
            ],
        };
        let warnings = lint_score(&score);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("weights sum to 0.80"));
    }

    #[test]
    fn test_discarded_entry_weight_not_counted() {
        // The weighted entry with a junk value is discarded by aggregation,
        // so its weight must not trip the sum check.
        let score = Score {
            nilai: ScoreValue::Absent,
            use_manual_nilai: false,
            details: vec![
                detail(ScoreValue::from("dq"), 0.5.into()),
                detail(80.0.into(), 1.0.into()),
            ],
        };
        let warnings = lint_score(&score);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not a number"));
    }

    #[test]
    fn test_out_of_range_values() {
        let score = Score {
            nilai: 130.0.into(),
            use_manual_nilai: false,
            details: vec![detail(80.0.into(), 1.4.into())],
        };
        let warnings = lint_score(&score);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("overall value 130"));
        assert!(warnings[1].contains("weight 1.4"));
    }
}
