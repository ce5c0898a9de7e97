//! Per-stat summary engine.
//!
//! Given one stat's values in week order, computes the high/low/mean block,
//! recent-form means, sample standard deviation, and over-rates against the
//! canonical threshold list plus an optional user-supplied threshold.

use serde::Serialize;

/// One (threshold, over-rate) pair. The rate is the percentage of games
/// with a value strictly greater than the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdRate {
    pub threshold: f64,
    pub over_pct: f64,
}

/// Summary statistics for one stat of one player. Recomputed per render.
#[derive(Debug, Clone, Serialize)]
pub struct StatSummary {
    pub high: f64,
    pub low: f64,
    pub mean: f64,
    /// Mean of the last 3 games (all games when fewer exist)
    pub last3_mean: f64,
    /// Mean of the last 5 games (all games when fewer exist)
    pub last5_mean: f64,
    /// Sample standard deviation (divide by N-1); `None` for a single game
    pub std_dev: Option<f64>,
    /// Over-rates against the canonical threshold list, ascending
    pub breakdown: Vec<ThresholdRate>,
    /// Over-rate against the user-supplied threshold, when one was given
    pub user_rate: Option<ThresholdRate>,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn tail_mean(values: &[f64], n: usize) -> f64 {
    let start = values.len().saturating_sub(n);
    mean(&values[start..])
}

/// Sample standard deviation; undefined for fewer than two values.
fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

fn over_rate(values: &[f64], threshold: f64) -> ThresholdRate {
    let over = values.iter().filter(|&&v| v > threshold).count();
    ThresholdRate { threshold, over_pct: over as f64 / values.len() as f64 * 100.0 }
}

/// Summarize one stat over a player's games in week order.
///
/// `values` must already have missing entries mapped to zero. A user
/// threshold is only applied when it is positive. An empty sequence yields
/// `None`: there is nothing to divide by, and callers render "no data"
/// instead.
pub fn summarize(
    values: &[f64],
    thresholds: &[f64],
    user_threshold: Option<f64>,
) -> Option<StatSummary> {
    if values.is_empty() {
        return None;
    }

    let high = values.iter().cloned().fold(f64::MIN, f64::max);
    let low = values.iter().cloned().fold(f64::MAX, f64::min);

    Some(StatSummary {
        high,
        low,
        mean: mean(values),
        last3_mean: tail_mean(values, 3),
        last5_mean: tail_mean(values, 5),
        std_dev: sample_std_dev(values),
        breakdown: thresholds.iter().map(|&t| over_rate(values, t)).collect(),
        user_rate: user_threshold.filter(|&t| t > 0.0).map(|t| over_rate(values, t)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn empty_sequence_is_no_data() {
        assert!(summarize(&[], &[9.5], Some(5.0)).is_none());
    }

    #[test]
    fn recent_form_means() {
        // completions 20, 18, 25, 30, 15 in week order
        let s = summarize(&[20.0, 18.0, 25.0, 30.0, 15.0], &[], None).unwrap();
        approx(s.last3_mean, (25.0 + 30.0 + 15.0) / 3.0);
        approx(s.last5_mean, 21.6);
        approx(s.mean, 21.6);
        approx(s.high, 30.0);
        approx(s.low, 15.0);
    }

    #[test]
    fn short_series_uses_all_games_for_tail_means() {
        let s = summarize(&[10.0, 20.0], &[], None).unwrap();
        approx(s.last3_mean, 15.0);
        approx(s.last5_mean, 15.0);
    }

    #[test]
    fn sample_std_dev_convention() {
        // pandas Series([2, 4, 4, 4, 5, 5, 7, 9]).std() == 2.13809...
        let s = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[], None).unwrap();
        approx(s.std_dev.unwrap(), (32.0_f64 / 7.0).sqrt());
    }

    #[test]
    fn single_game_has_no_std_dev() {
        let s = summarize(&[12.0], &[], None).unwrap();
        assert!(s.std_dev.is_none());
        approx(s.mean, 12.0);
    }

    #[test]
    fn over_rate_is_strict_greater_than() {
        // Threshold "100 yards" stored as 99.5: two of four games clear it
        let s = summarize(&[80.0, 120.0, 95.0, 150.0], &[99.5], None).unwrap();
        approx(s.breakdown[0].over_pct, 50.0);

        // A game exactly on a threshold does not count as over
        let s = summarize(&[9.5, 10.0], &[9.5], None).unwrap();
        approx(s.breakdown[0].over_pct, 50.0);
    }

    #[test]
    fn over_rates_are_monotonically_non_increasing() {
        let values = [3.0, 12.0, 48.0, 77.0, 104.0, 61.0];
        let thresholds = [9.5, 29.5, 49.5, 69.5, 99.5];
        let s = summarize(&values, &thresholds, None).unwrap();
        for pair in s.breakdown.windows(2) {
            assert!(pair[0].over_pct >= pair[1].over_pct);
        }
    }

    #[test]
    fn user_threshold_only_applies_when_positive() {
        let values = [10.0, 20.0];
        assert!(summarize(&values, &[], None).unwrap().user_rate.is_none());
        assert!(summarize(&values, &[], Some(0.0)).unwrap().user_rate.is_none());

        let rate = summarize(&values, &[], Some(15.0)).unwrap().user_rate.unwrap();
        approx(rate.over_pct, 50.0);
    }
}
