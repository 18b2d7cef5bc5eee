/// Percentile of `values` by linear interpolation between closest ranks.
///
/// Negative values are ignored. An empty sample gives 0, a single value is
/// returned as-is. `p` is clamped to `[0, 1]`. Interpolated results round half
/// away from zero.
pub fn percentile(values: &[i64], p: f64) -> i64 {
    let mut sorted: Vec<i64> = values.iter().copied().filter(|v| *v >= 0).collect();
    sorted.sort_unstable();

    match sorted.len() {
        0 => 0,
        1 => sorted[0],
        n => {
            let p = p.clamp(0.0, 1.0);
            let idx = (n - 1) as f64 * p;
            let lo = idx.floor() as usize;
            let hi = idx.ceil() as usize;
            if lo == hi {
                return sorted[lo];
            }
            let w = idx - lo as f64;
            (sorted[lo] as f64 * (1.0 - w) + sorted[hi] as f64 * w).round() as i64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_is_zero() {
        for p in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(percentile(&[], p), 0);
        }
    }

    #[test]
    fn single_value_for_any_p() {
        for p in [0.0, 0.3, 0.5, 0.99, 1.0] {
            assert_eq!(percentile(&[42], p), 42);
        }
    }

    #[test]
    fn interpolates_between_ranks() {
        assert_eq!(percentile(&[10, 20, 30, 40], 0.5), 25);
        assert_eq!(percentile(&[90, 100, 120], 0.25), 95);
        assert_eq!(percentile(&[90, 100, 120], 0.75), 110);
    }

    #[test]
    fn exact_rank_needs_no_interpolation() {
        assert_eq!(percentile(&[90, 100, 120], 0.5), 100);
    }

    #[test]
    fn endpoints_are_min_and_max() {
        let v = [7, 3, 99, 15, 42];
        assert_eq!(percentile(&v, 0.0), 3);
        assert_eq!(percentile(&v, 1.0), 99);
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        assert_eq!(percentile(&[40, 10, 30, 20], 0.5), 25);
    }

    #[test]
    fn negatives_are_dropped() {
        assert_eq!(percentile(&[-50, 10, 20], 0.0), 10);
        assert_eq!(percentile(&[-1], 0.5), 0);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // idx = 0.5 between 1 and 2 -> 1.5 -> 2
        assert_eq!(percentile(&[1, 2], 0.5), 2);
        // idx = 1/3 between 10 and 11 -> 10.33 -> 10
        assert_eq!(percentile(&[10, 11, 12, 13], 0.111_111_111), 10);
    }
}
