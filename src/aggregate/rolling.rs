/// Trailing mean over the last `window` values.
///
/// The window counts values, not calendar days: gaps in the series are not
/// bridged. The first `window - 1` positions have no mean. A `window` of zero
/// yields no means at all.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let mut means = vec![None; values.len().min(window - 1)];
    means.extend(
        values
            .windows(window)
            .map(|w| {
                // Offsets from the first value, so a constant window is exact.
                let base = w[0];
                Some(base + w.iter().map(|x| x - base).sum::<f64>() / window as f64)
            }),
    );
    means
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_values() {
        let means = rolling_mean(&[12.0; 9], 7);
        assert_eq!(means.len(), 9);
        assert!(means[..6].iter().all(Option::is_none));
        assert!(means[6..].iter().all(|mean| *mean == Some(12.0)));
    }

    #[test]
    fn test_identical_fractional_values_are_exact() {
        // Typical converted speeds: 10 MPS, 12 MPS and 20 KMH in knots.
        for value in [0.1, 1.1, 19.43844, 23.326128, 10.79914] {
            let means = rolling_mean(&[value; 7], 7);
            assert_eq!(means[6], Some(value), "mean of seven {}", value);
        }
    }

    #[test]
    fn test_trailing_window() {
        let means = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(means, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_short_series() {
        assert_eq!(rolling_mean(&[1.0, 2.0], 7), vec![None, None]);
        assert!(rolling_mean(&[], 7).is_empty());
        assert_eq!(rolling_mean(&[4.0, 6.0], 1), vec![Some(4.0), Some(6.0)]);
        assert_eq!(rolling_mean(&[4.0], 0), vec![None]);
    }
}
