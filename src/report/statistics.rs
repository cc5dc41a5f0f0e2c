use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::Weight;

/// Descriptive statistics of a weight sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation, needs at least two samples.
    pub standard_deviation: Option<f64>,
}

impl Statistics {
    pub fn from_weights(weights: &[Weight]) -> Statistics {
        Statistics {
            count: weights.len(),
            mean: mean(weights),
            median: median(weights),
            standard_deviation: sample_standard_deviation(weights),
        }
    }
}

pub fn mean(weights: &[Weight]) -> Option<f64> {
    if weights.is_empty() {
        return None;
    }
    let sum = weights.iter().map(|&weight| weight as u64).sum::<u64>();
    Some(sum as f64 / weights.len() as f64)
}

/// Middle value of the sorted sample, the mean of both middle values for an
/// even number of samples.
pub fn median(weights: &[Weight]) -> Option<f64> {
    if weights.is_empty() {
        return None;
    }
    let sorted = weights.iter().copied().sorted_unstable().collect_vec();
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[middle] as f64)
    } else {
        Some((sorted[middle - 1] as f64 + sorted[middle] as f64) / 2.0)
    }
}

pub fn sample_standard_deviation(weights: &[Weight]) -> Option<f64> {
    if weights.len() < 2 {
        return None;
    }
    let mean = mean(weights)?;
    let squared_deviations = weights
        .iter()
        .map(|&weight| (weight as f64 - mean).powi(2))
        .sum::<f64>();
    Some((squared_deviations / (weights.len() - 1) as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_of_small_sample() {
        let statistics = Statistics::from_weights(&[2, 4, 4, 4, 5, 5, 7, 9]);

        assert_eq!(statistics.count, 8);
        assert_eq!(statistics.mean, Some(5.0));
        assert_eq!(statistics.median, Some(4.5));
        let deviation = statistics.standard_deviation.unwrap();
        assert!((deviation - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn median_of_odd_sample_is_middle_value() {
        assert_eq!(median(&[9, 1, 5]), Some(5.0));
    }

    #[test]
    fn degenerate_samples() {
        assert_eq!(Statistics::from_weights(&[]), Statistics::default());

        let single = Statistics::from_weights(&[3]);
        assert_eq!(single.mean, Some(3.0));
        assert_eq!(single.median, Some(3.0));
        assert_eq!(single.standard_deviation, None);
    }
}
