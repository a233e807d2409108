//! Nearest-neighbour ordering of sampled points
//!
//! Points sampled from a drawing often arrive in an order that jumps between
//! strokes. Reordering them into one continuous walk keeps the high
//! frequencies of the transform down.

use log::debug;

use crate::Sample;

/// Greedy nearest-neighbour walk through all samples
///
/// Starts at the first sample and repeatedly steps to the closest sample not
/// yet visited. Ties go to the one that appears first in the input.
///
/// # Returns
/// A permutation of `samples`
pub fn reorder_nearest_neighbour(samples: &[Sample]) -> Vec<Sample> {
    let mut remaining: Vec<Sample> = samples.to_vec();
    if remaining.is_empty() {
        return remaining;
    }

    let mut path = Vec::with_capacity(remaining.len());
    let mut current = remaining.remove(0);
    path.push(current);

    while !remaining.is_empty() {
        let mut nearest = 0;
        let mut best = f64::INFINITY;
        for (i, candidate) in remaining.iter().enumerate() {
            let distance = (candidate - current).norm();
            if distance < best {
                best = distance;
                nearest = i;
            }
        }

        current = remaining.remove(nearest);
        path.push(current);

        if path.len() % 1000 == 0 {
            debug!("Ordered {}/{} points", path.len(), samples.len());
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert!(reorder_nearest_neighbour(&[]).is_empty());

        let one = [Sample::new(4.0, 2.0)];
        assert_eq!(reorder_nearest_neighbour(&one), one.to_vec());
    }

    #[test]
    fn test_walks_to_closest_point() {
        let samples = [
            Sample::new(0.0, 0.0),
            Sample::new(3.0, 0.0),
            Sample::new(1.0, 0.0),
            Sample::new(2.0, 0.0),
        ];

        let ordered = reorder_nearest_neighbour(&samples);

        let xs: Vec<f64> = ordered.iter().map(|s| s.re).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_tie_prefers_earlier_point() {
        let samples = [
            Sample::new(0.0, 0.0),
            Sample::new(0.0, 1.0),
            Sample::new(1.0, 0.0),
        ];

        let ordered = reorder_nearest_neighbour(&samples);
        assert_eq!(ordered[1], Sample::new(0.0, 1.0));
    }

    #[test]
    fn test_result_is_permutation() {
        let samples: Vec<Sample> = (0..40)
            .map(|i| Sample::new(((i * 17) % 23) as f64, ((i * 5) % 11) as f64))
            .collect();

        let ordered = reorder_nearest_neighbour(&samples);

        assert_eq!(ordered.len(), samples.len());
        assert_eq!(ordered[0], samples[0]);

        let key = |s: &Sample| (s.re as i64, s.im as i64);
        let mut a: Vec<_> = samples.iter().map(key).collect();
        let mut b: Vec<_> = ordered.iter().map(key).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
