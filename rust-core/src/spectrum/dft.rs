//! Direct discrete Fourier transform
//!
//! O(N²) evaluation of every bin, normalized by 1/N:
//!
//! S(k) = (1/N) Σ x[n]·e^{-i·2πkn/N},  k, n = 0..N-1

use num_complex::Complex;
use rayon::prelude::*;

use super::component::FrequencyComponent;
use crate::Sample;

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Signed frequency label for bin `k` of an `n`-point transform
///
/// Bins up to and including the Nyquist point `n / 2` keep their index;
/// bins above it map to `k - n`.
pub fn fold_frequency(k: usize, n: usize) -> i64 {
    if k <= n / 2 {
        k as i64
    } else {
        k as i64 - n as i64
    }
}

/// Normalized coefficient of bin `k`
pub fn dft_bin(samples: &[Sample], k: usize) -> Complex<f64> {
    let len = samples.len() as f64;
    let mut sum = Complex::new(0.0, 0.0);

    for (n, x) in samples.iter().enumerate() {
        let angle = -TWO_PI * k as f64 * n as f64 / len;
        sum += x * Complex::new(angle.cos(), angle.sin());
    }

    sum / len
}

fn component_at(samples: &[Sample], k: usize) -> FrequencyComponent {
    FrequencyComponent::from_coefficient(dft_bin(samples, k), fold_frequency(k, samples.len()))
}

/// Compute one component per sample, in bin order
pub fn compute_components(samples: &[Sample]) -> Vec<FrequencyComponent> {
    (0..samples.len())
        .map(|k| component_at(samples, k))
        .collect()
}

/// Same as [`compute_components`] with bins spread over the rayon pool
///
/// Collection keeps bin order, so the result is identical to the serial one.
pub fn compute_components_parallel(samples: &[Sample]) -> Vec<FrequencyComponent> {
    (0..samples.len())
        .into_par_iter()
        .map(|k| component_at(samples, k))
        .collect()
}

/// Sort by amplitude, largest first
///
/// Stable: equal amplitudes keep their relative order.
pub fn sort_by_amplitude(components: &mut [FrequencyComponent]) {
    components.sort_by(|a, b| b.amp.total_cmp(&a.amp));
}
