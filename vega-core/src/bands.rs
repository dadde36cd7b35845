//! Frequency bands and band energy integration

use serde::{Deserialize, Serialize};

use crate::PsdEstimate;

/// A closed frequency interval `[low, high]` in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    /// Create a band spanning `[low, high]`.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether a frequency falls inside the band (inclusive).
    pub fn contains(&self, freq: f64) -> bool {
        freq >= self.low && freq <= self.high
    }
}

/// Integrate PSD power over a band with the trapezoidal rule.
///
/// A band with no bins, or a single bin, integrates to exactly 0; this
/// happens when the Nyquist limit excludes the band and is a valid
/// outcome, not an error.
pub fn band_energy(psd: &PsdEstimate, band: Band) -> f64 {
    let points: Vec<(f64, f64)> = psd
        .frequencies
        .iter()
        .zip(psd.power.iter())
        .filter(|(&f, _)| band.contains(f))
        .map(|(&f, &p)| (f, p))
        .collect();

    points
        .windows(2)
        .map(|w| 0.5 * (w[0].1 + w[1].1) * (w[1].0 - w[0].0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_psd(df: f64, n_bins: usize, level: f64) -> PsdEstimate {
        PsdEstimate {
            frequencies: (0..n_bins).map(|k| k as f64 * df).collect(),
            power: vec![level; n_bins],
            segment_len: (n_bins - 1) * 2,
            num_segments: 1,
        }
    }

    #[test]
    fn test_band_contains_is_inclusive() {
        let band = Band::new(4.0, 13.0);
        assert!(band.contains(4.0));
        assert!(band.contains(13.0));
        assert!(!band.contains(3.99));
        assert!(!band.contains(13.01));
    }

    #[test]
    fn test_flat_psd_energy_is_width_times_level() {
        // Bins at 0,1,2,...,50 Hz, level 2.0: energy over [4,13] = 9 * 2.
        let psd = flat_psd(1.0, 51, 2.0);
        let energy = band_energy(&psd, Band::new(4.0, 13.0));
        assert!((energy - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_band_beyond_nyquist_is_zero() {
        // Bins only reach 25 Hz; the 30-80 Hz band selects nothing.
        let psd = flat_psd(1.0, 26, 2.0);
        assert_eq!(band_energy(&psd, Band::new(30.0, 80.0)), 0.0);
    }

    #[test]
    fn test_single_bin_band_is_zero() {
        // Exactly one bin in range: trapezoid needs two points.
        let psd = flat_psd(10.0, 9, 5.0);
        assert_eq!(band_energy(&psd, Band::new(28.0, 32.0)), 0.0);
    }
}
