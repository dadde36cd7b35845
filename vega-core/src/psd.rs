//! Power spectral density estimation via Welch's method
//!
//! Windowed, averaged periodogram over 50%-overlapping segments:
//! - periodic Hann window per segment
//! - per-segment mean removal (constant detrend)
//! - one-sided density scaling `2 / (fs * sum(w^2))`, DC and Nyquist
//!   bins not doubled
//!
//! Signals shorter than the segment cap fall back to a single-segment
//! periodogram, the coarsest resolution the input length allows.

use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// One-sided PSD estimate: ascending frequency bins and matching power
/// density values, `len = nperseg / 2 + 1`.
#[derive(Debug, Clone)]
pub struct PsdEstimate {
    /// Frequency bins in Hz, ascending from DC
    pub frequencies: Vec<f64>,
    /// Power density per bin (units^2 / Hz), non-negative
    pub power: Vec<f64>,
    /// Segment length actually used
    pub segment_len: usize,
    /// Number of segments averaged
    pub num_segments: usize,
}

impl PsdEstimate {
    /// Frequency resolution in Hz
    pub fn resolution(&self, fs: f64) -> f64 {
        fs / self.segment_len as f64
    }
}

/// Generate a periodic Hann window of the given size.
pub fn hann_window(size: usize) -> Vec<f64> {
    if size <= 1 {
        return vec![1.0; size];
    }
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / size as f64).cos()))
        .collect()
}

/// Estimate the one-sided PSD of a real signal with Welch's method.
///
/// Segment length is `min(signal.len(), max_segment_len)` with 50%
/// overlap. Callers must guarantee a non-empty signal and `fs > 0`;
/// the public scoring entry point validates both.
pub fn welch_psd(signal: &[f64], fs: f64, max_segment_len: usize) -> PsdEstimate {
    let nperseg = signal.len().min(max_segment_len).max(1);
    let noverlap = nperseg / 2;
    let step = nperseg - noverlap;

    let window = hann_window(nperseg);
    let win_sumsq: f64 = window.iter().map(|w| w * w).sum();
    let scale = 1.0 / (fs * win_sumsq);

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(nperseg);

    let n_bins = nperseg / 2 + 1;
    let nyquist_bin = if nperseg % 2 == 0 { Some(n_bins - 1) } else { None };

    let mut accumulated = vec![0.0f64; n_bins];
    let mut num_segments = 0usize;

    let mut pos = 0;
    while pos + nperseg <= signal.len() {
        let segment = &signal[pos..pos + nperseg];
        let mean = segment.iter().sum::<f64>() / nperseg as f64;

        let mut frame: Vec<Complex64> = segment
            .iter()
            .zip(window.iter())
            .map(|(&x, &w)| Complex64::new((x - mean) * w, 0.0))
            .collect();

        fft.process(&mut frame);

        for (k, bin) in frame.iter().take(n_bins).enumerate() {
            let mut p = bin.norm_sqr() * scale;
            // One-sided spectrum: fold negative frequencies onto the
            // positive half, except the DC and Nyquist bins.
            if k != 0 && Some(k) != nyquist_bin {
                p *= 2.0;
            }
            accumulated[k] += p;
        }

        num_segments += 1;
        pos += step;
    }

    let power: Vec<f64> = accumulated
        .iter()
        .map(|&p| p / num_segments.max(1) as f64)
        .collect();

    let freq_resolution = fs / nperseg as f64;
    let frequencies: Vec<f64> = (0..n_bins).map(|k| k as f64 * freq_resolution).collect();

    PsdEstimate {
        frequencies,
        power,
        segment_len: nperseg,
        num_segments,
    }
}
