//! Vega Lens Core - spectral risk scoring for time-domain biosignals
//!
//! This crate provides the scoring pipeline:
//! - Welch power spectral density estimation
//! - Energy partitioning into inhibition and excitation bands
//! - Zero-guarded excitation/inhibition ratio
//! - Sigmoid normalization to a bounded 0-100 risk index

pub mod bands;
pub mod lens;
pub mod psd;

pub use bands::*;
pub use lens::*;
pub use psd::*;

/// Default sampling rate in Hz (reference EEG dataset rate)
pub const DEFAULT_SAMPLE_RATE: f64 = 173.61;

/// Inhibition band (ordered/stable rhythm), Hz
pub const INHIBITION_BAND: Band = Band { low: 4.0, high: 13.0 };

/// Excitation band (chaotic/crisis activity), Hz
pub const EXCITATION_BAND: Band = Band { low: 30.0, high: 80.0 };

/// Welch segment length cap in samples
pub const MAX_SEGMENT_LEN: usize = 256;

/// Substitute denominator when inhibition energy is exactly zero
pub const ZERO_GUARD_EPS: f64 = 1e-9;

/// Sigmoid steepness for ratio -> score normalization
pub const SIGMOID_STEEPNESS: f64 = 2.0;

/// Ratio at which the score crosses 50 (chaos and order balanced)
pub const SIGMOID_CENTER: f64 = 0.8;
