//! Risk scoring engine
//!
//! The lens maps one sampled signal to a bounded risk index:
//! - Welch PSD estimate over the signal
//! - inhibition (order) and excitation (chaos) band energies
//! - zero-guarded excitation/inhibition ratio
//! - sigmoid normalization to (0, 100)
//!
//! The engine holds read-only configuration only; every call is an
//! independent pure computation and calls may run in parallel freely.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    band_energy, welch_psd, Band, DEFAULT_SAMPLE_RATE, EXCITATION_BAND, INHIBITION_BAND,
    MAX_SEGMENT_LEN, SIGMOID_CENTER, SIGMOID_STEEPNESS, ZERO_GUARD_EPS,
};

/// Errors from the scoring engine
#[derive(Debug, Error)]
pub enum LensError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Configuration surface of the scoring engine.
///
/// The defaults are fixed design constants; they are exposed as named
/// fields rather than inline literals so callers can see exactly what
/// the score depends on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    /// Sampling rate in Hz. Default: 173.61 (reference dataset rate).
    pub fs: f64,
    /// Ordered/stable band. Default: 4-13 Hz.
    pub inhibition_band: Band,
    /// Chaotic/crisis band. Default: 30-80 Hz.
    pub excitation_band: Band,
    /// Welch segment length cap. Default: 256 samples.
    pub max_segment_len: usize,
    /// Denominator substitute when inhibition energy is zero. Default: 1e-9.
    pub zero_guard_eps: f64,
    /// Sigmoid steepness. Default: 2.0.
    pub sigmoid_steepness: f64,
    /// Ratio mapped to a score of 50. Default: 0.8.
    pub sigmoid_center: f64,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            fs: DEFAULT_SAMPLE_RATE,
            inhibition_band: INHIBITION_BAND,
            excitation_band: EXCITATION_BAND,
            max_segment_len: MAX_SEGMENT_LEN,
            zero_guard_eps: ZERO_GUARD_EPS,
            sigmoid_steepness: SIGMOID_STEEPNESS,
            sigmoid_center: SIGMOID_CENTER,
        }
    }
}

/// Result of scoring one signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk index in (0, 100); higher means excitation dominates
    pub score: f64,
    /// Integrated PSD power over the excitation band
    pub excitation_energy: f64,
    /// Integrated PSD power over the inhibition band
    pub inhibition_energy: f64,
}

/// Map an excitation/inhibition ratio to a 0-100 score.
///
/// Monotonically increasing in the ratio; equals 50 exactly at
/// `ratio == center`.
pub fn risk_score_from_ratio(ratio: f64, steepness: f64, center: f64) -> f64 {
    100.0 / (1.0 + (-steepness * (ratio - center)).exp())
}

/// The risk scoring engine.
///
/// Stateless apart from its configuration; `score` never mutates the
/// lens and persists nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct RiskLens {
    config: LensConfig,
}

impl RiskLens {
    /// Create a lens for the given sampling rate, all other
    /// configuration at its defaults.
    pub fn new(fs: f64) -> Self {
        Self::with_config(LensConfig {
            fs,
            ..LensConfig::default()
        })
    }

    /// Create a lens with explicit configuration.
    pub fn with_config(config: LensConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Score one signal.
    ///
    /// Fails with [`LensError::InvalidInput`] on an empty signal or a
    /// non-positive sampling rate. Numerically degenerate inputs (bands
    /// excluded by the Nyquist limit, zero inhibition power, very short
    /// signals) degrade gracefully to a finite bounded score.
    pub fn score(&self, signal: &[f64]) -> Result<RiskAssessment, LensError> {
        if signal.is_empty() {
            return Err(LensError::InvalidInput("signal is empty".to_string()));
        }
        if !self.config.fs.is_finite() || self.config.fs <= 0.0 {
            return Err(LensError::InvalidInput(format!(
                "sampling rate must be positive, got {}",
                self.config.fs
            )));
        }

        let psd = welch_psd(signal, self.config.fs, self.config.max_segment_len);

        let inhibition_energy = band_energy(&psd, self.config.inhibition_band);
        let excitation_energy = band_energy(&psd, self.config.excitation_band);

        // Zero-guard: a fixed small constant, not a relative epsilon,
        // so the ratio scale is stable when order power is truly absent.
        let denom = if inhibition_energy > 0.0 {
            inhibition_energy
        } else {
            self.config.zero_guard_eps
        };
        let ratio = excitation_energy / denom;

        let score = risk_score_from_ratio(
            ratio,
            self.config.sigmoid_steepness,
            self.config.sigmoid_center,
        );

        Ok(RiskAssessment {
            score,
            excitation_energy,
            inhibition_energy,
        })
    }
}
