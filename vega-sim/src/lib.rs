//! Vega Lens Sim - synthetic test signals for the risk lens
//!
//! Generates paired time series whose ground truth is known by
//! construction: an ordered signal dominated by a mid-inhibition-band
//! tone, and a chaotic signal dominated by an excitation-band tone,
//! each with additive Gaussian noise.

pub mod generator;

pub use generator::*;
