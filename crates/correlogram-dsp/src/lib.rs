// SPDX-License-Identifier: LGPL-3.0-or-later

//! # correlogram-dsp
//!
//! Windowed self-similarity analysis for 1-D signals.
//!
//! A correlogram maps the periodicity structure of a signal (audio or any
//! other time series) as a 2-D matrix: each cell holds the Pearson
//! correlation coefficient between a window of the signal and a
//! time-shifted copy of that window, passed through a rectifying
//! nonlinearity that suppresses weak and negative correlation. Strong
//! ridges in the matrix reveal periodicity at the corresponding delay.
//!
//! - **Coefficient**: [`windowed_coefficient`] and [`coefficient`] compute
//!   single-pass Pearson correlation over `f32` buffers
//! - **Builders**: [`correlogram()`] (contiguous delay range) and
//!   [`correlogram_delays()`] (explicit delay list) fill a caller-allocated
//!   row-major matrix
//! - **Analyzer**: [`CorrelogramAnalyzer`] packages geometry and transform
//!   for repeated use and produces owned [`Correlogram`] matrices
//! - **ACF**: [`acf`] and [`acf_pearson`] estimate per-lag autocorrelation
//!
//! All operations are stateless and synchronous; every call recomputes
//! from the raw signal. Degenerate inputs (constant windows, bad geometry)
//! are reported through [`CorrelogramError`], never as sentinel values.
//!
//! With the `parallel` feature, row-parallel builders
//! (`correlogram_par`, `correlogram_delays_par`) are available.
//!
//! ## Example
//!
//! ```
//! use correlogram_dsp::{CorrelogramAnalyzer, Transform};
//!
//! // Two periods of a period-4 pattern.
//! let signal = [1.0f32, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
//!
//! let mut analyzer = CorrelogramAnalyzer::new(4);
//! analyzer.set_max_delay(5).set_positions(1).set_transform(Transform::default());
//!
//! let cgram = analyzer.process(&signal).unwrap();
//! // The delay-4 row lights up: the window repeats 4 samples later.
//! assert!((cgram.row(3)[0] - 1.0).abs() < 1e-6);
//! ```

pub mod acf;
pub mod analyzer;
pub mod coefficient;
pub mod correlogram;
pub mod error;
pub mod transform;

pub use acf::{acf, acf_pearson};
pub use analyzer::{Correlogram, CorrelogramAnalyzer, DelaySet};
pub use coefficient::{coefficient, windowed_coefficient};
pub use correlogram::{correlogram, correlogram_delays};
#[cfg(feature = "parallel")]
pub use correlogram::{correlogram_delays_par, correlogram_par};
pub use error::CorrelogramError;
pub use transform::Transform;
