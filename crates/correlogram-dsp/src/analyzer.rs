// SPDX-License-Identifier: LGPL-3.0-or-later

//! Reusable correlogram analyzer.
//!
//! [`CorrelogramAnalyzer`] bundles the matrix geometry (window length,
//! delay set, number of positions) and the output transform so a host can
//! configure once and process many signals or segments. It drives the
//! matrix builders ([`correlogram()`](crate::correlogram()) and
//! [`correlogram_delays()`](crate::correlogram_delays())) and can either
//! fill a caller-owned buffer or allocate an owned [`Correlogram`].
//!
//! # Examples
//!
//! ```
//! use correlogram_dsp::CorrelogramAnalyzer;
//!
//! let signal = [1.0f32, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
//! let mut analyzer = CorrelogramAnalyzer::new(4);
//! analyzer.set_max_delay(5).set_positions(1);
//!
//! let cgram = analyzer.process(&signal).unwrap();
//! assert_eq!((cgram.rows(), cgram.cols()), (4, 1));
//! // Row for delay 4: the signal repeats with period 4.
//! assert!((cgram.row(3)[0] - 1.0).abs() < 1e-6);
//! ```

use crate::correlogram::{correlogram, correlogram_delays};
use crate::error::CorrelogramError;
use crate::transform::Transform;

/// The set of delays a correlogram covers: one matrix row per delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelaySet {
    /// The contiguous range `1..max_delay` (delay 0 is skipped).
    Range(usize),
    /// An explicit ordered list of delays; delay 0 is allowed.
    List(Vec<usize>),
}

impl DelaySet {
    /// Number of matrix rows this delay set produces.
    pub fn rows(&self) -> usize {
        match self {
            DelaySet::Range(max_delay) => max_delay.saturating_sub(1),
            DelaySet::List(delays) => delays.len(),
        }
    }

    /// The largest delay in the set, or 0 if it is empty.
    pub fn max_delay(&self) -> usize {
        match self {
            DelaySet::Range(max_delay) => max_delay.saturating_sub(1),
            DelaySet::List(delays) => delays.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Configurable correlogram computation unit.
///
/// Holds no per-signal state; a configured analyzer can be reused across
/// any number of `process` calls.
#[derive(Debug, Clone)]
pub struct CorrelogramAnalyzer {
    /// Correlation window length in samples.
    wlen: usize,
    /// Delays covered by the matrix rows.
    delays: DelaySet,
    /// Number of window positions (matrix columns); `None` derives the
    /// maximum that fits the processed signal.
    positions: Option<usize>,
    /// Output nonlinearity.
    transform: Transform,
}

impl CorrelogramAnalyzer {
    /// Create an analyzer with the given correlation window length.
    ///
    /// The delay set defaults to the empty range (configure it with
    /// [`set_max_delay`](Self::set_max_delay) or
    /// [`set_delays`](Self::set_delays)), positions default to the maximum
    /// that fits each processed signal, and the transform defaults to
    /// [`Transform::RectifiedQuartic`].
    pub fn new(wlen: usize) -> Self {
        Self {
            wlen,
            delays: DelaySet::Range(0),
            positions: None,
            transform: Transform::default(),
        }
    }

    /// Set the correlation window length in samples.
    pub fn set_wlen(&mut self, wlen: usize) -> &mut Self {
        self.wlen = wlen;
        self
    }

    /// Cover the contiguous delay range `1..max_delay`.
    pub fn set_max_delay(&mut self, max_delay: usize) -> &mut Self {
        self.delays = DelaySet::Range(max_delay);
        self
    }

    /// Cover an explicit list of delays, one matrix row per entry.
    pub fn set_delays(&mut self, delays: &[usize]) -> &mut Self {
        self.delays = DelaySet::List(delays.to_vec());
        self
    }

    /// Fix the number of window positions (matrix columns).
    pub fn set_positions(&mut self, n_pos: usize) -> &mut Self {
        self.positions = Some(n_pos);
        self
    }

    /// Derive the number of positions from each processed signal again.
    pub fn set_auto_positions(&mut self) -> &mut Self {
        self.positions = None;
        self
    }

    /// Set the output nonlinearity.
    pub fn set_transform(&mut self, transform: Transform) -> &mut Self {
        self.transform = transform;
        self
    }

    /// The configured window length.
    pub fn wlen(&self) -> usize {
        self.wlen
    }

    /// The configured delay set.
    pub fn delays(&self) -> &DelaySet {
        &self.delays
    }

    /// The configured transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Number of matrix rows.
    pub fn rows(&self) -> usize {
        self.delays.rows()
    }

    /// Number of matrix columns for a signal of `signal_len` samples.
    ///
    /// When positions are fixed, returns that value; otherwise the largest
    /// count such that the rightmost delayed window still fits:
    /// `signal_len + 1 - wlen - max_delay` (saturating at zero).
    pub fn positions_for(&self, signal_len: usize) -> usize {
        match self.positions {
            Some(n_pos) => n_pos,
            None => (signal_len + 1).saturating_sub(self.wlen + self.delays.max_delay()),
        }
    }

    /// Exact output-buffer length required for a signal of `signal_len`.
    pub fn required_len(&self, signal_len: usize) -> usize {
        self.rows() * self.positions_for(signal_len)
    }

    /// Fill a caller-allocated buffer with the correlogram of `signal`.
    ///
    /// `cgram.len()` must equal [`required_len`](Self::required_len) for
    /// this signal. On error the buffer must be treated as partial.
    pub fn process_into(
        &self,
        signal: &[f32],
        cgram: &mut [f32],
    ) -> Result<(), CorrelogramError> {
        let n_pos = self.positions_for(signal.len());
        match &self.delays {
            DelaySet::Range(max_delay) => {
                correlogram(cgram, signal, *max_delay, self.wlen, n_pos, self.transform)
            }
            DelaySet::List(delays) => {
                correlogram_delays(cgram, signal, delays, self.wlen, n_pos, self.transform)
            }
        }
    }

    /// Compute the correlogram of `signal` into an owned matrix.
    pub fn process(&self, signal: &[f32]) -> Result<Correlogram, CorrelogramError> {
        let n_pos = self.positions_for(signal.len());
        let rows = self.rows();
        let mut values = vec![0.0f32; rows * n_pos];
        self.process_into(signal, &mut values)?;

        let delays = match &self.delays {
            DelaySet::Range(max_delay) => (1..*max_delay).collect(),
            DelaySet::List(delays) => delays.clone(),
        };
        Ok(Correlogram {
            values,
            delays,
            cols: n_pos,
        })
    }
}

/// An owned correlogram matrix with its delay axis.
///
/// Row `i` holds the transformed coefficients for `delays()[i]` across all
/// window positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlogram {
    values: Vec<f32>,
    delays: Vec<usize>,
    cols: usize,
}

impl Correlogram {
    /// Number of rows (delays).
    pub fn rows(&self) -> usize {
        self.delays.len()
    }

    /// Number of columns (window positions).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The delay of each row, in row order.
    pub fn delays(&self) -> &[usize] {
        &self.delays
    }

    /// The row-major cell values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// One row of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// Mean of all cells: a scalar summary of how self-similar the signal
    /// is over the covered delays. Returns 0 for an empty matrix.
    pub fn total(&self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.values.iter().map(|&v| v as f64).sum();
        (sum / self.values.len() as f64) as f32
    }
}
