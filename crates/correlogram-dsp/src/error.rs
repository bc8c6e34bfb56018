// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error types for correlogram computation.

use thiserror::Error;

/// Errors reported by the coefficient and matrix-fill operations.
///
/// A Pearson coefficient is mathematically confined to `[-1, 1]`, so
/// failure states are carried out-of-band as variants here rather than as
/// reserved in-band values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelogramError {
    /// The window length is zero; correlation over an empty window is
    /// undefined.
    #[error("window length must be non-zero")]
    EmptyWindow,

    /// A window extends past the end of the signal buffer.
    #[error("window at offset {offset} with length {wlen} exceeds signal length {signal_len}")]
    WindowOutOfBounds {
        offset: usize,
        wlen: usize,
        signal_len: usize,
    },

    /// The output buffer does not match the requested matrix geometry.
    #[error("output buffer holds {actual} values, expected {expected}")]
    OutputSizeMismatch { expected: usize, actual: usize },

    /// One of the two windows has zero variance (a constant sub-signal),
    /// so the correlation coefficient is undefined.
    ///
    /// When a matrix fill reports this, cells written before the failing
    /// pair are left in place; the matrix must be treated as partial.
    #[error("zero variance in window pair ({off_x}, {off_y}) of length {wlen}")]
    DegenerateWindow {
        off_x: usize,
        off_y: usize,
        wlen: usize,
    },
}
