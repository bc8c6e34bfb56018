// SPDX-License-Identifier: LGPL-3.0-or-later

//! Correlogram matrix builders.
//!
//! A correlogram is a row-major matrix with one row per delay and one
//! column per window position: cell `(i, t)` holds the transformed Pearson
//! coefficient between the window starting at `t` and the window starting
//! at `t + delay[i]`. Two builders are provided:
//!
//! - [`correlogram_delays`] - one row per entry of an explicit delay list
//! - [`correlogram`] - rows for the contiguous delay range `1..max_delay`
//!
//! Both write into a caller-allocated buffer and never resize it. Geometry
//! and bounds are validated before the first write; a degenerate (zero
//! variance) window aborts the fill immediately, leaving earlier cells in
//! place, so on error the matrix contents are partial.

use crate::coefficient::windowed_coefficient;
use crate::error::CorrelogramError;
use crate::transform::Transform;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Check the output geometry and the worst-case window placement.
///
/// `n_rows * n_pos` cells must fit `cgram` exactly, and the rightmost
/// delayed window, at `(n_pos - 1) + max_delay`, must fit the signal.
fn validate(
    cgram_len: usize,
    signal_len: usize,
    max_delay: usize,
    wlen: usize,
    n_rows: usize,
    n_pos: usize,
) -> Result<(), CorrelogramError> {
    if wlen == 0 {
        return Err(CorrelogramError::EmptyWindow);
    }
    let expected = n_rows * n_pos;
    if cgram_len != expected {
        return Err(CorrelogramError::OutputSizeMismatch {
            expected,
            actual: cgram_len,
        });
    }
    if n_rows == 0 || n_pos == 0 {
        return Ok(());
    }
    let last = (n_pos - 1).saturating_add(max_delay);
    if last.checked_add(wlen).map_or(true, |end| end > signal_len) {
        return Err(CorrelogramError::WindowOutOfBounds {
            offset: last,
            wlen,
            signal_len,
        });
    }
    Ok(())
}

/// Fill one matrix row: windows at `t` vs `t + delay` for each position.
fn fill_row(
    row: &mut [f32],
    signal: &[f32],
    delay: usize,
    wlen: usize,
    transform: Transform,
) -> Result<(), CorrelogramError> {
    for (t, cell) in row.iter_mut().enumerate() {
        let r = windowed_coefficient(signal, t, t + delay, wlen)?;
        *cell = transform.apply(r);
    }
    Ok(())
}

/// Fill a correlogram for an explicit list of delays.
///
/// `cgram` must hold exactly `delays.len() * n_pos` values; after a
/// successful fill, `cgram[i * n_pos + t]` is the transformed coefficient
/// between the `wlen`-sized windows at `t` and `t + delays[i]`.
///
/// Delay `0` is accepted and yields the self-correlation of each window
/// (1 before the transform, unless the window is degenerate).
///
/// # Errors
///
/// Geometry problems ([`CorrelogramError::EmptyWindow`],
/// [`CorrelogramError::OutputSizeMismatch`],
/// [`CorrelogramError::WindowOutOfBounds`]) are reported before anything is
/// written. [`CorrelogramError::DegenerateWindow`] aborts mid-fill and
/// leaves the matrix partially written.
///
/// # Examples
///
/// ```
/// use correlogram_dsp::{correlogram_delays, Transform};
///
/// let signal = [1.0f32, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
/// let delays = [4];
/// let mut cgram = [0.0f32; 1];
/// correlogram_delays(&mut cgram, &signal, &delays, 4, 1, Transform::default()).unwrap();
/// assert!((cgram[0] - 1.0).abs() < 1e-6);
/// ```
pub fn correlogram_delays(
    cgram: &mut [f32],
    signal: &[f32],
    delays: &[usize],
    wlen: usize,
    n_pos: usize,
    transform: Transform,
) -> Result<(), CorrelogramError> {
    let max_delay = delays.iter().copied().max().unwrap_or(0);
    validate(cgram.len(), signal.len(), max_delay, wlen, delays.len(), n_pos)?;
    if n_pos == 0 {
        return Ok(());
    }
    for (row, &delay) in cgram.chunks_exact_mut(n_pos).zip(delays.iter()) {
        fill_row(row, signal, delay, wlen, transform)?;
    }
    Ok(())
}

/// Fill a correlogram for the contiguous delay range `1..max_delay`.
///
/// Delay 0 (self-correlation, trivially 1) is skipped, so `cgram` must
/// hold exactly `(max_delay - 1) * n_pos` values; after a successful fill,
/// `cgram[(delay - 1) * n_pos + off]` is the transformed coefficient
/// between the windows at `off` and `off + delay`. `max_delay <= 1` with
/// an empty output buffer is a valid no-op.
///
/// Errors behave as in [`correlogram_delays`].
pub fn correlogram(
    cgram: &mut [f32],
    signal: &[f32],
    max_delay: usize,
    wlen: usize,
    n_pos: usize,
    transform: Transform,
) -> Result<(), CorrelogramError> {
    let n_rows = max_delay.saturating_sub(1);
    validate(cgram.len(), signal.len(), n_rows, wlen, n_rows, n_pos)?;
    if n_pos == 0 {
        return Ok(());
    }
    for (i, row) in cgram.chunks_exact_mut(n_pos).enumerate() {
        fill_row(row, signal, i + 1, wlen, transform)?;
    }
    Ok(())
}

/// Row-parallel variant of [`correlogram_delays`].
///
/// Rows are filled concurrently; on success the result is identical to the
/// sequential builder. Rows in flight when a degenerate window is hit run
/// to completion, and the first error in row order is reported; on error
/// the matrix contents are partial, exactly as in the sequential contract.
#[cfg(feature = "parallel")]
pub fn correlogram_delays_par(
    cgram: &mut [f32],
    signal: &[f32],
    delays: &[usize],
    wlen: usize,
    n_pos: usize,
    transform: Transform,
) -> Result<(), CorrelogramError> {
    let max_delay = delays.iter().copied().max().unwrap_or(0);
    validate(cgram.len(), signal.len(), max_delay, wlen, delays.len(), n_pos)?;
    if n_pos == 0 {
        return Ok(());
    }
    cgram
        .par_chunks_exact_mut(n_pos)
        .zip(delays.par_iter())
        .map(|(row, &delay)| fill_row(row, signal, delay, wlen, transform))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Row-parallel variant of [`correlogram`].
///
/// Same relaxed abort semantics as [`correlogram_delays_par`].
#[cfg(feature = "parallel")]
pub fn correlogram_par(
    cgram: &mut [f32],
    signal: &[f32],
    max_delay: usize,
    wlen: usize,
    n_pos: usize,
    transform: Transform,
) -> Result<(), CorrelogramError> {
    let n_rows = max_delay.saturating_sub(1);
    validate(cgram.len(), signal.len(), n_rows, wlen, n_rows, n_pos)?;
    if n_pos == 0 {
        return Ok(());
    }
    cgram
        .par_chunks_exact_mut(n_pos)
        .enumerate()
        .map(|(i, row)| fill_row(row, signal, i + 1, wlen, transform))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
