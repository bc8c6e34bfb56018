// SPDX-License-Identifier: LGPL-3.0-or-later

//! Pearson correlation coefficient of signal windows.
//!
//! The coefficient is computed in a single pass using the sum-of-products
//! form: the five running sums Σx, Σy, Σxy, Σx², Σy² are accumulated in
//! `f64`, then combined into `cov / (σx · σy)`. This trades a little
//! numerical stability for one pass over the data, which is acceptable for
//! the bounded window sizes used in correlogram analysis.

use multiversion::multiversion;

use crate::error::CorrelogramError;

/// Running sums of a paired single pass over two equal-length windows.
struct PairedSums {
    s_x: f64,
    s_y: f64,
    s_xy: f64,
    s_xx: f64,
    s_yy: f64,
}

/// Accumulate the paired sums over `x` and `y`.
///
/// Both slices must have the same length; the caller guarantees this.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
fn paired_sums(x: &[f32], y: &[f32]) -> PairedSums {
    let mut s = PairedSums {
        s_x: 0.0,
        s_y: 0.0,
        s_xy: 0.0,
        s_xx: 0.0,
        s_yy: 0.0,
    };
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let xi = xi as f64;
        let yi = yi as f64;
        s.s_x += xi;
        s.s_y += yi;
        s.s_xy += xi * yi;
        s.s_xx += xi * xi;
        s.s_yy += yi * yi;
    }
    s
}

/// Combine paired sums into a Pearson coefficient.
///
/// Returns `None` when the product of standard deviations is zero, i.e.
/// at least one window is constant and the coefficient is undefined.
fn pearson_from_sums(s: &PairedSums, n: usize) -> Option<f32> {
    let n = n as f64;
    let cov = s.s_xy - s.s_x * s.s_y / n;
    let p_std = (s.s_xx - s.s_x * s.s_x / n).sqrt() * (s.s_yy - s.s_y * s.s_y / n).sqrt();
    if p_std == 0.0 {
        return None;
    }
    Some((cov / p_std) as f32)
}

/// Compute the Pearson correlation coefficient of two sample buffers.
///
/// The coefficient is computed over the first `min(x.len(), y.len())`
/// samples and lies in `[-1, 1]`.
///
/// # Errors
///
/// - [`CorrelogramError::EmptyWindow`] if either buffer is empty.
/// - [`CorrelogramError::DegenerateWindow`] if either buffer is constant
///   over the compared range (zero variance).
///
/// # Examples
///
/// ```
/// use correlogram_dsp::coefficient;
///
/// let x = [1.0f32, 2.0, 3.0, 4.0];
/// let y: Vec<f32> = x.iter().map(|v| -v).collect();
/// let r = coefficient(&x, &y).unwrap();
/// assert!((r + 1.0).abs() < 1e-6);
/// ```
pub fn coefficient(x: &[f32], y: &[f32]) -> Result<f32, CorrelogramError> {
    let n = x.len().min(y.len());
    if n == 0 {
        return Err(CorrelogramError::EmptyWindow);
    }
    let sums = paired_sums(&x[..n], &y[..n]);
    pearson_from_sums(&sums, n).ok_or(CorrelogramError::DegenerateWindow {
        off_x: 0,
        off_y: 0,
        wlen: n,
    })
}

/// Compute the Pearson correlation coefficient between two windows of a
/// shared signal buffer.
///
/// The windows start at `off_x` and `off_y` and both have length `wlen`;
/// they may overlap. The coefficient lies in `[-1, 1]`.
///
/// # Errors
///
/// - [`CorrelogramError::EmptyWindow`] if `wlen == 0`.
/// - [`CorrelogramError::WindowOutOfBounds`] if either window extends past
///   the end of `signal`.
/// - [`CorrelogramError::DegenerateWindow`] if either window is constant
///   (zero variance), e.g. a stretch of silence or DC.
///
/// # Examples
///
/// ```
/// use correlogram_dsp::windowed_coefficient;
///
/// // A period-4 signal correlates perfectly with itself 4 samples later.
/// let signal = [1.0f32, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
/// let r = windowed_coefficient(&signal, 0, 4, 4).unwrap();
/// assert!((r - 1.0).abs() < 1e-6);
/// ```
pub fn windowed_coefficient(
    signal: &[f32],
    off_x: usize,
    off_y: usize,
    wlen: usize,
) -> Result<f32, CorrelogramError> {
    if wlen == 0 {
        return Err(CorrelogramError::EmptyWindow);
    }
    for offset in [off_x, off_y] {
        if offset
            .checked_add(wlen)
            .map_or(true, |end| end > signal.len())
        {
            return Err(CorrelogramError::WindowOutOfBounds {
                offset,
                wlen,
                signal_len: signal.len(),
            });
        }
    }

    let x = &signal[off_x..off_x + wlen];
    let y = &signal[off_y..off_y + wlen];
    let sums = paired_sums(x, y);
    pearson_from_sums(&sums, wlen).ok_or(CorrelogramError::DegenerateWindow { off_x, off_y, wlen })
}
