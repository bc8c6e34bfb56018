// SPDX-License-Identifier: LGPL-3.0-or-later

//! Autocorrelation function estimates.
//!
//! Two normalized views of a signal's self-similarity per lag:
//!
//! - [`acf`] - energy-normalized autocorrelation (lag 0 = 1)
//! - [`acf_pearson`] - Pearson coefficient of the overlapping halves
//!
//! Both write one value per lag into a caller-provided buffer;
//! `dst.len()` determines how many lags are computed.

use crate::coefficient::coefficient;

/// Normalized autocorrelation estimate of `signal`.
///
/// `dst[m] = Σᵢ signal[i]·signal[i+m] / Σᵢ signal[i]²` for `m >= 1`, and
/// `dst[0] = 1`. Lags at or beyond the signal length, and lags of a
/// zero-energy signal, yield `0.0`. An empty signal zero-fills `dst`.
pub fn acf(dst: &mut [f32], signal: &[f32]) {
    if dst.is_empty() {
        return;
    }
    if signal.is_empty() {
        dst.fill(0.0);
        return;
    }

    let norm: f64 = signal.iter().map(|&v| (v as f64) * (v as f64)).sum();
    dst[0] = 1.0;
    for (m, out) in dst.iter_mut().enumerate().skip(1) {
        let overlap = signal.len().saturating_sub(m);
        let s: f64 = (0..overlap)
            .map(|i| (signal[i] as f64) * (signal[i + m] as f64))
            .sum();
        *out = if s == 0.0 { 0.0 } else { (s / norm) as f32 };
    }
}

/// Autocorrelation estimate via per-lag Pearson coefficients.
///
/// `dst[m]` holds the Pearson correlation of `signal[..len-m]` against
/// `signal[m..]`, and `dst[0] = 1`. Lags whose overlapping halves are too
/// short or constant (undefined coefficient) yield `0.0`; an empty signal
/// zero-fills `dst`.
///
/// Unlike [`windowed_coefficient`](crate::windowed_coefficient), the
/// compared segments shrink as the lag grows, so values at large lags are
/// estimated from few samples.
pub fn acf_pearson(dst: &mut [f32], signal: &[f32]) {
    if dst.is_empty() {
        return;
    }
    if signal.is_empty() {
        dst.fill(0.0);
        return;
    }

    dst[0] = 1.0;
    for (m, out) in dst.iter_mut().enumerate().skip(1) {
        if m >= signal.len() {
            *out = 0.0;
            continue;
        }
        let a = &signal[..signal.len() - m];
        let b = &signal[m..];
        *out = coefficient(a, b).unwrap_or(0.0);
    }
}
