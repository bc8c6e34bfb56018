// SPDX-License-Identifier: LGPL-3.0-or-later
//
// A/B reference tests: compare the single-pass coefficient and the matrix
// builders against a naive two-pass Pearson reference over deterministic
// pseudo-random signals, and pin down the end-to-end contract (geometry,
// transform range, failure behavior).

use correlogram_dsp::{
    acf_pearson, coefficient, correlogram, correlogram_delays, CorrelogramAnalyzer,
    CorrelogramError, Transform,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ─── Reference implementation ───────────────────────────────────────────

/// Two-pass Pearson coefficient: subtract the means, then correlate.
/// Numerically independent from the single-pass production code.
fn ref_pearson(x: &[f32], y: &[f32]) -> Option<f64> {
    let n = x.len().min(y.len());
    if n == 0 {
        return None;
    }
    let mean_x: f64 = x[..n].iter().map(|&v| v as f64).sum::<f64>() / n as f64;
    let mean_y: f64 = y[..n].iter().map(|&v| v as f64).sum::<f64>() / n as f64;

    let mut cov = 0.0f64;
    let mut var_x = 0.0f64;
    let mut var_y = 0.0f64;
    for i in 0..n {
        let dx = x[i] as f64 - mean_x;
        let dy = y[i] as f64 - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = var_x.sqrt() * var_y.sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}

/// Reference correlogram over the delay range `1..max_delay`.
fn ref_correlogram(
    signal: &[f32],
    max_delay: usize,
    wlen: usize,
    n_pos: usize,
    transform: Transform,
) -> Vec<f32> {
    let mut out = Vec::with_capacity(max_delay.saturating_sub(1) * n_pos);
    for delay in 1..max_delay {
        for off in 0..n_pos {
            let r = ref_pearson(&signal[off..off + wlen], &signal[off + delay..off + delay + wlen])
                .expect("reference hit a degenerate window");
            out.push(transform.apply(r as f32));
        }
    }
    out
}

fn noise(rng: &mut ChaCha8Rng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

// ─── Coefficient A/B ────────────────────────────────────────────────────

#[test]
fn test_coefficient_matches_reference_on_noise() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x1B39_05F2);
    for _ in 0..50 {
        let len = rng.gen_range(2..512);
        let x = noise(&mut rng, len);
        let y = noise(&mut rng, len);

        let got = coefficient(&x, &y).expect("noise windows are not degenerate");
        let want = ref_pearson(&x, &y).unwrap() as f32;
        assert!(
            (got - want).abs() < 1e-4,
            "coefficient mismatch: got {got}, reference {want}, len {len}"
        );
    }
}

#[test]
fn test_correlogram_matches_reference_on_noise() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x7A11_42C7);
    let signal = noise(&mut rng, 256);
    let (max_delay, wlen, n_pos) = (17, 32, 128);

    for transform in [Transform::RectifiedQuartic, Transform::Rectified, Transform::Raw] {
        let mut got = vec![0.0f32; (max_delay - 1) * n_pos];
        correlogram(&mut got, &signal, max_delay, wlen, n_pos, transform).unwrap();

        let want = ref_correlogram(&signal, max_delay, wlen, n_pos, transform);
        for (i, (&g, &w)) in got.iter().zip(want.iter()).enumerate() {
            assert!(
                (g - w).abs() < 1e-4,
                "cell {i} mismatch under {transform:?}: got {g}, reference {w}"
            );
        }
    }
}

#[test]
fn test_delay_list_matches_reference_rows() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x00C0_FFEE);
    let signal = noise(&mut rng, 200);
    let delays = [2usize, 5, 11, 40];
    let (wlen, n_pos) = (24, 100);

    let mut got = vec![0.0f32; delays.len() * n_pos];
    correlogram_delays(&mut got, &signal, &delays, wlen, n_pos, Transform::Raw).unwrap();

    for (i, &delay) in delays.iter().enumerate() {
        for t in 0..n_pos {
            let want = ref_pearson(&signal[t..t + wlen], &signal[t + delay..t + delay + wlen])
                .unwrap() as f32;
            let got_cell = got[i * n_pos + t];
            assert!(
                (got_cell - want).abs() < 1e-4,
                "delay {delay} position {t}: got {got_cell}, reference {want}"
            );
        }
    }
}

#[test]
fn test_acf_pearson_matches_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xACF0);
    let signal = noise(&mut rng, 128);
    let mut dst = vec![0.0f32; 64];
    acf_pearson(&mut dst, &signal);

    assert_eq!(dst[0], 1.0);
    for m in 1..dst.len() {
        let want = ref_pearson(&signal[..signal.len() - m], &signal[m..]).unwrap() as f32;
        assert!(
            (dst[m] - want).abs() < 1e-4,
            "lag {m}: got {}, reference {want}",
            dst[m]
        );
    }
}

// ─── End-to-end contract ────────────────────────────────────────────────

#[test]
fn test_periodic_signal_end_to_end() {
    // Period-4 signal: window 0 and window 4 are identical, so the
    // delay-4 cell is 1 both before and after the quartic transform.
    let signal = [1.0f32, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
    let mut cgram = [0.0f32; 4];
    correlogram(&mut cgram, &signal, 5, 4, 1, Transform::default()).unwrap();
    assert!((cgram[3] - 1.0).abs() < 1e-6, "delay-4 cell: {}", cgram[3]);
}

#[test]
fn test_degenerate_window_end_to_end() {
    // The leading constant plateau has zero variance: the build fails
    // with a typed error instead of producing a number.
    let signal = [5.0f32, 5.0, 5.0, 5.0, 1.0, 2.0, 3.0, 4.0];
    let mut cgram = [0.0f32; 1];
    let err = correlogram_delays(&mut cgram, &signal, &[4], 4, 1, Transform::default())
        .unwrap_err();
    assert_eq!(
        err,
        CorrelogramError::DegenerateWindow {
            off_x: 0,
            off_y: 4,
            wlen: 4
        }
    );
}

#[test]
fn test_dimension_contract() {
    // Range builder with delays 1..D over T positions writes (D-1)*T
    // cells, every one of them.
    let mut rng = ChaCha8Rng::seed_from_u64(0xD1_3352);
    let signal = noise(&mut rng, 96);
    let (max_delay, wlen, n_pos) = (9, 16, 64);

    let mut cgram = vec![f32::NAN; (max_delay - 1) * n_pos];
    correlogram(&mut cgram, &signal, max_delay, wlen, n_pos, Transform::default()).unwrap();
    assert!(
        cgram.iter().all(|v| v.is_finite()),
        "every cell must be written"
    );
}

#[test]
fn test_default_transform_confines_cells_to_unit_interval() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x0123_4567);
    let signal = noise(&mut rng, 160);
    let n_pos = 80;
    let mut cgram = vec![0.0f32; 31 * n_pos];
    correlogram(&mut cgram, &signal, 32, 48, n_pos, Transform::default()).unwrap();
    for (i, &v) in cgram.iter().enumerate() {
        assert!((0.0..=1.0).contains(&v), "cell {i} = {v}");
    }
}

#[test]
fn test_analyzer_round_trip_matches_builders() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xBEE5);
    let signal = noise(&mut rng, 144);

    let mut analyzer = CorrelogramAnalyzer::new(24);
    analyzer.set_max_delay(13);
    let n_pos = analyzer.positions_for(signal.len());
    let owned = analyzer.process(&signal).unwrap();

    let mut expected = vec![0.0f32; 12 * n_pos];
    correlogram(&mut expected, &signal, 13, 24, n_pos, Transform::default()).unwrap();
    assert_eq!(owned.values(), &expected[..]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_builders_match_sequential_end_to_end() {
    use correlogram_dsp::{correlogram_delays_par, correlogram_par};

    let mut rng = ChaCha8Rng::seed_from_u64(0x9A9A);
    let signal = noise(&mut rng, 300);
    let (max_delay, wlen, n_pos) = (25, 40, 200);

    let mut seq = vec![0.0f32; (max_delay - 1) * n_pos];
    let mut par = vec![0.0f32; (max_delay - 1) * n_pos];
    correlogram(&mut seq, &signal, max_delay, wlen, n_pos, Transform::default()).unwrap();
    correlogram_par(&mut par, &signal, max_delay, wlen, n_pos, Transform::default()).unwrap();
    assert_eq!(seq, par, "sequential and parallel range builders must agree");

    let delays = [1usize, 3, 9, 24];
    let mut seq = vec![0.0f32; delays.len() * n_pos];
    let mut par = vec![0.0f32; delays.len() * n_pos];
    correlogram_delays(&mut seq, &signal, &delays, wlen, n_pos, Transform::default()).unwrap();
    correlogram_delays_par(&mut par, &signal, &delays, wlen, n_pos, Transform::default()).unwrap();
    assert_eq!(seq, par, "sequential and parallel list builders must agree");
}
