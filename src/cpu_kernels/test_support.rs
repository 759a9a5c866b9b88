//! Shared helpers for the per-ISA kernel tests.

use crate::config::ReluUKernelFn as UKernel;
use crate::params::ReluParams;

/// Sentinel written past the logical end of the output to catch overruns.
pub(crate) const GUARD: f32 = -12345.0;

/// `max(x, 0)` with `maxps` operand semantics (`-0.0` and NaN become `+0.0`).
pub(crate) fn reference_relu(input: &[f32]) -> Vec<f32> {
    input.iter().map(|&v| if v > 0.0 { v } else { 0.0 }).collect()
}

/// Deterministic mixed-sign data with an exact signed-zero in the pattern.
pub(crate) fn mixed_input(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| match i % 5 {
            0 => -(i as f32) - 0.5,
            1 => i as f32 * 0.25,
            2 => -0.0,
            3 => (i as f32).sin() * 10.0,
            _ => -(i as f32).cos(),
        })
        .collect()
}

/// Sizes that exercise every path of a kernel with the given lanes and tile.
pub(crate) fn boundary_sizes(lanes: usize, tile: usize) -> Vec<usize> {
    let mut sizes = vec![
        1,
        lanes.saturating_sub(1).max(1),
        lanes,
        lanes + 1,
        2 * lanes - 1,
        tile,
        tile + 1,
        tile + lanes,
        tile + lanes - 1,
        2 * tile - 1,
        3 * tile + lanes / 2 + 1,
    ];
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

/// Run `ukernel` out of place; the output carries `guard` trailing sentinels.
pub(crate) fn run_guarded(ukernel: UKernel, input: &[f32], guard: usize) -> Vec<f32> {
    let n = input.len();
    let mut output = vec![GUARD; n + guard];
    let params = ReluParams::new();
    unsafe {
        ukernel(
            n * std::mem::size_of::<f32>(),
            input.as_ptr(),
            output.as_mut_ptr(),
            &params,
        );
    }
    output
}

pub(crate) fn run_inplace(ukernel: UKernel, input: &[f32]) -> Vec<f32> {
    let mut data = input.to_vec();
    let ptr = data.as_mut_ptr();
    let params = ReluParams::new();
    unsafe {
        ukernel(data.len() * std::mem::size_of::<f32>(), ptr, ptr, &params);
    }
    data
}

/// Run `ukernel` with input and output starting 4 bytes past an 8-byte boundary,
/// the weakest alignment an `f32` slice guarantees.
pub(crate) fn run_odd_aligned(ukernel: UKernel, input: &[f32]) -> Vec<f32> {
    let n = input.len();
    let words = n / 2 + 2;
    let mut src = vec![0.0f64; words];
    let mut dst = vec![0.0f64; words];
    let params = ReluParams::new();
    unsafe {
        let x = (src.as_mut_ptr() as *mut f32).add(1);
        let y = (dst.as_mut_ptr() as *mut f32).add(1);
        assert_eq!(y as usize % 8, 4);
        std::ptr::copy_nonoverlapping(input.as_ptr(), x, n);
        ukernel(n * std::mem::size_of::<f32>(), x, y, &params);
        std::slice::from_raw_parts(y, n).to_vec()
    }
}

/// Check one variant against the reference for every boundary size, out of
/// place and in place, and check the tail never writes past `n`. Tails of two
/// and three elements are also run at 4-mod-8 addresses.
pub(crate) fn check_ukernel(label: &str, ukernel: UKernel, lanes: usize, tile: usize) {
    for n in boundary_sizes(lanes, tile) {
        let input = mixed_input(n);
        let expected = reference_relu(&input);

        let output = run_guarded(ukernel, &input, lanes);
        assert_bits_eq(&output[..n], &expected, &format!("{label} n={n}"));
        assert!(
            output[n..].iter().all(|&v| v == GUARD),
            "{label} n={n}: wrote past the end: {:?}",
            &output[n..]
        );

        let inplace = run_inplace(ukernel, &input);
        assert_bits_eq(&inplace, &expected, &format!("{label} in-place n={n}"));
    }

    for rem in [2, 3] {
        for n in [rem, lanes + rem, tile + rem] {
            let input = mixed_input(n);
            let expected = reference_relu(&input);
            let output = run_odd_aligned(ukernel, &input);
            assert_bits_eq(&output, &expected, &format!("{label} odd-aligned n={n}"));
        }
    }
}

/// Bitwise comparison so `+0.0` and `-0.0` are told apart.
pub(crate) fn assert_bits_eq(actual: &[f32], expected: &[f32], label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a.to_bits(),
            e.to_bits(),
            "{label}[{i}]: got {a}, expected {e}"
        );
    }
}
