//! Scalar activation functions.

/// ReLU: `out[i] = max(0, x[i])`
///
/// `n` is an element count. `-0.0` and NaN produce `+0.0`.
///
/// # Safety
/// Not marked `unsafe` so it keeps the plain C symbol shape, but callers must
/// pass `x` valid for `n` reads and `out` valid for `n` writes. `out` may equal
/// `x`; any other overlap is unsupported.
#[no_mangle]
#[inline(never)]
pub extern "C" fn scalar_relu(x: *const f32, out: *mut f32, n: usize) {
    for i in 0..n {
        unsafe {
            let v = *x.add(i);
            *out.add(i) = if v > 0.0 { v } else { 0.0 };
        }
    }
}
