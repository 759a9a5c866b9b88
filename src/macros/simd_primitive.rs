/// Maps abstract SIMD operations to concrete hardware intrinsics or fallback implementations.
///
/// # Architecture
/// This macro is the "Layer 1" of the macro architecture. It provides a unified interface
/// for:
/// - Architecture constants (lanes)
/// - Compute primitives (zero, load, store, max)
/// - Remainder primitives (tail_load, store_partial)
///
/// Every arm except the constants must be expanded inside an `unsafe` context.
///
/// # Remainder primitives
/// `tail_load` reads `n < lanes` elements into the low lanes of a full vector without
/// touching memory past `p + n`. When `back` is true the caller guarantees `lanes - n`
/// valid elements before `p`; SSE2 and NEON then load the final full window ending at
/// `p + n` and shift it down, otherwise they stage the remainder into a zeroed window.
/// `store_partial` writes exactly the low `n` lanes, testing the bits of `n` from
/// `lanes / 2` down to `1` and shifting the upper half of the vector down after each
/// partial store. Partial stores go through unaligned intrinsics: `p` is only
/// `f32`-aligned.
///
/// # Max semantics
/// `max` is always expanded as `max(x, zero)`. On x86 `maxps` returns the second
/// operand when the operands compare equal or unordered, so `-0.0` and NaN both
/// become `+0.0`. NEON `fmax` orders `-0.0 < +0.0` and propagates NaN. The scalar
/// arm mirrors x86.
///
/// # Usage
/// ```ignore
/// simd_primitive!(scalar, f32, max, a, b) // -> if a > b { a } else { b }
/// simd_primitive!(avx, f32, max, a, b)    // -> _mm256_max_ps(a, b)
/// ```
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // Scalar Fallback (Baseline)
    // ========================================================================

    (scalar, f32, lanes) => { 1 };
    (scalar, f32, zero) => { 0.0f32 };
    (scalar, f32, load, $p:expr) => { *$p };
    (scalar, f32, store, $p:expr, $v:expr) => { *$p = $v };
    (scalar, f32, max, $a:expr, $b:expr) => {{
        let (a, b): (f32, f32) = ($a, $b);
        if a > b { a } else { b }
    }};
    // One lane: the remainder is always empty, these only keep the template uniform.
    (scalar, f32, tail_load, $p:expr, $n:expr, $back:expr) => {{
        let _ = $back;
        *$p
    }};
    (scalar, f32, store_partial, $p:expr, $v:expr, $n:expr) => { *$p = $v };

    // ========================================================================
    // SSE2 Implementation
    // ========================================================================

    (sse2, f32, lanes) => { 4 };
    (sse2, f32, zero) => { std::arch::x86_64::_mm_setzero_ps() };
    (sse2, f32, load, $p:expr) => { std::arch::x86_64::_mm_loadu_ps($p) };
    (sse2, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm_storeu_ps($p, $v) };
    (sse2, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm_max_ps($a, $b) };

    (sse2, f32, tail_load, $p:expr, $n:expr, $back:expr) => {{
        let p: *const f32 = $p;
        let n: usize = $n;
        if $back {
            let window = std::arch::x86_64::_mm_castps_si128(
                std::arch::x86_64::_mm_loadu_ps(p.sub(4 - n)),
            );
            std::arch::x86_64::_mm_castsi128_ps(match n {
                1 => std::arch::x86_64::_mm_srli_si128::<12>(window),
                2 => std::arch::x86_64::_mm_srli_si128::<8>(window),
                _ => std::arch::x86_64::_mm_srli_si128::<4>(window),
            })
        } else {
            let stage = $crate::cpu_kernels::stage_remainder::<4>(p, n);
            std::arch::x86_64::_mm_loadu_ps(stage.as_ptr())
        }
    }};
    (sse2, f32, store_partial, $p:expr, $v:expr, $n:expr) => {{
        let n: usize = $n;
        let mut v = $v;
        let mut p: *mut f32 = $p;
        if n & 2 != 0 {
            std::arch::x86_64::_mm_storeu_si64(p as *mut u8, std::arch::x86_64::_mm_castps_si128(v));
            v = std::arch::x86_64::_mm_movehl_ps(v, v);
            p = p.add(2);
        }
        if n & 1 != 0 {
            std::arch::x86_64::_mm_store_ss(p, v);
        }
    }};

    // ========================================================================
    // AVX Implementation
    // ========================================================================

    (avx, f32, lanes) => { 8 };
    (avx, f32, zero) => { std::arch::x86_64::_mm256_setzero_ps() };
    (avx, f32, load, $p:expr) => { std::arch::x86_64::_mm256_loadu_ps($p) };
    (avx, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm256_storeu_ps($p, $v) };
    (avx, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm256_max_ps($a, $b) };

    // vmaskmovps does not access masked-off lanes.
    (avx, f32, tail_load, $p:expr, $n:expr, $back:expr) => {{
        let _ = $back;
        let n: usize = $n;
        let mask = std::arch::x86_64::_mm256_loadu_si256(
            $crate::cpu_kernels::avx::REMAINDER_MASK.as_ptr().add(8 - n)
                as *const std::arch::x86_64::__m256i,
        );
        std::arch::x86_64::_mm256_maskload_ps($p, mask)
    }};
    (avx, f32, store_partial, $p:expr, $v:expr, $n:expr) => {{
        let n: usize = $n;
        let v = $v;
        let mut p: *mut f32 = $p;
        let mut lo = std::arch::x86_64::_mm256_castps256_ps128(v);
        if n & 4 != 0 {
            std::arch::x86_64::_mm_storeu_ps(p, lo);
            lo = std::arch::x86_64::_mm256_extractf128_ps::<1>(v);
            p = p.add(4);
        }
        if n & 2 != 0 {
            std::arch::x86_64::_mm_storeu_si64(p as *mut u8, std::arch::x86_64::_mm_castps_si128(lo));
            lo = std::arch::x86_64::_mm_movehl_ps(lo, lo);
            p = p.add(2);
        }
        if n & 1 != 0 {
            std::arch::x86_64::_mm_store_ss(p, lo);
        }
    }};

    // ========================================================================
    // AVX-512 Implementation
    // ========================================================================

    (avx512, f32, lanes) => { 16 };
    (avx512, f32, zero) => { std::arch::x86_64::_mm512_setzero_ps() };
    (avx512, f32, load, $p:expr) => { std::arch::x86_64::_mm512_loadu_ps($p) };
    (avx512, f32, store, $p:expr, $v:expr) => { std::arch::x86_64::_mm512_storeu_ps($p, $v) };
    (avx512, f32, max, $a:expr, $b:expr) => { std::arch::x86_64::_mm512_max_ps($a, $b) };

    // Lane masks replace the halving chain: one masked load, one masked store.
    (avx512, f32, tail_load, $p:expr, $n:expr, $back:expr) => {{
        let _ = $back;
        let mask = ((1u32 << $n) - 1) as std::arch::x86_64::__mmask16;
        std::arch::x86_64::_mm512_maskz_loadu_ps(mask, $p)
    }};
    (avx512, f32, store_partial, $p:expr, $v:expr, $n:expr) => {{
        let mask = ((1u32 << $n) - 1) as std::arch::x86_64::__mmask16;
        std::arch::x86_64::_mm512_mask_storeu_ps($p, mask, $v)
    }};

    // ========================================================================
    // NEON Implementation (aarch64)
    // ========================================================================

    (neon, f32, lanes) => { 4 };
    (neon, f32, zero) => { std::arch::aarch64::vdupq_n_f32(0.0) };
    (neon, f32, load, $p:expr) => { std::arch::aarch64::vld1q_f32($p) };
    (neon, f32, store, $p:expr, $v:expr) => { std::arch::aarch64::vst1q_f32($p, $v) };
    (neon, f32, max, $a:expr, $b:expr) => { std::arch::aarch64::vmaxq_f32($a, $b) };

    (neon, f32, tail_load, $p:expr, $n:expr, $back:expr) => {{
        let p: *const f32 = $p;
        let n: usize = $n;
        if $back {
            let window = std::arch::aarch64::vld1q_f32(p.sub(4 - n));
            let zero = std::arch::aarch64::vdupq_n_f32(0.0);
            match n {
                1 => std::arch::aarch64::vextq_f32::<3>(window, zero),
                2 => std::arch::aarch64::vextq_f32::<2>(window, zero),
                _ => std::arch::aarch64::vextq_f32::<1>(window, zero),
            }
        } else {
            let stage = $crate::cpu_kernels::stage_remainder::<4>(p, n);
            std::arch::aarch64::vld1q_f32(stage.as_ptr())
        }
    }};
    (neon, f32, store_partial, $p:expr, $v:expr, $n:expr) => {{
        let n: usize = $n;
        let v = $v;
        let mut p: *mut f32 = $p;
        let mut lo = std::arch::aarch64::vget_low_f32(v);
        if n & 2 != 0 {
            std::arch::aarch64::vst1_f32(p, lo);
            lo = std::arch::aarch64::vget_high_f32(v);
            p = p.add(2);
        }
        if n & 1 != 0 {
            std::arch::aarch64::vst1_lane_f32::<0>(p, lo);
        }
    }};
}
