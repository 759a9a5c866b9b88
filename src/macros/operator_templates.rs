/// Defines one ReLU micro-kernel: `y[i] = max(x[i], 0)`.
///
/// The generated function follows the shared unary micro-kernel calling convention:
/// `n` is the batch size in **bytes**, `x`/`y` point at `n / size_of::<elem>()`
/// elements and `params` is the opaque parameter block. `y` may equal `x`.
///
/// Body layout:
/// 1. main loop, `$unroll` vectors per iteration, no branches besides the loop test
/// 2. single-vector loop draining whole vectors left by an unrolled main loop
/// 3. remainder (`0 < r < lanes`): one full-width `tail_load`, one `max`,
///    then `store_partial` of the `r` valid lanes. The load may reach back over
///    already processed elements when the batch holds at least one whole vector.
///
/// With a `$feature` literal the function carries `#[target_feature(enable = ...)]`.
#[macro_export]
macro_rules! define_relu_ukernel {
    ($isa:ident, $elem:ident, $name:ident, $unroll:literal, $feature:literal) => {
        #[doc = concat!(
            "ReLU micro-kernel for `", stringify!($isa), "`, ",
            stringify!($unroll), " vector(s) per main-loop iteration."
        )]
        ///
        /// # Safety
        /// `n` must be a non-zero multiple of the element size, `x` and `y` must be valid
        /// for `n` bytes of reads and writes respectively, and `y` must either equal `x`
        /// or not overlap it. The CPU must support the target feature of this variant.
        #[target_feature(enable = $feature)]
        pub unsafe fn $name(
            n: usize,
            x: *const $elem,
            y: *mut $elem,
            params: &$crate::params::ReluParams,
        ) {
            $crate::define_relu_ukernel!(@body $isa, $elem, $unroll, n, x, y, params)
        }
    };
    ($isa:ident, $elem:ident, $name:ident, $unroll:literal) => {
        #[doc = concat!(
            "ReLU micro-kernel for `", stringify!($isa), "`, ",
            stringify!($unroll), " element(s) per main-loop iteration."
        )]
        ///
        /// # Safety
        /// `n` must be a non-zero multiple of the element size, `x` and `y` must be valid
        /// for `n` bytes of reads and writes respectively, and `y` must either equal `x`
        /// or not overlap it.
        #[inline]
        pub unsafe fn $name(
            n: usize,
            x: *const $elem,
            y: *mut $elem,
            params: &$crate::params::ReluParams,
        ) {
            $crate::define_relu_ukernel!(@body $isa, $elem, $unroll, n, x, y, params)
        }
    };
    (@body $isa:ident, $elem:ident, $unroll:literal, $n:ident, $x:ident, $y:ident, $params:ident) => {{
        debug_assert!($n != 0);
        debug_assert!($n % ::core::mem::size_of::<$elem>() == 0);
        debug_assert!(!$x.is_null());
        debug_assert!(!$y.is_null());
        let _ = $params;

        const LANES: usize = $crate::simd_primitive!($isa, $elem, lanes);
        const TILE: usize = LANES * $unroll;
        const ELEM_BYTES: usize = ::core::mem::size_of::<$elem>();

        let whole_vector = $n >= LANES * ELEM_BYTES;
        let mut n = $n;
        let mut x = $x;
        let mut y = $y;

        #[allow(unused_unsafe)]
        let vzero = unsafe { $crate::simd_primitive!($isa, $elem, zero) };

        while n >= TILE * ELEM_BYTES {
            for u in 0..$unroll {
                #[allow(unused_unsafe)]
                unsafe {
                    let vacc = $crate::simd_primitive!($isa, $elem, load, x.add(u * LANES));
                    let vacc = $crate::simd_primitive!($isa, $elem, max, vacc, vzero);
                    $crate::simd_primitive!($isa, $elem, store, y.add(u * LANES), vacc);
                }
            }
            x = x.add(TILE);
            y = y.add(TILE);
            n -= TILE * ELEM_BYTES;
        }

        if $unroll > 1 {
            while n >= LANES * ELEM_BYTES {
                #[allow(unused_unsafe)]
                unsafe {
                    let vacc = $crate::simd_primitive!($isa, $elem, load, x);
                    let vacc = $crate::simd_primitive!($isa, $elem, max, vacc, vzero);
                    $crate::simd_primitive!($isa, $elem, store, y, vacc);
                }
                x = x.add(LANES);
                y = y.add(LANES);
                n -= LANES * ELEM_BYTES;
            }
        }

        if n != 0 {
            let remainder = n / ELEM_BYTES;
            debug_assert!(remainder < LANES);
            #[allow(unused_unsafe)]
            unsafe {
                let vacc = $crate::simd_primitive!($isa, $elem, tail_load, x, remainder, whole_vector);
                let vacc = $crate::simd_primitive!($isa, $elem, max, vacc, vzero);
                $crate::simd_primitive!($isa, $elem, store_partial, y, vacc, remainder);
            }
        }
    }};
}
