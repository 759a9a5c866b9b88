//! # CPU Kernel Macro Architecture
//!
//! 3-layer macro system for ISA-dispatched SIMD kernels:
//!
//! ## Layer 1: `simd_primitive!` (src/macros/simd_primitive.rs)
//! Maps abstract ops to hardware intrinsics: `simd_primitive!(avx, f32, max, a, b)`.
//! Covers scalar/sse2/avx/avx512/neon × f32.
//!
//! ## Layer 2: `define_relu_ukernel!` (src/macros/operator_templates.rs)
//! The kernel body parameterized by ISA, element and unroll factor.
//!
//! ## Layer 3: `expand_isa_impls!` (src/macros/expand.rs)
//! Generates per-ISA modules: `expand_isa_impls!(avx_f32, avx, f32, feature = "avx", [...])`.
//!
//! ## Variants
//!
//! | ISA | Lanes | Module | Variants |
//! |---|---|---|---|
//! | Scalar | 1 | `scalar::scalar_f32` | `relu_ukernel_x1`, `relu_ukernel_x2` |
//! | SSE2 | 4 | `sse2::sse2_f32` | `relu_ukernel_x4`, `relu_ukernel_x8` |
//! | AVX | 8 | `avx::avx_f32` | `relu_ukernel_x8`, `relu_ukernel_x16` |
//! | AVX-512F | 16 | `avx512::avx512_f32` | `relu_ukernel_x16`, `relu_ukernel_x32` |
//! | NEON | 4 | `neon::neon_f32` | `relu_ukernel_x4`, `relu_ukernel_x8` |
//!
//! Runtime ISA selection goes through `get_isa_level()`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::KernelError;

pub mod scalar;
#[cfg(target_arch = "x86_64")]
pub mod sse2;
#[cfg(target_arch = "x86_64")]
pub mod avx;
#[cfg(target_arch = "x86_64")]
pub mod avx512;
#[cfg(target_arch = "aarch64")]
pub mod neon;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsaLevel {
    Scalar,
    Sse2,
    Avx,
    /// AVX-512 Foundation; 16 x f32 per register with lane masks.
    Avx512,
    Neon,
}

impl IsaLevel {
    pub const ALL: [IsaLevel; 5] = [
        IsaLevel::Scalar,
        IsaLevel::Sse2,
        IsaLevel::Avx,
        IsaLevel::Avx512,
        IsaLevel::Neon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IsaLevel::Scalar => "scalar",
            IsaLevel::Sse2 => "sse2",
            IsaLevel::Avx => "avx",
            IsaLevel::Avx512 => "avx512",
            IsaLevel::Neon => "neon",
        }
    }

    /// Native vector width in f32 lanes.
    pub const fn lanes(self) -> usize {
        match self {
            IsaLevel::Scalar => crate::simd_primitive!(scalar, f32, lanes),
            IsaLevel::Sse2 => crate::simd_primitive!(sse2, f32, lanes),
            IsaLevel::Avx => crate::simd_primitive!(avx, f32, lanes),
            IsaLevel::Avx512 => crate::simd_primitive!(avx512, f32, lanes),
            IsaLevel::Neon => crate::simd_primitive!(neon, f32, lanes),
        }
    }

    /// Whether the running CPU can execute kernels of this level.
    pub fn is_supported(self) -> bool {
        match self {
            IsaLevel::Scalar => true,
            #[cfg(target_arch = "x86_64")]
            IsaLevel::Sse2 => is_x86_feature_detected!("sse2"),
            #[cfg(target_arch = "x86_64")]
            IsaLevel::Avx => is_x86_feature_detected!("avx"),
            #[cfg(target_arch = "x86_64")]
            IsaLevel::Avx512 => is_x86_feature_detected!("avx512f"),
            #[cfg(target_arch = "aarch64")]
            IsaLevel::Neon => std::arch::is_aarch64_feature_detected!("neon"),
            _ => false,
        }
    }
}

impl fmt::Display for IsaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IsaLevel {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_ascii_lowercase().as_str() {
            "scalar" => Ok(IsaLevel::Scalar),
            "sse" | "sse2" => Ok(IsaLevel::Sse2),
            "avx" => Ok(IsaLevel::Avx),
            "avx512" | "avx512f" => Ok(IsaLevel::Avx512),
            "neon" => Ok(IsaLevel::Neon),
            _ => Err(KernelError::InvalidIsaOverride(value.to_string())),
        }
    }
}

static ISA_LEVEL: OnceLock<IsaLevel> = OnceLock::new();

/// Best ISA level of the running CPU (detected once, cached for process lifetime).
pub fn get_isa_level() -> IsaLevel {
    *ISA_LEVEL.get_or_init(detect_isa_features)
}

fn detect_isa_features() -> IsaLevel {
    let isa = IsaLevel::ALL
        .iter()
        .rev()
        .copied()
        .find(|isa| isa.is_supported())
        .unwrap_or(IsaLevel::Scalar);
    log::debug!("Detected ISA level: {isa}");
    isa
}

/// Every ISA level the running CPU supports, in ascending order.
pub fn available_isa_levels() -> Vec<IsaLevel> {
    IsaLevel::ALL
        .iter()
        .copied()
        .filter(|isa| isa.is_supported())
        .collect()
}

/// Copy the `count < LANES` trailing elements at `src` into a zero-filled
/// window so a full-width vector load stays inside the caller's buffer.
///
/// # Safety
/// `src` must be valid for reads of `count` elements.
#[inline(always)]
#[cfg_attr(
    not(any(target_arch = "x86_64", target_arch = "aarch64")),
    allow(dead_code)
)]
pub(crate) unsafe fn stage_remainder<const LANES: usize>(
    src: *const f32,
    count: usize,
) -> [f32; LANES] {
    debug_assert!(count < LANES);
    let mut stage = [0.0f32; LANES];
    std::ptr::copy_nonoverlapping(src, stage.as_mut_ptr(), count);
    stage
}
