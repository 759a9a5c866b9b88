//! ReLU micro-kernel selection.
//!
//! Every variant shares the [`ReluUKernelFn`] signature; a [`ReluConfig`] pairs
//! one of them with the ISA it needs and its element tile. The process-wide
//! choice is made once by [`relu_config`]:
//!
//! 1. `RELU_KERNELS_ISA` (if set, parseable and supported by the CPU)
//! 2. `get_isa_level()` auto-detection
//!
//! Within an ISA the unrolled variant is preferred.

use std::fmt;
use std::sync::OnceLock;

use crate::cpu_kernels::{available_isa_levels, get_isa_level, IsaLevel};
use crate::cpu_kernels::scalar::scalar_f32;
use crate::error::{KernelError, KernelResult};
use crate::params::ReluParams;

/// Environment variable forcing an ISA level (`scalar`, `sse2`, `avx`, `avx512`, `neon`).
pub const ISA_OVERRIDE_ENV: &str = "RELU_KERNELS_ISA";

/// Unary micro-kernel calling convention: batch size in bytes, input, output, parameters.
pub type ReluUKernelFn = unsafe fn(usize, *const f32, *mut f32, &ReluParams);

/// One ReLU micro-kernel variant.
#[derive(Clone, Copy)]
pub struct ReluConfig {
    isa: IsaLevel,
    name: &'static str,
    ukernel: ReluUKernelFn,
    element_tile: usize,
}

impl fmt::Debug for ReluConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReluConfig")
            .field("isa", &self.isa)
            .field("name", &self.name)
            .field("element_tile", &self.element_tile)
            .finish()
    }
}

impl ReluConfig {
    const fn new(isa: IsaLevel, name: &'static str, ukernel: ReluUKernelFn, element_tile: usize) -> Self {
        Self { isa, name, ukernel, element_tile }
    }

    /// Preferred variant for `isa`, or `UnsupportedIsa` if the CPU lacks it.
    pub fn for_isa(isa: IsaLevel) -> KernelResult<Self> {
        if !isa.is_supported() {
            return Err(KernelError::UnsupportedIsa(isa));
        }
        compiled_variants(isa)
            .last()
            .copied()
            .ok_or(KernelError::UnsupportedIsa(isa))
    }

    /// Every variant the running CPU can execute, narrowest ISA first.
    pub fn variants() -> Vec<Self> {
        available_isa_levels()
            .into_iter()
            .flat_map(|isa| compiled_variants(isa).iter().copied())
            .collect()
    }

    pub fn isa(&self) -> IsaLevel {
        self.isa
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The micro-kernel itself. Callers uphold its `# Safety` contract.
    pub fn ukernel(&self) -> ReluUKernelFn {
        self.ukernel
    }

    /// Elements consumed per main-loop iteration.
    pub fn element_tile(&self) -> usize {
        self.element_tile
    }

    /// Native vector width of the variant's ISA.
    pub fn lanes(&self) -> usize {
        self.isa.lanes()
    }
}

static SCALAR_VARIANTS: [ReluConfig; 2] = [
    ReluConfig::new(IsaLevel::Scalar, "scalar_x1", scalar_f32::relu_ukernel_x1, 1),
    ReluConfig::new(IsaLevel::Scalar, "scalar_x2", scalar_f32::relu_ukernel_x2, 2),
];

#[cfg(target_arch = "x86_64")]
static SSE2_VARIANTS: [ReluConfig; 2] = {
    use crate::cpu_kernels::sse2::sse2_f32;
    [
        ReluConfig::new(IsaLevel::Sse2, "sse2_x4", sse2_f32::relu_ukernel_x4, 4),
        ReluConfig::new(IsaLevel::Sse2, "sse2_x8", sse2_f32::relu_ukernel_x8, 8),
    ]
};

#[cfg(target_arch = "x86_64")]
static AVX_VARIANTS: [ReluConfig; 2] = {
    use crate::cpu_kernels::avx::avx_f32;
    [
        ReluConfig::new(IsaLevel::Avx, "avx_x8", avx_f32::relu_ukernel_x8, 8),
        ReluConfig::new(IsaLevel::Avx, "avx_x16", avx_f32::relu_ukernel_x16, 16),
    ]
};

#[cfg(target_arch = "x86_64")]
static AVX512_VARIANTS: [ReluConfig; 2] = {
    use crate::cpu_kernels::avx512::avx512_f32;
    [
        ReluConfig::new(IsaLevel::Avx512, "avx512_x16", avx512_f32::relu_ukernel_x16, 16),
        ReluConfig::new(IsaLevel::Avx512, "avx512_x32", avx512_f32::relu_ukernel_x32, 32),
    ]
};

#[cfg(target_arch = "aarch64")]
static NEON_VARIANTS: [ReluConfig; 2] = {
    use crate::cpu_kernels::neon::neon_f32;
    [
        ReluConfig::new(IsaLevel::Neon, "neon_x4", neon_f32::relu_ukernel_x4, 4),
        ReluConfig::new(IsaLevel::Neon, "neon_x8", neon_f32::relu_ukernel_x8, 8),
    ]
};

/// Variants built for `isa` on this target, preferred one last.
fn compiled_variants(isa: IsaLevel) -> &'static [ReluConfig] {
    match isa {
        IsaLevel::Scalar => &SCALAR_VARIANTS,
        #[cfg(target_arch = "x86_64")]
        IsaLevel::Sse2 => &SSE2_VARIANTS,
        #[cfg(target_arch = "x86_64")]
        IsaLevel::Avx => &AVX_VARIANTS,
        #[cfg(target_arch = "x86_64")]
        IsaLevel::Avx512 => &AVX512_VARIANTS,
        #[cfg(target_arch = "aarch64")]
        IsaLevel::Neon => &NEON_VARIANTS,
        _ => &[],
    }
}

static CONFIG: OnceLock<ReluConfig> = OnceLock::new();

/// The process-wide ReLU kernel (selected once, cached for process lifetime).
pub fn relu_config() -> &'static ReluConfig {
    CONFIG.get_or_init(|| {
        let config = select_config(isa_override());
        log::info!(
            "ReLU kernel: {} (isa {}, tile {})",
            config.name,
            config.isa,
            config.element_tile
        );
        config
    })
}

fn isa_override() -> Option<IsaLevel> {
    let value = std::env::var(ISA_OVERRIDE_ENV).ok()?;
    match value.parse::<IsaLevel>() {
        Ok(isa) => Some(isa),
        Err(err) => {
            log::warn!("Ignoring {ISA_OVERRIDE_ENV}: {err}");
            None
        }
    }
}

fn select_config(requested: Option<IsaLevel>) -> ReluConfig {
    let detected = get_isa_level();
    let isa = match requested {
        Some(isa) if isa.is_supported() => isa,
        Some(isa) => {
            log::warn!("{ISA_OVERRIDE_ENV}={isa} is not supported on this CPU, using {detected}");
            detected
        }
        None => detected,
    };
    ReluConfig::for_isa(isa).unwrap_or(SCALAR_VARIANTS[SCALAR_VARIANTS.len() - 1])
}
