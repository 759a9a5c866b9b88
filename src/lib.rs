//! relu-kernels: vectorized f32 ReLU micro-kernels.
//!
//! This crate provides the elementwise rectifier `y[i] = max(x[i], 0)` with:
//! - **Per-ISA Variants**: scalar, SSE2, AVX, AVX-512F and NEON, generated from one template
//! - **Runtime Selection**: the best variant for the running CPU, chosen once
//! - **Exact Remainders**: full-width tail load, bit-tested partial stores, no scalar loop
//! - **Raw Calling Convention**: byte-count batch, raw pointers and an opaque parameter block,
//!   shared by every variant
//!
//! # Quick Start
//!
//! ```ignore
//! use relu_kernels::{relu, relu_inplace};
//!
//! relu(&input, &mut output)?;
//! relu_inplace(&mut buffer);
//! ```
//!
//! # Configuration
//!
//! - `RELU_KERNELS_ISA`: force `scalar`, `sse2`, `avx`, `avx512` or `neon`

#[macro_use]
mod macros;

pub mod config;
pub mod cpu_kernels;
pub mod error;
pub mod ops;
pub mod params;
pub mod validation;

pub use config::{relu_config, ReluConfig, ReluUKernelFn, ISA_OVERRIDE_ENV};
pub use cpu_kernels::{available_isa_levels, get_isa_level, IsaLevel};
pub use error::{KernelError, KernelResult};
pub use ops::activations::{relu, relu_inplace, relu_inplace_with, relu_with};
pub use params::ReluParams;
