//! Scalar operator implementations — `extern "C"` pure scalar functions.
//!
//! These serve as the golden reference for correctness testing of the
//! vectorized kernels.
//!
//! Every function here is `#[no_mangle] pub extern "C"` so it can be located
//! by symbol name in the binary.
//!
//! This crate is compiled with `opt-level = 1` (configured in the workspace
//! root Cargo.toml) to keep the reference loops scalar.

pub mod activations;
