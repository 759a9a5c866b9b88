//! Argument validation for the safe slice API.
//!
//! The micro-kernels only `debug_assert!` their contract; everything a caller
//! can get wrong through a safe signature is rejected here instead.

use crate::error::{KernelError, KernelResult};

/// Validate an elementwise unary batch (input and output of equal length).
///
/// Empty batches are valid; the caller skips the kernel for them.
#[inline]
pub fn validate_unary_batch(input_len: usize, output_len: usize) -> KernelResult<()> {
    if input_len != output_len {
        return Err(KernelError::LengthMismatch {
            input: input_len,
            output: output_len,
        });
    }
    Ok(())
}
