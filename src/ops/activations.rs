//! Zero-cost activation functions.
//!
//! Safe slice entry points over the ReLU micro-kernels. Each call validates
//! the slices, then hands the raw buffers to one kernel invocation.
//!
//! # Design
//!
//! All functions have both in-place and out-of-place variants.
//! In-place variants pass the same pointer as input and output.

use crate::config::{relu_config, ReluConfig};
use crate::error::KernelResult;
use crate::params::ReluParams;
use crate::validation::validate_unary_batch;

// ============================================================================
// ReLU Activation: max(x, 0)
// ============================================================================

/// ReLU activation: `output = max(input, 0)`, using the process-wide kernel.
#[inline]
pub fn relu(input: &[f32], output: &mut [f32]) -> KernelResult<()> {
    relu_with(relu_config(), input, output)
}

/// ReLU activation in-place: `x = max(x, 0)`.
#[inline]
pub fn relu_inplace(data: &mut [f32]) {
    relu_inplace_with(relu_config(), data)
}

/// ReLU activation through a specific kernel variant.
pub fn relu_with(config: &ReluConfig, input: &[f32], output: &mut [f32]) -> KernelResult<()> {
    validate_unary_batch(input.len(), output.len())?;
    if input.is_empty() {
        return Ok(());
    }
    let params = ReluParams::new();
    // SAFETY: configs only exist for ISAs the CPU supports; both slices hold
    // `input.len()` elements and cannot overlap.
    unsafe {
        (config.ukernel())(
            std::mem::size_of_val(input),
            input.as_ptr(),
            output.as_mut_ptr(),
            &params,
        );
    }
    Ok(())
}

/// In-place ReLU through a specific kernel variant.
pub fn relu_inplace_with(config: &ReluConfig, data: &mut [f32]) {
    if data.is_empty() {
        return;
    }
    let params = ReluParams::new();
    let ptr = data.as_mut_ptr();
    // SAFETY: exact in-place aliasing is part of the kernel contract.
    unsafe {
        (config.ukernel())(std::mem::size_of_val(data), ptr, ptr, &params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KernelError;

    #[test]
    fn test_relu_mixed() {
        let input = vec![-3.5, 0.0, 2.25, -0.0, 7.0];
        let mut output = vec![1.0; 5];

        relu(&input, &mut output).unwrap();

        assert_eq!(output, vec![0.0, 0.0, 2.25, 0.0, 7.0]);
        // -0.0 is clamped to +0.0
        assert_eq!(output[3].to_bits(), 0);
    }

    #[test]
    fn test_relu_all_negative() {
        let input: Vec<f32> = (1..=10).map(|i| -(i as f32)).collect();
        let mut output = vec![1.0; 10];

        relu(&input, &mut output).unwrap();

        assert!(output.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_relu_all_positive_is_identity() {
        let input: Vec<f32> = (0..37).map(|i| i as f32 * 0.5 + 0.125).collect();
        let mut output = vec![0.0; 37];

        relu(&input, &mut output).unwrap();

        assert_eq!(output, input);
    }

    #[test]
    fn test_relu_inplace() {
        let mut data = vec![-1.0, 2.0, -3.0, 4.0, -5.0, 6.0, -7.0];
        relu_inplace(&mut data);
        assert_eq!(data, vec![0.0, 2.0, 0.0, 4.0, 0.0, 6.0, 0.0]);
    }

    #[test]
    fn test_relu_length_mismatch() {
        let input = vec![1.0; 4];
        let mut output = vec![0.0; 3];
        assert_eq!(
            relu(&input, &mut output),
            Err(KernelError::LengthMismatch { input: 4, output: 3 })
        );
        assert_eq!(output, vec![0.0; 3]);
    }

    #[test]
    fn test_relu_empty_is_noop() {
        let mut output: Vec<f32> = Vec::new();
        assert_eq!(relu(&[], &mut output), Ok(()));
        relu_inplace(&mut output);
    }

    #[test]
    fn test_relu_with_every_variant() {
        let input: Vec<f32> = (0..53).map(|i| (i as f32 - 26.0) * 0.75).collect();
        let expected: Vec<f32> = input.iter().map(|&v| v.max(0.0)).collect();
        for config in ReluConfig::variants() {
            let mut output = vec![f32::NAN; input.len()];
            relu_with(&config, &input, &mut output).unwrap();
            assert_eq!(output, expected, "{}", config.name());

            let mut data = input.clone();
            relu_inplace_with(&config, &mut data);
            assert_eq!(data, expected, "{} in-place", config.name());
        }
    }
}
