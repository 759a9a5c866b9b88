use thiserror::Error;

use crate::cpu_kernels::IsaLevel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("input length {input} does not match output length {output}")]
    LengthMismatch { input: usize, output: usize },
    #[error("invalid ISA override: {0}")]
    InvalidIsaOverride(String),
    #[error("ISA {0} is not supported on this CPU")]
    UnsupportedIsa(IsaLevel),
}

pub type KernelResult<T> = Result<T, KernelError>;
