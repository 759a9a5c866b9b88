//! Parameter blocks for the unary micro-kernel calling convention.
//!
//! Every unary micro-kernel takes a parameter block by reference so a
//! dispatcher can hold kernels with and without scalar parameters behind
//! one function signature. ReLU needs none, so its block is opaque.

/// Opaque parameter block for the ReLU micro-kernels. Never read.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReluParams {
    _reserved: u8,
}

impl ReluParams {
    pub const fn new() -> Self {
        Self { _reserved: 0 }
    }
}
