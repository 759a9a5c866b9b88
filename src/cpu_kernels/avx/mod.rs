/// Lane masks for `vmaskmovps`: the 8 entries starting at `8 - n` enable the low `n` lanes.
pub(crate) static REMAINDER_MASK: [i32; 16] = [-1, -1, -1, -1, -1, -1, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0];

// Expand AVX float-32 implementations
crate::expand_isa_impls!(avx_f32, avx, f32, feature = "avx", [
    relu_ukernel_x8 => 1,
    relu_ukernel_x16 => 2,
]);
