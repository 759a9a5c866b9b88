// Expand NEON float-32 implementations
crate::expand_isa_impls!(neon_f32, neon, f32, feature = "neon", [
    relu_ukernel_x4 => 1,
    relu_ukernel_x8 => 2,
]);
