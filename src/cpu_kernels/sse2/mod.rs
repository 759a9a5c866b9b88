// Expand SSE2 float-32 implementations
crate::expand_isa_impls!(sse2_f32, sse2, f32, feature = "sse2", [
    relu_ukernel_x4 => 1,
    relu_ukernel_x8 => 2,
]);
