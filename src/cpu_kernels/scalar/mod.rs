// Expand scalar float-32 implementations (one lane, no remainder path)
crate::expand_isa_impls!(scalar_f32, scalar, f32, [
    relu_ukernel_x1 => 1,
    relu_ukernel_x2 => 2,
]);
