// Expand AVX-512 float-32 implementations
crate::expand_isa_impls!(avx512_f32, avx512, f32, feature = "avx512f", [
    relu_ukernel_x16 => 1,
    relu_ukernel_x32 => 2,
]);

#[cfg(test)]
mod tests;
