use crate::cpu_kernels::avx512::avx512_f32;
use crate::cpu_kernels::test_support::{check_ukernel, run_guarded, GUARD};

#[test]
fn test_avx512_relu_x16() {
    if !is_x86_feature_detected!("avx512f") {
        println!("Skipping AVX-512 test: AVX-512F not supported");
        return;
    }
    check_ukernel("avx512_x16", avx512_f32::relu_ukernel_x16, 16, 16);
}

#[test]
fn test_avx512_relu_x32() {
    if !is_x86_feature_detected!("avx512f") {
        println!("Skipping AVX-512 test: AVX-512F not supported");
        return;
    }
    check_ukernel("avx512_x32", avx512_f32::relu_ukernel_x32, 16, 32);
}

#[test]
fn test_avx512_relu_masked_tail() {
    if !is_x86_feature_detected!("avx512f") {
        return;
    }
    for n in 1..16 {
        let input = vec![-1.0f32; n];
        let out = run_guarded(avx512_f32::relu_ukernel_x16, &input, 16 - n);
        assert!(out[..n].iter().all(|v| v.to_bits() == 0), "n={n}");
        assert!(out[n..].iter().all(|&v| v == GUARD), "n={n}");
    }
}
