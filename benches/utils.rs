use rand::Rng;

/// Elementwise 算子的读写字节数 (in + out, f32)
pub fn elementwise_rw_bytes(n: usize) -> u64 {
    2 * n as u64 * 4
}

/// 随机 f32 向量, 值域 [-1, 1)
pub fn random_vec(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}
