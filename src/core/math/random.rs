//! 상수/난수 행렬 생성기
//!
//! 중첩 시퀀스 버전은 차원 목록을 재귀적으로 내려가며 채우고, 차원이 없으면 스칼라 하나를 돌려준다.

use super::nested::Nested;
use ndarray::Array2;
use rand::Rng;
use std::f32::consts::PI;

/// 주어진 차원의 중첩 시퀀스를 `fill`로 채움
fn build<F>(dims: &[usize], fill: &mut F) -> Nested
where
    F: FnMut() -> f32,
{
    match dims.split_first() {
        None => Nested::Scalar(fill()),
        Some((&len, rest)) => Nested::Seq((0..len).map(|_| build(rest, fill)).collect()),
    }
}

pub fn ones(dims: &[usize]) -> Nested {
    build(dims, &mut || 1.0)
}

/// [0, 1) 균등 분포
pub fn rand_uniform<R: Rng + ?Sized>(rng: &mut R, dims: &[usize]) -> Nested {
    build(dims, &mut || rng.gen::<f32>())
}

/// 표준 정규 분포 (Box–Muller)
pub fn rand_normal<R: Rng + ?Sized>(rng: &mut R, dims: &[usize]) -> Nested {
    build(dims, &mut || box_muller(rng))
}

/// `sqrt(-2·ln U1)·cos(2π·U2)`
///
/// U1은 (0, 1]에서 뽑아 `ln(0)`을 피한다.
pub fn box_muller<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let u1: f32 = 1.0 - rng.gen::<f32>();
    let u2: f32 = rng.gen::<f32>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

pub fn ones_matrix(rows: usize, cols: usize) -> Array2<f32> {
    Array2::ones((rows, cols))
}

pub fn uniform_matrix<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |_| rng.gen::<f32>())
}

pub fn normal_matrix<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |_| box_muller(rng))
}
