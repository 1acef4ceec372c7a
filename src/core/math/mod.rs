pub mod basic_math;
pub mod broadcast;
pub mod matrix_ops;
pub mod nested;
pub mod random;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use basic_math::*;
pub use broadcast::{each, map, zip_map};
pub use matrix_ops::*;
pub use nested::{matrix_to_rows, rows_to_matrix, rows_to_matrix_with_width, Nested};
pub use random::*;

use crate::core::error::Result;
use ndarray::Array2;
use rand::Rng;

/// 확률 행렬을 새로 뽑은 균등 난수 행렬과 비교해 0/1 상태 행렬로 변환
pub fn sample_states<R: Rng + ?Sized>(probabilities: &Array2<f32>, rng: &mut R) -> Result<Array2<f32>> {
    let (rows, cols) = probabilities.dim();
    let draws = uniform_matrix(rng, rows, cols);
    zip_map(probabilities, &draws, bernoulli_state)
}
