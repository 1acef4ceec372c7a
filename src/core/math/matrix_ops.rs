//! 행렬 곱, 전치, 바이어스 열 처리

use super::nested::Nested;
use crate::core::error::{RbmError, Result};
use ndarray::{s, Array2, ArrayBase, Data, Ix2};

/// 표준 행렬 곱 `A(m×k) · B(k×n) = C(m×n)`
///
/// 내부 차원이 다르면 전치로 맞춰 보지 않고 바로 `ShapeMismatch`를 돌려준다.
pub fn dot<S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix2>) -> Result<Array2<f32>>
where
    S1: Data<Elem = f32>,
    S2: Data<Elem = f32>,
{
    if a.ncols() != b.nrows() {
        return Err(RbmError::ShapeMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(a.dot(b))
}

/// `w×h` → `h×w` 새 행렬
pub fn transpose<S>(a: &ArrayBase<S, Ix2>) -> Array2<f32>
where
    S: Data<Elem = f32>,
{
    a.t().to_owned()
}

/// 중첩 시퀀스용 행렬 곱
///
/// 1차원 왼쪽 피연산자는 행 벡터(1×k), 1차원 오른쪽 피연산자는 열 벡터(k×1)로 올린다.
pub fn dot_nested(a: &Nested, b: &Nested) -> Result<Nested> {
    let left = promote(a, Orientation::Row)?;
    let right = promote(b, Orientation::Column)?;
    Ok(Nested::from_matrix(&dot(&left, &right)?))
}

/// 중첩 시퀀스용 전치. 빈 입력은 빈 결과.
pub fn transpose_nested(a: &Nested) -> Result<Nested> {
    if a.is_empty() {
        return Ok(Nested::Seq(Vec::new()));
    }
    Ok(Nested::from_matrix(&transpose(&a.to_matrix()?)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Row,
    Column,
}

/// 1차원 시퀀스는 지정한 방향의 벡터로, 2차원 시퀀스는 그대로 행렬로 변환
pub fn promote(value: &Nested, orientation: Orientation) -> Result<Array2<f32>> {
    match value.shape().len() {
        1 => {
            let values = value.to_vec()?;
            let len = values.len();
            let dim = match orientation {
                Orientation::Row => (1, len),
                Orientation::Column => (len, 1),
            };
            Array2::from_shape_vec(dim, values).map_err(|_| RbmError::RaggedSequence)
        }
        _ => value.to_matrix(),
    }
}

/// 맨 앞에 값이 1인 바이어스 열을 붙인 새 행렬
pub fn with_bias_column<S>(data: &ArrayBase<S, Ix2>) -> Array2<f32>
where
    S: Data<Elem = f32>,
{
    let (rows, cols) = data.dim();
    let mut augmented = Array2::ones((rows, cols + 1));
    augmented.slice_mut(s![.., 1..]).assign(data);
    augmented
}

/// 바이어스 열(0번 열)을 제거한 새 행렬
pub fn strip_bias_column(matrix: &Array2<f32>) -> Array2<f32> {
    if matrix.ncols() == 0 {
        return matrix.clone();
    }
    matrix.slice(s![.., 1..]).to_owned()
}
