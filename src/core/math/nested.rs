//! 스칼라 또는 임의 깊이로 중첩된 스칼라 시퀀스
//!
//! JSON 호환 표현(`1.0`, `[1.0, 2.0]`, `[[..], [..]]`)과 `ndarray` 행렬 사이의 변환을 담당한다.

use crate::core::error::{RbmError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested {
    Scalar(f32),
    Seq(Vec<Nested>),
}

impl Nested {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Nested::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            Nested::Scalar(x) => Some(*x),
            Nested::Seq(_) => None,
        }
    }

    /// 최상위 길이 (스칼라는 `None`)
    pub fn len(&self) -> Option<usize> {
        match self {
            Nested::Scalar(_) => None,
            Nested::Seq(items) => Some(items.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// 첫 원소를 따라 내려가며 읽은 형상. 스칼라는 빈 형상.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut cursor = self;
        while let Nested::Seq(items) = cursor {
            shape.push(items.len());
            match items.first() {
                Some(first) => cursor = first,
                None => break,
            }
        }
        shape
    }

    /// 2차원 직사각형 시퀀스를 행렬로 변환
    pub fn to_matrix(&self) -> Result<Array2<f32>> {
        let rows = match self {
            Nested::Seq(rows) => rows,
            Nested::Scalar(_) => return Err(RbmError::RaggedSequence),
        };
        let table = rows
            .iter()
            .map(|row| match row {
                Nested::Seq(cells) => cells
                    .iter()
                    .map(|cell| cell.as_scalar().ok_or(RbmError::RaggedSequence))
                    .collect::<Result<Vec<f32>>>(),
                Nested::Scalar(_) => Err(RbmError::RaggedSequence),
            })
            .collect::<Result<Vec<Vec<f32>>>>()?;
        rows_to_matrix(&table)
    }

    pub fn from_matrix(matrix: &Array2<f32>) -> Self {
        Nested::Seq(
            matrix
                .outer_iter()
                .map(|row| Nested::Seq(row.iter().map(|&x| Nested::Scalar(x)).collect()))
                .collect(),
        )
    }

    /// 1차원 시퀀스를 평탄한 벡터로 변환
    pub fn to_vec(&self) -> Result<Vec<f32>> {
        match self {
            Nested::Seq(items) => items
                .iter()
                .map(|item| item.as_scalar().ok_or(RbmError::RaggedSequence))
                .collect(),
            Nested::Scalar(_) => Err(RbmError::RaggedSequence),
        }
    }
}

impl From<f32> for Nested {
    fn from(value: f32) -> Self {
        Nested::Scalar(value)
    }
}

impl From<Vec<f32>> for Nested {
    fn from(values: Vec<f32>) -> Self {
        Nested::Seq(values.into_iter().map(Nested::Scalar).collect())
    }
}

impl From<Vec<Vec<f32>>> for Nested {
    fn from(rows: Vec<Vec<f32>>) -> Self {
        Nested::Seq(rows.into_iter().map(Nested::from).collect())
    }
}

/// 행 우선 `Vec<Vec<f32>>` → 행렬. 행 길이가 다르면 `RaggedSequence`.
pub fn rows_to_matrix(rows: &[Vec<f32>]) -> Result<Array2<f32>> {
    let cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != cols) {
        return Err(RbmError::RaggedSequence);
    }
    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), cols), flat).map_err(|_| RbmError::RaggedSequence)
}

/// 열 수를 아는 행 목록 → 행렬. 빈 목록은 `0×width`.
///
/// 비어 있지 않으면 `rows_to_matrix`와 같고, 열 수 검사는 호출자의 연산에 맡긴다.
pub fn rows_to_matrix_with_width(rows: &[Vec<f32>], width: usize) -> Result<Array2<f32>> {
    if rows.is_empty() {
        return Ok(Array2::zeros((0, width)));
    }
    rows_to_matrix(rows)
}

/// 행렬 → 행 우선 `Vec<Vec<f32>>`
pub fn matrix_to_rows(matrix: &Array2<f32>) -> Vec<Vec<f32>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}
