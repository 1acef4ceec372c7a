//! 모델 파라미터의 직렬화 표현
//!
//! 가중치는 바이어스 행/열을 포함한 `(V+1)×(H+1)` 행 우선 중첩 벡터로 전달된다.

use super::rbm::Rbm;
use crate::core::error::{RbmError, Result};
use crate::core::math::{matrix_to_rows, rows_to_matrix};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbmState {
    pub num_visible: usize,
    pub num_hidden: usize,
    pub learning_rate: f32,
    pub weights: Vec<Vec<f32>>,
}

impl From<Rbm> for RbmState {
    fn from(rbm: Rbm) -> Self {
        Self::from(&rbm)
    }
}

impl From<&Rbm> for RbmState {
    fn from(rbm: &Rbm) -> Self {
        Self {
            num_visible: rbm.num_visible(),
            num_hidden: rbm.num_hidden(),
            learning_rate: rbm.learning_rate,
            weights: matrix_to_rows(rbm.weights()),
        }
    }
}

impl TryFrom<RbmState> for Rbm {
    type Error = RbmError;

    fn try_from(state: RbmState) -> Result<Self> {
        let weights = rows_to_matrix(&state.weights)?;
        Rbm::from_weights(state.num_visible, state.num_hidden, state.learning_rate, weights)
    }
}
