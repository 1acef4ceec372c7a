//! 제한 볼츠만 머신 모델
//!
//! 가중치 행렬 하나에 두 층의 바이어스를 접어 넣는다.
//! - 0번 행: 은닉층 바이어스
//! - 0번 열: 가시층 바이어스
//! - `[1..=V][1..=H]`: 가시-은닉 연결 가중치

use super::config::{RbmConfig, DEFAULT_LEARNING_RATE};
use super::state::RbmState;
use crate::core::error::{RbmError, Result};
use crate::core::math::normal_matrix;
use ndarray::{s, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RbmState", into = "RbmState")]
pub struct Rbm {
    num_visible: usize,
    num_hidden: usize,
    /// 학습률
    pub learning_rate: f32,
    /// `(V+1)×(H+1)` 가중치 (형상은 생성 후 불변)
    weights: Array2<f32>,
}

impl Rbm {
    /// 새 RBM 생성. 학습률 기본값은 0.1.
    ///
    /// 학습률이 유한한 양수가 아니면 `InvalidConfig`.
    pub fn new(num_visible: usize, num_hidden: usize, learning_rate: Option<f32>) -> Result<Self> {
        let config = RbmConfig::new(num_visible, num_hidden)
            .with_learning_rate(learning_rate.unwrap_or(DEFAULT_LEARNING_RATE));
        Self::from_config(&config, &mut rand::thread_rng())
    }

    /// 구성과 난수원을 받아 생성
    pub fn from_config<R: Rng + ?Sized>(config: &RbmConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        Ok(Self::initialize(config, rng))
    }

    fn initialize<R: Rng + ?Sized>(config: &RbmConfig, rng: &mut R) -> Self {
        let (v, h) = (config.num_visible, config.num_hidden);
        let mut weights = Array2::zeros((v + 1, h + 1));
        let interior = normal_matrix(rng, v, h).mapv(|x| x * config.weight_init_std);
        weights.slice_mut(s![1.., 1..]).assign(&interior);

        log::debug!(
            "RBM 초기화: visible={}, hidden={}, lr={}",
            v,
            h,
            config.learning_rate
        );

        Self {
            num_visible: v,
            num_hidden: h,
            learning_rate: config.learning_rate,
            weights,
        }
    }

    /// 기존 가중치로 복원. 형상이 `(V+1)×(H+1)`이 아니면 `ShapeMismatch`.
    pub fn from_weights(
        num_visible: usize,
        num_hidden: usize,
        learning_rate: f32,
        weights: Array2<f32>,
    ) -> Result<Self> {
        let expected = (num_visible + 1, num_hidden + 1);
        if weights.dim() != expected {
            return Err(RbmError::ShapeMismatch {
                left: weights.dim(),
                right: expected,
            });
        }
        Ok(Self {
            num_visible,
            num_hidden,
            learning_rate,
            weights,
        })
    }

    pub fn num_visible(&self) -> usize {
        self.num_visible
    }

    pub fn num_hidden(&self) -> usize {
        self.num_hidden
    }

    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// 학습 루프 전용 가변 접근 (형상은 바꾸지 않음)
    pub(crate) fn weights_mut(&mut self) -> &mut Array2<f32> {
        &mut self.weights
    }

    /// 직렬화 표현으로 변환
    pub fn to_state(&self) -> RbmState {
        RbmState::from(self)
    }

    pub fn from_state(state: RbmState) -> Result<Self> {
        Self::try_from(state)
    }
}
