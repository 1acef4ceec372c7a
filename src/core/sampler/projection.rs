//! 가시층 ↔ 은닉층 투영
//!
//! 입력은 빌려서 읽기만 하고, 바이어스 열을 붙인 사본으로 계산한 뒤 결과에서 바이어스 열을 떼어 돌려준다.

use crate::core::error::Result;
use crate::core::math::{dot, logistic, sample_states, strip_bias_column, with_bias_column};
use crate::core::model::Rbm;
use ndarray::Array2;
use rand::Rng;

impl Rbm {
    /// 가시 상태(`N×V`)에서 은닉 상태(`N×H`) 샘플링
    pub fn run_visible(&self, data: &Array2<f32>) -> Result<Array2<f32>> {
        self.run_visible_with(data, &mut rand::thread_rng())
    }

    pub fn run_visible_with<R: Rng + ?Sized>(&self, data: &Array2<f32>, rng: &mut R) -> Result<Array2<f32>> {
        let probs = self.hidden_probs_with_bias(data)?;
        let states = sample_states(&probs, rng)?;
        Ok(strip_bias_column(&states))
    }

    /// 은닉 상태(`N×H`)에서 가시 상태(`N×V`) 샘플링
    pub fn run_hidden(&self, data: &Array2<f32>) -> Result<Array2<f32>> {
        self.run_hidden_with(data, &mut rand::thread_rng())
    }

    pub fn run_hidden_with<R: Rng + ?Sized>(&self, data: &Array2<f32>, rng: &mut R) -> Result<Array2<f32>> {
        let probs = self.visible_probs_with_bias(data)?;
        let states = sample_states(&probs, rng)?;
        Ok(strip_bias_column(&states))
    }

    /// 샘플링 없이 은닉 유닛이 켜질 확률 (`N×H`)
    pub fn hidden_probabilities(&self, data: &Array2<f32>) -> Result<Array2<f32>> {
        Ok(strip_bias_column(&self.hidden_probs_with_bias(data)?))
    }

    /// 샘플링 없이 가시 유닛이 켜질 확률 (`N×V`)
    pub fn visible_probabilities(&self, data: &Array2<f32>) -> Result<Array2<f32>> {
        Ok(strip_bias_column(&self.visible_probs_with_bias(data)?))
    }

    fn hidden_probs_with_bias(&self, visible: &Array2<f32>) -> Result<Array2<f32>> {
        let data = with_bias_column(visible);
        Ok(dot(&data, self.weights())?.mapv(logistic))
    }

    fn visible_probs_with_bias(&self, hidden: &Array2<f32>) -> Result<Array2<f32>> {
        let data = with_bias_column(hidden);
        Ok(dot(&data, &self.weights().t())?.mapv(logistic))
    }
}
