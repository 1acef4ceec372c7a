//! 지속 깁스 체인 ("daydreaming")
//!
//! 가시층을 한 번만 무작위로 초기화하고, 은닉층 갱신 → 가시층 갱신을 번갈아 반복한다.
//! 체인을 다시 시작하지 않으므로 연속된 샘플끼리 상관되어 있다.

use crate::core::error::Result;
use crate::core::math::{dot, logistic, sample_states, uniform_matrix};
use crate::core::model::Rbm;
use ndarray::{s, Array1, Array2};
use rand::Rng;

/// 하나의 RBM 위에서 도는 지속 깁스 체인
pub struct DreamChain<'a, R: Rng + ?Sized> {
    rbm: &'a Rbm,
    rng: &'a mut R,
    /// 바이어스 포함 `1×(V+1)` 현재 가시 상태
    visible: Array2<f32>,
}

impl<'a, R: Rng + ?Sized> DreamChain<'a, R> {
    /// 0번 원소는 1, 나머지는 [0, 1) 균등 난수로 시작
    pub fn new(rbm: &'a Rbm, rng: &'a mut R) -> Self {
        let mut visible = uniform_matrix(&mut *rng, 1, rbm.num_visible() + 1);
        visible[[0, 0]] = 1.0;
        Self { rbm, rng, visible }
    }

    /// 현재 가시 샘플 (바이어스 제외)
    pub fn current(&self) -> Array1<f32> {
        self.visible.slice(s![0, 1..]).to_owned()
    }

    /// 깁스 한 단계를 진행하고 새 가시 샘플을 돌려준다
    pub fn step(&mut self) -> Result<Array1<f32>> {
        let weights = self.rbm.weights();

        let hidden_probs = dot(&self.visible, weights)?.mapv(logistic);
        let mut hidden_states = sample_states(&hidden_probs, &mut *self.rng)?;
        hidden_states[[0, 0]] = 1.0;

        let visible_probs = dot(&hidden_states, &weights.t())?.mapv(logistic);
        self.visible = sample_states(&visible_probs, &mut *self.rng)?;

        Ok(self.current())
    }
}

impl Rbm {
    /// `num_samples`개의 가시 샘플(`num_samples×V`)을 지속 체인으로 생성
    pub fn daydream(&self, num_samples: usize) -> Result<Array2<f32>> {
        self.daydream_with(num_samples, &mut rand::thread_rng())
    }

    pub fn daydream_with<R: Rng + ?Sized>(&self, num_samples: usize, rng: &mut R) -> Result<Array2<f32>> {
        let mut samples = Array2::zeros((num_samples, self.num_visible()));
        if num_samples == 0 {
            return Ok(samples);
        }

        log::debug!("daydream 시작: samples={}, visible={}", num_samples, self.num_visible());

        let mut chain = DreamChain::new(self, rng);
        samples.row_mut(0).assign(&chain.current());
        for i in 1..num_samples {
            let sample = chain.step()?;
            samples.row_mut(i).assign(&sample);
        }
        Ok(samples)
    }
}
