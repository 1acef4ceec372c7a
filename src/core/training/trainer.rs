//! 단일 스텝 대조 발산(CD-1) 학습
//!
//! 한 에포크는 전체 배치에 대해 다음 순서로 진행된다.
//! 1. 양의 단계: 데이터에 고정한 채 은닉 유닛 확률/상태 계산
//! 2. 음의 단계: 은닉 상태로 가시층을 재구성한 뒤 은닉 확률을 다시 계산
//! 3. 갱신: `W += lr · (pos - neg) / N`
//! 4. 재구성 오차 보고 (제어 흐름에는 영향 없음)

use super::observer::{EpochProgress, LogObserver, TrainingObserver};
use crate::core::error::{RbmError, Result};
use crate::core::math::{dot, logistic, sample_states, with_bias_column, zip_map};
use crate::core::model::{Rbm, DEFAULT_MAX_EPOCHS};
use ndarray::Array2;
use rand::Rng;

/// 학습 결과 요약
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub epochs: usize,
    /// 에포크별 재구성 오차
    pub errors: Vec<f32>,
}

impl TrainingReport {
    pub fn final_error(&self) -> Option<f32> {
        self.errors.last().copied()
    }
}

impl Rbm {
    /// 데이터(`N×V`)로 학습. `max_epochs`가 없으면 1000 에포크.
    ///
    /// 에포크마다 `Epoch <n>: error is <error>`를 `info` 레벨로 남긴다.
    pub fn train(&mut self, data: &Array2<f32>, max_epochs: Option<usize>) -> Result<TrainingReport> {
        let mut rng = rand::thread_rng();
        self.train_with(
            data,
            max_epochs.unwrap_or(DEFAULT_MAX_EPOCHS),
            &mut rng,
            &mut LogObserver,
        )
    }

    /// 난수원과 관찰자를 주입하는 학습
    ///
    /// # Errors
    /// * `EmptyDataset` - 예제가 0개
    /// * `ShapeMismatch` - 데이터 행 길이가 V가 아님
    pub fn train_with<R, O>(
        &mut self,
        data: &Array2<f32>,
        max_epochs: usize,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<TrainingReport>
    where
        R: Rng + ?Sized,
        O: TrainingObserver + ?Sized,
    {
        if data.nrows() == 0 {
            return Err(RbmError::EmptyDataset);
        }

        let data = with_bias_column(data);
        let num_examples = data.nrows() as f32;
        let mut errors = Vec::with_capacity(max_epochs);

        log::debug!(
            "CD-1 학습 시작: examples={}, visible={}, hidden={}, epochs={}",
            data.nrows(),
            self.num_visible(),
            self.num_hidden(),
            max_epochs
        );

        for epoch in 0..max_epochs {
            let step = self.contrastive_divergence_step(&data, &mut *rng)?;

            let scale = self.learning_rate / num_examples;
            let gradient = zip_map(&step.pos_associations, &step.neg_associations, |p, n| p - n)?;
            self.weights_mut().scaled_add(scale, &gradient);

            let error = zip_map(&data, &step.neg_visible_probs, |a, b| (a - b) * (a - b))?.sum();
            errors.push(error);
            observer.on_epoch(&EpochProgress {
                epoch,
                max_epochs,
                error,
            });
        }

        Ok(TrainingReport {
            epochs: max_epochs,
            errors,
        })
    }

    /// 바이어스 열이 붙은 데이터로 양/음의 연관 행렬 계산 (가중치는 건드리지 않음)
    fn contrastive_divergence_step<R>(&self, data: &Array2<f32>, rng: &mut R) -> Result<PhaseStatistics>
    where
        R: Rng + ?Sized,
    {
        let weights = self.weights();

        // 양의 단계 (reality)
        let pos_hidden_activations = dot(data, weights)?;
        let pos_hidden_probs = pos_hidden_activations.mapv(logistic);
        let pos_hidden_states = sample_states(&pos_hidden_probs, rng)?;
        // 연관 행렬에는 상태가 아닌 확률을 사용
        let pos_associations = dot(&data.t(), &pos_hidden_probs)?;

        // 음의 단계 (daydream)
        let neg_visible_activations = dot(&pos_hidden_states, &weights.t())?;
        let mut neg_visible_probs = neg_visible_activations.mapv(logistic);
        neg_visible_probs.column_mut(0).fill(1.0);
        let neg_hidden_activations = dot(&neg_visible_probs, weights)?;
        let neg_hidden_probs = neg_hidden_activations.mapv(logistic);
        let neg_associations = dot(&neg_visible_probs.t(), &neg_hidden_probs)?;

        Ok(PhaseStatistics {
            pos_associations,
            neg_associations,
            neg_visible_probs,
        })
    }
}

struct PhaseStatistics {
    pos_associations: Array2<f32>,
    neg_associations: Array2<f32>,
    neg_visible_probs: Array2<f32>,
}
