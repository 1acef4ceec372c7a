//! 에포크별 진행 상황 통지

/// 한 에포크가 끝날 때의 진행 정보
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochProgress {
    /// 0부터 시작하는 에포크 번호
    pub epoch: usize,
    pub max_epochs: usize,
    /// 재구성 오차 `Σ (data - neg_visible_probs)²`
    pub error: f32,
}

impl EpochProgress {
    /// `100·(epoch+1)/max_epochs`
    pub fn progress_percent(&self) -> f32 {
        100.0 * (self.epoch + 1) as f32 / self.max_epochs as f32
    }
}

/// 학습 루프가 에포크마다 호출하는 관찰자
pub trait TrainingObserver {
    fn on_epoch(&mut self, progress: &EpochProgress);
}

impl<F> TrainingObserver for F
where
    F: FnMut(&EpochProgress),
{
    fn on_epoch(&mut self, progress: &EpochProgress) {
        self(progress)
    }
}

/// 에포크마다 `Epoch <n>: error is <error>` 로그 한 줄
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TrainingObserver for LogObserver {
    fn on_epoch(&mut self, progress: &EpochProgress) {
        log::info!("Epoch {}: error is {}", progress.epoch, progress.error);
    }
}

/// 아무것도 하지 않는 관찰자
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl TrainingObserver for SilentObserver {
    fn on_epoch(&mut self, _progress: &EpochProgress) {}
}
