use crate::core::error::{RbmError, Result};

/// 기본 학습률
pub const DEFAULT_LEARNING_RATE: f32 = 0.1;
/// 기본 최대 에포크
pub const DEFAULT_MAX_EPOCHS: usize = 1000;
/// 내부 가중치 초기화 표준편차
pub const DEFAULT_WEIGHT_INIT_STD: f32 = 0.1;

/// RBM 전체 구성
#[derive(Debug, Clone, PartialEq)]
pub struct RbmConfig {
    /// 가시 유닛 수 (V)
    pub num_visible: usize,
    /// 은닉 유닛 수 (H)
    pub num_hidden: usize,
    /// 학습률
    pub learning_rate: f32,
    /// 내부 가중치 N(0, σ²)의 σ
    pub weight_init_std: f32,
}

impl Default for RbmConfig {
    fn default() -> Self {
        Self {
            num_visible: 0,
            num_hidden: 0,
            learning_rate: DEFAULT_LEARNING_RATE,
            weight_init_std: DEFAULT_WEIGHT_INIT_STD,
        }
    }
}

impl RbmConfig {
    /// 새 구성 생성
    pub fn new(num_visible: usize, num_hidden: usize) -> Self {
        Self {
            num_visible,
            num_hidden,
            ..Self::default()
        }
    }

    /// 학습률 설정
    pub fn with_learning_rate(mut self, lr: f32) -> Self {
        self.learning_rate = lr;
        self
    }

    /// 초기화 표준편차 설정
    pub fn with_weight_init_std(mut self, std: f32) -> Self {
        self.weight_init_std = std;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(RbmError::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if !self.weight_init_std.is_finite() || self.weight_init_std < 0.0 {
            return Err(RbmError::InvalidConfig(format!(
                "weight init std must be finite and non-negative, got {}",
                self.weight_init_std
            )));
        }
        Ok(())
    }
}
