//! # RBM 핵심 라이브러리 모듈
//!
//! 수치 엔진, 모델, CD-1 학습, 샘플러, 위임 실행 경계

pub mod error;
pub mod math;
pub mod model;
pub mod training;
pub mod sampler;
pub mod dispatch;

// 주요 타입들 재수출
pub use error::{RbmError, Result};
pub use model::{Rbm, RbmConfig, RbmState};
pub use training::{EpochProgress, LogObserver, SilentObserver, TrainingObserver, TrainingReport};
pub use sampler::DreamChain;
