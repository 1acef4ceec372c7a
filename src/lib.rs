//! RBM (Restricted Boltzmann Machine) 라이브러리
//!
//! 이진 가시/은닉 유닛 두 층으로 된 제한 볼츠만 머신을 단일 스텝 대조 발산(CD-1)으로 학습하고,
//! 가시 ↔ 은닉 투영과 지속 깁스 체인 샘플링을 제공한다.

pub mod core;

// 핵심 모듈들 재수출
pub use core::{
    // 모델
    Rbm, RbmConfig, RbmState,
    // 학습
    EpochProgress, LogObserver, SilentObserver, TrainingObserver, TrainingReport,
    // 샘플링
    DreamChain,
    // 오류
    RbmError, Result,
};
pub use core::dispatch::{TaskEvent, TaskExecutor, TaskOutput, TaskRequest};
