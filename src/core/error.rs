//! # RBM 오류 타입
//!
//! 수치 엔진부터 위임 실행 계층까지 공통으로 쓰는 오류 분류

use thiserror::Error;

/// 라이브러리 전체의 결과 타입
pub type Result<T> = std::result::Result<T, RbmError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RbmError {
    /// 행렬 곱/원소별 연산의 형상 불일치
    #[error("incompatible sizes: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// 피연산자가 하나도 주어지지 않음
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// 같은 깊이의 시퀀스 길이가 서로 다름
    #[error("sequence length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// 직사각형 행렬로 해석할 수 없는 중첩 시퀀스
    #[error("nested sequence is not a rectangular matrix")]
    RaggedSequence,

    /// 예제가 0개인 데이터셋으로 학습 요청
    #[error("training data contains no examples")]
    EmptyDataset,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// 위임 실행 요청의 명령/인자 해석 실패
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
