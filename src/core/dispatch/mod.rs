//! # 위임 실행 계층
//!
//! 호스트가 RBM 호출을 다른 실행 문맥으로 넘기고 진행/결과 통지를 받는 경계

pub mod protocol;
pub mod worker;

pub use protocol::{Command, CommandKind, TaskEvent, TaskOutput, TaskRequest};
pub use worker::{execute, spawn_task, BlockingExecutor, EventSink, InlineExecutor, TaskExecutor};
