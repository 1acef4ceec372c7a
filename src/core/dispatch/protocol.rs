//! 위임 실행 요청/통지 메시지
//!
//! 요청: `{ model, command, args }` (args는 위치 인자 배열)
//! 진행: `{ type: "progress", progress_percent, error }` (학습 에포크마다)
//! 완료: `{ type: "completed", correlation_token, result }`
//! 실패: `{ type: "failed", correlation_token, error }`

use crate::core::error::{RbmError, Result};
use crate::core::model::RbmState;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 위임 가능한 명령 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Train,
    RunVisible,
    RunHidden,
    Daydream,
}

/// 위임 실행 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// 직렬화된 모델 상태
    pub model: RbmState,
    pub command: CommandKind,
    /// 위치 인자
    #[serde(default)]
    pub args: Vec<Value>,
}

/// 인자까지 해석된 명령
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Train {
        data: Vec<Vec<f32>>,
        max_epochs: Option<usize>,
    },
    RunVisible { data: Vec<Vec<f32>> },
    RunHidden { data: Vec<Vec<f32>> },
    Daydream { num_samples: usize },
}

impl TaskRequest {
    pub fn new(model: RbmState, command: CommandKind, args: Vec<Value>) -> Self {
        Self { model, command, args }
    }

    /// 위치 인자를 명령별 타입으로 해석
    pub fn command(&self) -> Result<Command> {
        match self.command {
            CommandKind::Train => {
                self.expect_arity(1, 2)?;
                let max_epochs = match self.args.get(1) {
                    None | Some(Value::Null) => None,
                    Some(_) => Some(self.arg(1, "max_epochs")?),
                };
                Ok(Command::Train {
                    data: self.arg(0, "data")?,
                    max_epochs,
                })
            }
            CommandKind::RunVisible => {
                self.expect_arity(1, 1)?;
                Ok(Command::RunVisible { data: self.arg(0, "data")? })
            }
            CommandKind::RunHidden => {
                self.expect_arity(1, 1)?;
                Ok(Command::RunHidden { data: self.arg(0, "data")? })
            }
            CommandKind::Daydream => {
                self.expect_arity(1, 1)?;
                Ok(Command::Daydream {
                    num_samples: self.arg(0, "num_samples")?,
                })
            }
        }
    }

    fn expect_arity(&self, min: usize, max: usize) -> Result<()> {
        let found = self.args.len();
        if found < min || found > max {
            return Err(RbmError::InvalidRequest(format!(
                "{:?} takes {}..={} arguments, got {}",
                self.command, min, max, found
            )));
        }
        Ok(())
    }

    fn arg<T: DeserializeOwned>(&self, index: usize, name: &str) -> Result<T> {
        let value = self.args.get(index).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value)
            .map_err(|e| RbmError::InvalidRequest(format!("argument `{}`: {}", name, e)))
    }
}

/// 호출 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutput {
    /// 학습 후 갱신된 `(V+1)×(H+1)` 가중치
    Weights(Vec<Vec<f32>>),
    /// 투영/daydream이 만든 상태 행렬
    States(Vec<Vec<f32>>),
}

/// 실행 중 호스트로 보내는 통지
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskEvent {
    Progress {
        progress_percent: f32,
        error: f32,
    },
    Completed {
        correlation_token: TaskRequest,
        result: TaskOutput,
    },
    Failed {
        correlation_token: TaskRequest,
        error: String,
    },
}

impl TaskEvent {
    /// 완료/실패 통지 여부
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskEvent::Progress { .. })
    }
}
