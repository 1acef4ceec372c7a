//! 위임 실행기
//!
//! 코어는 이 모듈을 알지 못한다. 호스트가 `TaskExecutor`를 골라 요청을 넘기면
//! 진행/완료/실패 통지가 콜백이나 채널로 돌아온다. 취소 기능은 없다.

use super::protocol::{Command, TaskEvent, TaskOutput, TaskRequest};
use crate::core::math::{matrix_to_rows, rows_to_matrix_with_width};
use crate::core::model::{Rbm, DEFAULT_MAX_EPOCHS};
use crate::core::training::EpochProgress;
use anyhow::Context;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// 통지를 받는 콜백
pub type EventSink = Box<dyn FnMut(TaskEvent) + Send>;

/// 요청을 어디서 실행할지 결정하는 주입 지점
pub trait TaskExecutor {
    fn submit(&self, request: TaskRequest, sink: EventSink);
}

/// 호출자 스레드에서 바로 실행
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl TaskExecutor for InlineExecutor {
    fn submit(&self, request: TaskRequest, mut sink: EventSink) {
        execute(&request, &mut sink);
    }
}

/// tokio 블로킹 스레드 풀에서 실행
///
/// 작업 중 패닉이 나도 `Failed` 통지가 한 번 간다.
#[derive(Debug, Clone)]
pub struct BlockingExecutor {
    handle: Handle,
}

impl BlockingExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// 현재 런타임 사용. 런타임 밖에서 호출하면 패닉.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl TaskExecutor for BlockingExecutor {
    fn submit(&self, request: TaskRequest, mut sink: EventSink) {
        self.handle.spawn_blocking(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| execute(&request, &mut sink)));
            if let Err(payload) = outcome {
                let message = panic_message(payload.as_ref());
                log::error!("{:?} task panicked: {}", request.command, message);
                sink(TaskEvent::Failed {
                    correlation_token: request.clone(),
                    error: format!("task panicked: {}", message),
                });
            }
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// 요청을 블로킹 풀로 보내고 통지 채널을 돌려준다.
///
/// 완료 또는 실패 통지 뒤에 채널이 닫힌다.
pub fn spawn_task(request: TaskRequest) -> mpsc::UnboundedReceiver<TaskEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    BlockingExecutor::current().submit(
        request,
        Box::new(move |event| {
            if tx.send(event).is_err() {
                log::debug!("task event receiver dropped");
            }
        }),
    );
    rx
}

/// 요청을 현재 스레드에서 실행하고 통지를 `sink`로 보낸다.
///
/// 학습은 에포크마다 `Progress`를 보내며, 마지막에는 항상 `Completed` 또는 `Failed` 하나가 온다.
pub fn execute<F>(request: &TaskRequest, sink: &mut F)
where
    F: FnMut(TaskEvent) + ?Sized,
{
    match run(request, sink) {
        Ok(result) => sink(TaskEvent::Completed {
            correlation_token: request.clone(),
            result,
        }),
        Err(e) => {
            log::warn!("{:?} task failed: {:#}", request.command, e);
            sink(TaskEvent::Failed {
                correlation_token: request.clone(),
                error: format!("{:#}", e),
            })
        }
    }
}

fn run<F>(request: &TaskRequest, sink: &mut F) -> anyhow::Result<TaskOutput>
where
    F: FnMut(TaskEvent) + ?Sized,
{
    let command = request.command()?;
    let mut rbm = Rbm::from_state(request.model.clone()).context("restoring model state")?;
    let mut rng = rand::thread_rng();

    let output = match command {
        Command::Train { data, max_epochs } => {
            let data = rows_to_matrix_with_width(&data, rbm.num_visible()).context("reading training data")?;
            let mut report_progress = |p: &EpochProgress| {
                sink(TaskEvent::Progress {
                    progress_percent: p.progress_percent(),
                    error: p.error,
                })
            };
            rbm.train_with(
                &data,
                max_epochs.unwrap_or(DEFAULT_MAX_EPOCHS),
                &mut rng,
                &mut report_progress,
            )
            .context("train")?;
            TaskOutput::Weights(matrix_to_rows(rbm.weights()))
        }
        Command::RunVisible { data } => {
            let data = rows_to_matrix_with_width(&data, rbm.num_visible()).context("reading visible data")?;
            let states = rbm.run_visible_with(&data, &mut rng).context("run_visible")?;
            TaskOutput::States(matrix_to_rows(&states))
        }
        Command::RunHidden { data } => {
            let data = rows_to_matrix_with_width(&data, rbm.num_hidden()).context("reading hidden data")?;
            let states = rbm.run_hidden_with(&data, &mut rng).context("run_hidden")?;
            TaskOutput::States(matrix_to_rows(&states))
        }
        Command::Daydream { num_samples } => {
            let samples = rbm.daydream_with(num_samples, &mut rng).context("daydream")?;
            TaskOutput::States(matrix_to_rows(&samples))
        }
    };
    Ok(output)
}
