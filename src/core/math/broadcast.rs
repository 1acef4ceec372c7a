//! 원소별 연산과 브로드캐스팅
//!
//! - `each`: 중첩 시퀀스 위의 일반 브로드캐스팅 (스칼라는 모든 위치에 재사용)
//! - `map`, `zip_map`: 행렬 전용의 고정된 원소별 연산

use super::nested::Nested;
use crate::core::error::{RbmError, Result};
use ndarray::{Array2, Zip};

/// `op`을 모든 인자에 원소별로 적용한다.
///
/// 인자가 모두 스칼라면 `op`을 바로 호출하고, 시퀀스가 하나라도 있으면 위치별로 재귀한다.
/// 같은 깊이의 시퀀스 인자는 길이가 모두 같아야 하며, 짧은 쪽을 비워 두는 일은 없다.
///
/// # Errors
/// * `MissingArgument` - 인자가 하나도 없을 때
/// * `LengthMismatch` - 같은 깊이의 시퀀스 길이가 다를 때
pub fn each<F>(op: F, args: &[&Nested]) -> Result<Nested>
where
    F: Fn(&[f32]) -> f32,
{
    if args.is_empty() {
        return Err(RbmError::MissingArgument("each requires at least one operand"));
    }
    each_inner(&op, args)
}

fn each_inner<F>(op: &F, args: &[&Nested]) -> Result<Nested>
where
    F: Fn(&[f32]) -> f32,
{
    let mut length: Option<usize> = None;
    for arg in args {
        if let Some(found) = arg.len() {
            match length {
                None => length = Some(found),
                Some(expected) if expected != found => {
                    return Err(RbmError::LengthMismatch { expected, found });
                }
                Some(_) => {}
            }
        }
    }

    let length = match length {
        Some(length) => length,
        None => {
            let scalars: Vec<f32> = args.iter().filter_map(|arg| arg.as_scalar()).collect();
            return Ok(Nested::Scalar(op(&scalars)));
        }
    };

    let mut out = Vec::with_capacity(length);
    for i in 0..length {
        let column: Vec<&Nested> = args
            .iter()
            .map(|arg| match arg {
                Nested::Seq(items) => &items[i],
                scalar => *scalar,
            })
            .collect();
        out.push(each_inner(op, &column)?);
    }
    Ok(Nested::Seq(out))
}

/// 행렬의 모든 원소에 스칼라 함수 적용
pub fn map<F>(matrix: &Array2<f32>, op: F) -> Array2<f32>
where
    F: Fn(f32) -> f32,
{
    matrix.mapv(op)
}

/// 형상이 같은 두 행렬에 이항 연산 적용
pub fn zip_map<F>(left: &Array2<f32>, right: &Array2<f32>, op: F) -> Result<Array2<f32>>
where
    F: Fn(f32, f32) -> f32,
{
    if left.dim() != right.dim() {
        return Err(RbmError::ShapeMismatch {
            left: left.dim(),
            right: right.dim(),
        });
    }
    Ok(Zip::from(left).and(right).map_collect(|&a, &b| op(a, b)))
}
