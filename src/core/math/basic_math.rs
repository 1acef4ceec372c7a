use super::nested::Nested;

/// 로지스틱 함수 `1 / (1 + e^-x)`
#[inline]
pub fn logistic(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// 중첩 시퀀스의 모든 스칼라 합. 스칼라는 자기 자신.
pub fn sum(value: &Nested) -> f32 {
    match value {
        Nested::Scalar(x) => *x,
        Nested::Seq(items) => items.iter().map(sum).sum(),
    }
}

/// 확률과 균등 난수를 비교해 0/1 상태로 이진화
#[inline]
pub fn bernoulli_state(probability: f32, draw: f32) -> f32 {
    if probability > draw {
        1.0
    } else {
        0.0
    }
}
