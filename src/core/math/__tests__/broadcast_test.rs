use crate::core::error::RbmError;
use crate::core::math::{each, map, zip_map, Nested};
use ndarray::array;

#[test]
fn 스칼라만_있으면_직접_호출_테스트() {
    let a = Nested::Scalar(2.0);
    let b = Nested::Scalar(5.0);

    let result = each(|xs| xs[0] * xs[1], &[&a, &b]).unwrap();
    assert_eq!(result, Nested::Scalar(10.0));
}

#[test]
fn 스칼라_브로드캐스팅_테스트() {
    let matrix = Nested::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let scale = Nested::Scalar(0.1);

    let result = each(|xs| xs[0] * xs[1], &[&matrix, &scale]).unwrap();
    let expected = vec![vec![0.1f32, 0.2], vec![0.3, 0.4]];
    let result = result.to_matrix().unwrap();
    for (i, row) in expected.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            assert!((result[[i, j]] - value).abs() < 1e-6);
        }
    }
}

#[test]
fn 세_인자_원소별_연산_테스트() {
    // 가중치 갱신 형태: w + lr * (p - n)
    let p = Nested::from(vec![vec![2.0, 4.0]]);
    let n = Nested::from(vec![vec![1.0, 1.0]]);
    let w = Nested::from(vec![vec![0.5, -0.5]]);

    let result = each(|xs| xs[2] + 0.5 * (xs[0] - xs[1]), &[&p, &n, &w]).unwrap();
    assert_eq!(result, Nested::from(vec![vec![1.0, 1.0]]));
}

#[test]
fn 인자_없음_오류_테스트() {
    let result = each(|xs| xs.iter().sum(), &[]);
    assert!(matches!(result, Err(RbmError::MissingArgument(_))));
}

#[test]
fn 길이_불일치_오류_테스트() {
    let long = Nested::from(vec![1.0, 2.0, 3.0]);
    let short = Nested::from(vec![1.0, 2.0]);

    let result = each(|xs| xs[0] + xs[1], &[&long, &short]);
    assert_eq!(
        result,
        Err(RbmError::LengthMismatch { expected: 3, found: 2 })
    );
}

#[test]
fn 내부_깊이_길이_불일치_오류_테스트() {
    let a = Nested::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Nested::from(vec![vec![1.0, 2.0], vec![3.0]]);

    assert!(matches!(
        each(|xs| xs[0] - xs[1], &[&a, &b]),
        Err(RbmError::LengthMismatch { expected: 2, found: 1 })
    ));
}

#[test]
fn 행렬_map_zip_map_테스트() {
    let a = array![[1.0f32, 2.0], [3.0, 4.0]];
    let b = array![[4.0f32, 3.0], [2.0, 1.0]];

    assert_eq!(map(&a, |x| x * 2.0), array![[2.0, 4.0], [6.0, 8.0]]);
    assert_eq!(zip_map(&a, &b, |x, y| x + y).unwrap(), array![[5.0, 5.0], [5.0, 5.0]]);

    let c = array![[1.0f32, 2.0, 3.0]];
    assert!(matches!(
        zip_map(&a, &c, |x, y| x + y),
        Err(RbmError::ShapeMismatch { left: (2, 2), right: (1, 3) })
    ));
}
