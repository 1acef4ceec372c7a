use crate::core::error::RbmError;
use crate::core::math::*;
use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn 행렬곱_형상과_값_테스트() {
    let a = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let b = array![[7.0f32, 8.0], [9.0, 10.0], [11.0, 12.0]];

    let c = dot(&a, &b).unwrap();
    assert_eq!(c.dim(), (2, 2));
    assert_eq!(c, array![[58.0, 64.0], [139.0, 154.0]]);
}

#[test]
fn 행렬곱_임의_행렬_합산_정의_테스트() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = uniform_matrix(&mut rng, 4, 3);
    let b = normal_matrix(&mut rng, 3, 5);

    let c = dot(&a, &b).unwrap();
    assert_eq!(c.dim(), (4, 5));
    for i in 0..4 {
        for j in 0..5 {
            let expected: f32 = (0..3).map(|t| a[[i, t]] * b[[t, j]]).sum();
            assert!((c[[i, j]] - expected).abs() < 1e-5);
        }
    }
}

#[test]
fn 행렬곱_전치_보정_없이_형상_오류_테스트() {
    // 행 수가 같아도 자동 전치하지 않음
    let a = array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let b = array![[1.0f32, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    assert_eq!(
        dot(&a, &b),
        Err(RbmError::ShapeMismatch { left: (3, 2), right: (3, 3) })
    );
    // 명시적으로 전치하면 성공
    assert_eq!(dot(&a.t(), &b).unwrap().dim(), (2, 3));
}

#[test]
fn 전치_두번_원복_테스트() {
    let a = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let t = transpose(&a);

    assert_eq!(t.dim(), (3, 2));
    assert_eq!(t[[2, 1]], 6.0);
    assert_eq!(transpose(&t), a);
}

#[test]
fn 빈_전치_테스트() {
    let empty = Nested::Seq(Vec::new());
    assert_eq!(transpose_nested(&empty).unwrap(), Nested::Seq(Vec::new()));

    let matrix = Array2::<f32>::zeros((0, 3));
    assert_eq!(transpose(&matrix).dim(), (3, 0));
}

#[test]
fn 중첩_전치_테스트() {
    let a = Nested::from(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
    let t = transpose_nested(&a).unwrap();

    assert_eq!(t, Nested::from(vec![vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]));
    assert_eq!(transpose_nested(&t).unwrap(), a);
}

#[test]
fn 중첩_행렬곱_방향_승격_테스트() {
    let w = Nested::from(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);

    // 1차원 왼쪽 피연산자 → 행 벡터
    let row = Nested::from(vec![1.0, 0.0, 1.0]);
    let hidden = dot_nested(&row, &w).unwrap();
    assert_eq!(hidden, Nested::from(vec![vec![6.0, 8.0]]));

    // 1차원 오른쪽 피연산자 → 열 벡터
    let column = Nested::from(vec![1.0, 1.0]);
    let visible = dot_nested(&w, &column).unwrap();
    assert_eq!(visible, Nested::from(vec![vec![3.0], vec![7.0], vec![11.0]]));

    // 방향이 맞지 않으면 실패
    let wrong = Nested::from(vec![1.0, 1.0]);
    assert!(matches!(
        dot_nested(&wrong, &w),
        Err(RbmError::ShapeMismatch { left: (1, 2), right: (3, 2) })
    ));
}

#[test]
fn 바이어스_열_추가_제거_테스트() {
    let data = array![[0.0f32, 1.0], [1.0, 0.0]];
    let augmented = with_bias_column(&data);

    assert_eq!(augmented, array![[1.0, 0.0, 1.0], [1.0, 1.0, 0.0]]);
    assert_eq!(strip_bias_column(&augmented), data);
    // 원본은 그대로
    assert_eq!(data, array![[0.0, 1.0], [1.0, 0.0]]);
}

#[test]
fn 확률_상태_샘플링_테스트() {
    let mut rng = StdRng::seed_from_u64(11);
    let probabilities = array![[0.0f32, 1.0, 0.5], [1.0, 0.0, 0.5]];

    let states = sample_states(&probabilities, &mut rng).unwrap();
    assert_eq!(states.dim(), (2, 3));
    assert!(states.iter().all(|&s| s == 0.0 || s == 1.0));
    // 확률 0은 항상 꺼짐
    assert_eq!(states[[0, 0]], 0.0);
    assert_eq!(states[[1, 1]], 0.0);
}
