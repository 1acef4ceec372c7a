use crate::core::error::RbmError;
use crate::core::math::*;
use ndarray::array;

#[test]
fn 중첩값_json_표현_테스트() -> anyhow::Result<()> {
    let value: Nested = serde_json::from_str("[[1, 0.5], [0, 2]]")?;
    assert_eq!(value.shape(), vec![2, 2]);
    assert_eq!(value.to_matrix()?, array![[1.0, 0.5], [0.0, 2.0]]);

    let scalar: Nested = serde_json::from_str("0.25")?;
    assert_eq!(scalar, Nested::Scalar(0.25));
    assert_eq!(serde_json::to_string(&Nested::from(vec![1.5]))?, "[1.5]");
    Ok(())
}

#[test]
fn 비직사각형_행렬_변환_오류_테스트() {
    let ragged = Nested::from(vec![vec![1.0, 2.0], vec![3.0]]);
    assert_eq!(ragged.to_matrix(), Err(RbmError::RaggedSequence));
    assert_eq!(Nested::Scalar(1.0).to_matrix(), Err(RbmError::RaggedSequence));

    let rows = vec![vec![1.0f32, 2.0], vec![3.0]];
    assert_eq!(rows_to_matrix(&rows), Err(RbmError::RaggedSequence));
}

#[test]
fn 행_벡터_변환_테스트() {
    let matrix = array![[1.0f32, 2.0], [3.0, 4.0]];
    let rows = matrix_to_rows(&matrix);

    assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(rows_to_matrix(&rows).unwrap(), matrix);
    assert_eq!(Nested::from_matrix(&matrix).to_matrix().unwrap(), matrix);
    assert_eq!(rows_to_matrix(&[]).unwrap().dim(), (0, 0));
}

#[test]
fn 열_수_지정_빈_행_변환_테스트() -> anyhow::Result<()> {
    assert_eq!(rows_to_matrix_with_width(&[], 4)?.dim(), (0, 4));

    let rows = vec![vec![1.0f32, 0.0, 1.0]];
    assert_eq!(rows_to_matrix_with_width(&rows, 3)?, array![[1.0, 0.0, 1.0]]);
    assert_eq!(
        rows_to_matrix_with_width(&[vec![1.0f32], vec![]], 1),
        Err(RbmError::RaggedSequence)
    );
    Ok(())
}
