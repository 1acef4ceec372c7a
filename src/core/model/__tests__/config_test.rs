use crate::core::error::RbmError;
use crate::core::model::*;

#[test]
fn 기본_구성값_테스트() {
    let config = RbmConfig::new(6, 2);

    assert_eq!(config.num_visible, 6);
    assert_eq!(config.num_hidden, 2);
    assert_eq!(config.learning_rate, 0.1, "학습률 기본값은 0.1");
    assert_eq!(config.weight_init_std, 0.1);
    assert_eq!(DEFAULT_MAX_EPOCHS, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn 빌더_설정_테스트() {
    let config = RbmConfig::new(3, 4)
        .with_learning_rate(0.05)
        .with_weight_init_std(0.0);

    assert_eq!(config.learning_rate, 0.05);
    assert_eq!(config.weight_init_std, 0.0);
    assert!(config.validate().is_ok());
}

#[test]
fn 잘못된_구성_검증_테스트() {
    for lr in [0.0f32, -0.1, f32::NAN, f32::INFINITY] {
        let config = RbmConfig::new(2, 2).with_learning_rate(lr);
        assert!(
            matches!(config.validate(), Err(RbmError::InvalidConfig(_))),
            "학습률 {}은 거부되어야 함",
            lr
        );
    }

    let config = RbmConfig::new(2, 2).with_weight_init_std(-1.0);
    assert!(matches!(config.validate(), Err(RbmError::InvalidConfig(_))));
}
