//! Tests for transition records and the transition log.

use scatterfit::prelude::*;

/// Beginning a transition returns monotonically increasing handles and
/// records in issue order.
#[test]
fn test_begin_returns_increasing_handles() {
    let mut log: TransitionLog<f64> = TransitionLog::new();

    let first = log.begin(
        TransitionTarget::RegressionLine,
        "x1",
        AttributeValue::Scalar(0.0),
        AttributeValue::Scalar(10.0),
        1500.0,
    );
    let second = log.begin(
        TransitionTarget::Mark("a".to_string()),
        "fill",
        AttributeValue::Paint("#111".to_string()),
        AttributeValue::Paint("#222".to_string()),
        1500.0,
    );

    assert_eq!(first, TransitionHandle(0));
    assert_eq!(second, TransitionHandle(1));
    assert_eq!(log.len(), 2);

    let records = log.take();
    assert_eq!(records[0].attribute, "x1");
    assert_eq!(records[1].attribute, "fill");
}

/// Taking the log drains it; handles keep increasing afterwards.
#[test]
fn test_take_drains_log() {
    let mut log: TransitionLog<f64> = TransitionLog::new();
    log.begin(
        TransitionTarget::XAxis,
        "domain-min",
        AttributeValue::Scalar(0.0),
        AttributeValue::Scalar(1.0),
        100.0,
    );

    assert!(!log.is_empty());
    assert_eq!(log.take().len(), 1);
    assert!(log.is_empty());
    assert!(log.take().is_empty());

    let next = log.begin(
        TransitionTarget::YAxis,
        "domain-max",
        AttributeValue::Scalar(1.0),
        AttributeValue::Scalar(2.0),
        100.0,
    );
    assert_eq!(next, TransitionHandle(1));
}

/// Records carry both endpoints and the duration; nothing is interpolated.
#[test]
fn test_record_contents() {
    let mut log: TransitionLog<f64> = TransitionLog::new();
    log.begin(
        TransitionTarget::Mark("b".to_string()),
        "cy",
        AttributeValue::Scalar(50.0),
        AttributeValue::Scalar(25.0),
        300.0,
    );

    let record = &log.take()[0];
    assert_eq!(record.target, TransitionTarget::Mark("b".to_string()));
    assert_eq!(record.from, AttributeValue::Scalar(50.0));
    assert_eq!(record.to, AttributeValue::Scalar(25.0));
    assert_eq!(record.duration, 300.0);
}
