use crate::{TransformError, cast, transform};

use super::util::sequences;

#[test]
fn widen_ints() {
    let input = sequences::random_ints(100, 5);
    let output: Vec<f64> = cast(&input).unwrap();
    assert_eq!(output, transform(&input, |&v| f64::from(v)));
}

#[test]
fn unrepresentable() {
    let result = cast::<_, u8>(&[1, 255, 256, -1]);
    assert!(matches!(result, Err(TransformError::Unrepresentable { index: 2 })));

    let result = cast::<_, i32>(&[1.5, f64::NAN]);
    assert!(matches!(result, Err(TransformError::Unrepresentable { index: 1 })));
}

#[test]
fn truncates_floats() {
    let output: Vec<i64> = cast(&[1.9f32, -2.5, 0.]).unwrap();
    assert_eq!(output, [1, -2, 0]);
}

#[test]
fn empty() {
    let input: [u64; 0] = [];
    assert!(cast::<_, f32>(&input).unwrap().is_empty());
}
