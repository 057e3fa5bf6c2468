use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{LengthPolicy, TransformError, mutate_in_place, parallel, transform, transform_in_place, try_transform, zip_transform};

use super::util::{Rejected, sequences};

#[test]
fn matches_sequential() {
    for (seed, &len) in sequences::LENGTHS.iter().enumerate() {
        let a = sequences::random_ints(len, seed as u64);
        let b = sequences::random_floats(len, seed as u64 + 1);

        assert_eq!(parallel::par_transform(&a, |&v| f64::from(v) / 2.), transform(&a, |&v| f64::from(v) / 2.));
        assert_eq!(
            parallel::par_zip_transform(&a, &b, LengthPolicy::Strict, |&x, y| f64::from(x) * y).unwrap(),
            zip_transform(&a, &b, |&x, y| f64::from(x) * y).unwrap()
        );

        let mut sequential = a.clone();
        let mut par = a.clone();
        transform_in_place(&mut sequential, |v| v.wrapping_mul(31));
        parallel::par_transform_in_place(&mut par, |v| v.wrapping_mul(31));
        assert_eq!(par, sequential);

        mutate_in_place(&mut sequential, |v| *v -= 1);
        parallel::par_mutate_in_place(&mut par, |v| *v -= 1);
        assert_eq!(par, sequential);
    }
}

#[test]
fn reports_lowest_failing_index() {
    let input: Vec<i32> = (0..10_000).map(|v| if v % 1000 == 999 { -v } else { v }).collect();
    let f = |&v: &i32| if v < 0 { Err(Rejected(v)) } else { Ok(v * 2) };

    let result = parallel::par_try_transform(&input, f);
    assert!(matches!(result, Err(TransformError::Mapping { index: 999, source: Rejected(-999) })));
    assert!(matches!(try_transform(&input, f), Err(TransformError::Mapping { index: 999, .. })));
}

#[test]
fn try_transform_stops_after_failure() {
    let input: Vec<i32> = (0..100_000).collect();
    let calls = AtomicUsize::new(0);

    let result = parallel::par_try_transform(&input, |&v| {
        calls.fetch_add(1, Ordering::Relaxed);
        if v == 0 { Err(Rejected(v)) } else { Ok(v) }
    });
    assert!(matches!(result, Err(TransformError::Mapping { index: 0, source: Rejected(0) })));
    assert!(calls.load(Ordering::Relaxed) < input.len() / 2);
}

#[test]
fn try_transform_succeeds() {
    let input = sequences::random_ints(500, 9);
    let output = parallel::par_try_transform(&input, |&v| Ok::<_, Rejected>(i64::from(v))).unwrap();
    assert_eq!(output, transform(&input, |&v| i64::from(v)));
}

#[test]
fn zip_length_policy() {
    let a = [1, 2, 3];
    let b = [1, 1];
    assert!(matches!(
        parallel::par_zip_transform(&a, &b, LengthPolicy::Strict, |x, y| x + y),
        Err(TransformError::LengthMismatch { required: 3, available: 2 })
    ));
    assert_eq!(parallel::par_zip_transform(&a, &b, LengthPolicy::Truncate, |x, y| x + y).unwrap(), [2, 3]);
}
