// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infosig::estimators::approaches::discrete::mle::DiscreteEntropy;
use infosig::estimators::entropy::Entropy;
use infosig::estimators::{GlobalValue, LocalValues, OptionalLocalValues};
use infosig::series::Series;
use infosig::{InformError, entropy, mutual_information};
use rstest::*;

#[test]
fn discrete_entropy_known_example() {
    let series = Series::encode(&[1i32, 1, 2, 3, 3, 4, 5]).unwrap();
    let est = DiscreteEntropy::new(&series);

    // H = log2(7) - (4/7) bits
    let expected_h = 7f64.log2() - 4.0 / 7.0;
    assert_abs_diff_eq!(est.global_value(), expected_h, epsilon = 1e-12);

    let locals = est.local_values();
    let twice = (7.0f64 / 2.0).log2();
    let once = 7f64.log2();
    let expected_locals = [twice, twice, once, twice, twice, once, once];
    for (i, &val) in locals.iter().enumerate() {
        assert_abs_diff_eq!(val, expected_locals[i], epsilon = 1e-12);
    }

    assert!(est.supports_local());
    assert_eq!(est.local_values_opt().unwrap().len(), locals.len());
    assert_eq!(est.table().count(&3), 2);
    assert_eq!(est.table().total(), 7);
}

#[rstest]
#[case(vec![0, 1, 0, 1], 1.0)]
#[case(vec![0, 1, 2, 3, 0, 1, 2, 3], 2.0)]
#[case(vec![4, 4, 4, 4], 0.0)]
#[case(vec![7], 0.0)]
#[case(vec![0, 0, 0, 1], 0.811278)]
fn entropy_reference_values(#[case] xs: Vec<i32>, #[case] expected: f64) {
    assert_abs_diff_eq!(entropy(&xs).unwrap(), expected, epsilon = 1e-6);
}

#[test]
fn entropy_of_constant_series_is_exactly_zero() {
    let value = entropy(&[3i32; 16]).unwrap();
    assert_eq!(value, 0.0);
    assert!(value.is_sign_positive());
}

#[test]
fn entropy_local_values_of_skewed_series() {
    let est = Entropy::new_discrete(&[0i32, 0, 0, 1]).unwrap();
    let locals = est.local_values();
    let common = (4.0f64 / 3.0).log2();
    assert_abs_diff_eq!(locals[0], common, epsilon = 1e-12);
    assert_abs_diff_eq!(locals[2], common, epsilon = 1e-12);
    assert_abs_diff_eq!(locals[3], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(est.global_from_local(), est.global_value(), epsilon = 1e-12);
}

#[test]
fn entropy_bounds_self_information() {
    let xs = [0i32, 2, 1, 1, 0, 2, 2, 1, 0, 0];
    let h = entropy(&xs).unwrap();
    assert_abs_diff_eq!(mutual_information(&xs, &xs).unwrap(), h, epsilon = 1e-12);
    assert!(h <= 3f64.log2() + 1e-12);
}

#[test]
fn entropy_sparse_symbols_match_dense_symbols() {
    let dense = entropy(&[0i32, 1, 1, 2]).unwrap();
    let sparse = entropy(&[0i32, 100_000, 100_000, 7_000_000]).unwrap();
    assert_abs_diff_eq!(dense, sparse, epsilon = 1e-12);
}

#[test]
fn entropy_validates_input() {
    let empty: [f64; 0] = [];
    assert_eq!(entropy(&empty), Err(InformError::EmptyInput));
    assert!(matches!(
        entropy(&[0i32, -2]),
        Err(InformError::NegativeValue { index: 1, value: -2 })
    ));
}
