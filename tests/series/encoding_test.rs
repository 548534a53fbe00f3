// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use infosig::series::{RawSeries, SYMBOL_WIDTH, Series};
use infosig::InformError;

#[test]
fn encode_accepts_all_buffer_kinds() {
    let numbers = [1.0f64, 1.0, 0.0, 0.0, 1.0];
    let ints = [1i32, 1, 0, 0, 1];
    let bytes: &[u8] = bytemuck::cast_slice(&ints);

    let from_numbers = Series::encode(&numbers).unwrap();
    let from_ints = Series::encode(&ints).unwrap();
    let from_bytes = Series::encode(bytes).unwrap();

    assert_eq!(from_numbers.as_slice(), &ints);
    assert_eq!(from_numbers, from_ints);
    assert_eq!(from_ints, from_bytes);
    assert_eq!(from_ints.len(), 5);
    assert!(!from_ints.is_empty());
    assert_eq!(from_ints.to_array().to_vec(), ints.to_vec());
}

#[test]
fn encode_reads_unaligned_byte_buffers() {
    let ints = [3i32, 0, 7, 2];
    let mut padded = vec![0u8];
    padded.extend_from_slice(bytemuck::cast_slice(&ints));

    // One of the two views is misaligned for i32; both must decode the same.
    let series = Series::encode(&padded[1..]).unwrap();
    assert_eq!(series.as_slice(), &ints);
}

#[test]
fn encode_rejects_empty_input() {
    let empty: [i32; 0] = [];
    assert_eq!(Series::encode(&empty), Err(InformError::EmptyInput));
    let no_bytes: &[u8] = &[];
    assert_eq!(Series::encode(no_bytes), Err(InformError::EmptyInput));
}

#[test]
fn encode_rejects_non_integers() {
    assert_eq!(
        Series::encode(&[0.5f64, 0.0, 0.0]),
        Err(InformError::NonIntegerValue {
            index: 0,
            value: 0.5
        })
    );
    assert!(matches!(
        Series::encode(&[0.0f64, f64::NAN]),
        Err(InformError::NonIntegerValue { index: 1, .. })
    ));
    assert!(matches!(
        Series::encode(&[0.0f64, f64::INFINITY]),
        Err(InformError::NonIntegerValue { index: 1, .. })
    ));
    // Whole numbers beyond the 32-bit range are not valid symbols either.
    assert!(matches!(
        Series::encode(&[4_294_967_296.0f64]),
        Err(InformError::NonIntegerValue { index: 0, .. })
    ));
}

#[test]
fn encode_checks_integrality_before_sign() {
    assert!(matches!(
        Series::encode(&[-0.5f64]),
        Err(InformError::NonIntegerValue { index: 0, .. })
    ));
}

#[test]
fn encode_rejects_negative_values_in_every_representation() {
    let expected = Err(InformError::NegativeValue {
        index: 0,
        value: -1,
    });
    let ints = [-1i32, 0, 0];
    assert_eq!(Series::encode(&[-1.0f64, 0.0, 0.0]), expected);
    assert_eq!(Series::encode(&ints), expected);
    assert_eq!(
        Series::encode(bytemuck::cast_slice::<i32, u8>(&ints)),
        expected
    );
    assert_eq!(
        Series::encode(&[1i32, 0, -4]),
        Err(InformError::NegativeValue {
            index: 2,
            value: -4
        })
    );
}

#[test]
fn encode_rejects_inconsistent_byte_buffers() {
    let bytes: &[u8] = &[1, 0, 1];
    assert_eq!(
        Series::encode(bytes),
        Err(InformError::InconsistentBufferLength {
            len: 3,
            width: SYMBOL_WIDTH
        })
    );
}

#[test]
fn encode_pair_checks_lengths_before_emptiness() {
    let empty: [i32; 0] = [];
    assert_eq!(
        Series::encode_pair(&empty, &[0i32]),
        Err(InformError::LengthMismatch { left: 0, right: 1 })
    );
    assert_eq!(
        Series::encode_pair(&[0i32], &empty),
        Err(InformError::LengthMismatch { left: 1, right: 0 })
    );
    assert_eq!(
        Series::encode_pair(&empty, &empty),
        Err(InformError::EmptyInput)
    );
}

#[test]
fn encode_pair_mixes_representations() {
    let xs = [1i32, 1, 0];
    let ys = vec![0.0f64, 1.0, 1.0];
    let (a, b) = Series::encode_pair(RawSeries::from(&xs), &ys).unwrap();
    assert_eq!(a.as_slice(), &[1, 1, 0]);
    assert_eq!(b.as_slice(), &[0, 1, 1]);
}

#[test]
fn raw_len_counts_elements_or_bytes() {
    let ints = [1i32, 2];
    assert_eq!(RawSeries::from(&ints).raw_len(), 2);
    assert_eq!(
        RawSeries::from(bytemuck::cast_slice::<i32, u8>(&ints)).raw_len(),
        8
    );
}

#[test]
fn base_is_implied_by_largest_symbol() {
    assert_eq!(Series::encode(&[0i32, 0, 0]).unwrap().base(), 2);
    assert_eq!(Series::encode(&[1i32, 0, 1]).unwrap().base(), 2);
    assert_eq!(Series::encode(&[3i32, 1, 0]).unwrap().base(), 4);
}

#[test]
fn error_messages_name_the_problem() {
    let cases = [
        (
            InformError::LengthMismatch { left: 0, right: 1 },
            "different lengths",
        ),
        (
            InformError::NonIntegerValue {
                index: 0,
                value: 0.5,
            },
            "not an integer",
        ),
        (
            InformError::NegativeValue {
                index: 0,
                value: -1,
            },
            "negative",
        ),
        (
            InformError::InconsistentBufferLength { len: 3, width: 4 },
            "inconsistent",
        ),
        (
            InformError::InvalidHistoryLength { k: 3, len: 2 },
            "history length",
        ),
        (
            InformError::InsufficientPermutations { nperm: 9, min: 10 },
            "too few permutations",
        ),
        (InformError::EmptyInput, "empty"),
    ];
    for (err, needle) in cases {
        let message = err.to_string();
        assert!(message.contains(needle), "{message:?} lacks {needle:?}");
    }
}
