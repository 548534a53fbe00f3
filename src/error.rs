// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by the encoder, the estimators and the permutation engine.
//!
//! Every variant is an input-validation failure. They are raised before any
//! frequency table is built, so a caller never observes a partial result.

use thiserror::Error;

/// Errors raised while validating series, history lengths or permutation counts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InformError {
    /// A series with zero observations.
    #[error("time series is empty")]
    EmptyInput,

    /// Two series analysed together have different lengths.
    #[error("time series have different lengths: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// An element is not a whole number representable as a 32-bit integer.
    #[error("element {index} of time series is not an integer: {value}")]
    NonIntegerValue { index: usize, value: f64 },

    /// An element is below zero; symbols must be non-negative.
    #[error("element {index} of time series is negative: {value}")]
    NegativeValue { index: usize, value: i64 },

    /// A raw byte buffer cannot be split evenly into integers.
    #[error("inconsistent buffer length: {len} bytes is not a multiple of {width}")]
    InconsistentBufferLength { len: usize, width: usize },

    /// The history length leaves no aligned observation.
    #[error("invalid history length {k} for a series of length {len}")]
    InvalidHistoryLength { k: usize, len: usize },

    /// Fewer permutations than required for a meaningful p-value.
    #[error("too few permutations; got {nperm} < {min}")]
    InsufficientPermutations { nperm: usize, min: usize },
}

/// Result type alias for fallible operations of this crate.
pub type Result<T> = std::result::Result<T, InformError>;
