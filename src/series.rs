// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of raw observations into validated symbol series.
//!
//! All measures of this crate operate on [`Series`], an immutable sequence of
//! non-negative `i32` symbols. Callers hand in whatever representation they
//! hold through [`RawSeries`]:
//!
//! - an ordered sequence of numbers (`&[f64]`), each of which must be a whole number,
//! - a 32-bit signed integer buffer (`&[i32]`),
//! - a raw byte buffer (`&[u8]`) holding native-endian `i32` values.
//!
//! ```rust
//! use infosig::series::{RawSeries, Series};
//!
//! let xs = Series::encode(&[0.0f64, 1.0, 1.0, 2.0]).unwrap();
//! assert_eq!(xs.as_slice(), &[0, 1, 1, 2]);
//! assert_eq!(xs.base(), 3);
//!
//! let bytes: &[u8] = bytemuck::cast_slice(&[1i32, 0, 1]);
//! let ys = Series::encode(RawSeries::from(bytes)).unwrap();
//! assert_eq!(ys.as_slice(), &[1, 0, 1]);
//! ```

use crate::error::{InformError, Result};
use bytemuck::PodCastError;
use ndarray::Array1;

/// Width in bytes of one symbol inside a raw byte buffer.
pub const SYMBOL_WIDTH: usize = std::mem::size_of::<i32>();

/// Borrowed, not yet validated observations.
#[derive(Debug, Clone, Copy)]
pub enum RawSeries<'a> {
    /// Ordered numeric sequence; every element must be a whole number.
    Numbers(&'a [f64]),
    /// Fixed-width 32-bit signed integer buffer.
    Int32(&'a [i32]),
    /// Raw bytes decoded as native-endian 32-bit signed integers.
    Bytes(&'a [u8]),
}

impl RawSeries<'_> {
    /// Number of raw elements (bytes for [`RawSeries::Bytes`]).
    pub fn raw_len(&self) -> usize {
        match self {
            RawSeries::Numbers(values) => values.len(),
            RawSeries::Int32(values) => values.len(),
            RawSeries::Bytes(bytes) => bytes.len(),
        }
    }

    /// Decode into symbols without checking emptiness.
    fn decode(self) -> Result<Vec<i32>> {
        match self {
            RawSeries::Numbers(values) => values
                .iter()
                .enumerate()
                .map(|(index, &value)| number_to_symbol(index, value))
                .collect(),
            RawSeries::Int32(values) => {
                check_non_negative(values)?;
                Ok(values.to_vec())
            }
            RawSeries::Bytes(bytes) => {
                let symbols = bytes_to_i32(bytes)?;
                check_non_negative(&symbols)?;
                Ok(symbols)
            }
        }
    }
}

impl<'a> From<&'a [f64]> for RawSeries<'a> {
    fn from(values: &'a [f64]) -> Self {
        RawSeries::Numbers(values)
    }
}

impl<'a> From<&'a Vec<f64>> for RawSeries<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        RawSeries::Numbers(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for RawSeries<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        RawSeries::Numbers(values.as_slice())
    }
}

impl<'a> From<&'a [i32]> for RawSeries<'a> {
    fn from(values: &'a [i32]) -> Self {
        RawSeries::Int32(values)
    }
}

impl<'a> From<&'a Vec<i32>> for RawSeries<'a> {
    fn from(values: &'a Vec<i32>) -> Self {
        RawSeries::Int32(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [i32; N]> for RawSeries<'a> {
    fn from(values: &'a [i32; N]) -> Self {
        RawSeries::Int32(values.as_slice())
    }
}

impl<'a> From<&'a [u8]> for RawSeries<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        RawSeries::Bytes(bytes)
    }
}

/// A validated, immutable sequence of non-negative symbols with at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    data: Vec<i32>,
}

impl Series {
    /// Validate and normalize a single series.
    pub fn encode<'a>(raw: impl Into<RawSeries<'a>>) -> Result<Self> {
        let data = raw.into().decode()?;
        if data.is_empty() {
            return Err(InformError::EmptyInput);
        }
        Ok(Self { data })
    }

    /// Validate and normalize two series that are analysed together.
    ///
    /// Lengths are compared before emptiness, so an empty series paired with a
    /// non-empty one reports [`InformError::LengthMismatch`].
    pub fn encode_pair<'a, 'b>(
        x: impl Into<RawSeries<'a>>,
        y: impl Into<RawSeries<'b>>,
    ) -> Result<(Self, Self)> {
        let xs = x.into().decode()?;
        let ys = y.into().decode()?;
        if xs.len() != ys.len() {
            return Err(InformError::LengthMismatch {
                left: xs.len(),
                right: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(InformError::EmptyInput);
        }
        Ok((Self { data: xs }, Self { data: ys }))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Never true for an encoded series.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Copy of the symbols as an `ndarray` vector.
    pub fn to_array(&self) -> Array1<i32> {
        Array1::from(self.data.clone())
    }

    /// Alphabet size implied by the largest symbol, never smaller than 2.
    pub fn base(&self) -> i32 {
        self.data
            .iter()
            .fold(2, |base, &symbol| base.max(symbol.saturating_add(1)))
    }

    /// Owned working copy used as scratch space by the permutation engine.
    pub(crate) fn scratch(&self) -> Vec<i32> {
        self.data.clone()
    }
}

fn number_to_symbol(index: usize, value: f64) -> Result<i32> {
    let representable = value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX);
    if !representable {
        return Err(InformError::NonIntegerValue { index, value });
    }
    let symbol = value as i32;
    if symbol < 0 {
        return Err(InformError::NegativeValue {
            index,
            value: i64::from(symbol),
        });
    }
    Ok(symbol)
}

fn check_non_negative(symbols: &[i32]) -> Result<()> {
    match symbols.iter().position(|&s| s < 0) {
        Some(index) => Err(InformError::NegativeValue {
            index,
            value: i64::from(symbols[index]),
        }),
        None => Ok(()),
    }
}

/// Reinterpret a byte buffer as native-endian `i32` values.
fn bytes_to_i32(bytes: &[u8]) -> Result<Vec<i32>> {
    if bytes.len() % SYMBOL_WIDTH != 0 {
        return Err(InformError::InconsistentBufferLength {
            len: bytes.len(),
            width: SYMBOL_WIDTH,
        });
    }
    match bytemuck::try_cast_slice::<u8, i32>(bytes) {
        Ok(symbols) => Ok(symbols.to_vec()),
        // Unaligned input is copied into a fresh, aligned allocation.
        Err(PodCastError::TargetAlignmentGreaterAndInputNotAligned) => Ok(bytes
            .chunks_exact(SYMBOL_WIDTH)
            .map(bytemuck::pod_read_unaligned::<i32>)
            .collect()),
        Err(_) => Err(InformError::InconsistentBufferLength {
            len: bytes.len(),
            width: SYMBOL_WIDTH,
        }),
    }
}
