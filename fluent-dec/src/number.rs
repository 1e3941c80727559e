// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helpers over the underlying arbitrary-precision decimal.

use std::cmp::Ordering;
use std::str::FromStr;

use dec::{Context, Decimal, Decimal128, OrderedDecimal};

use crate::context::{PrecisionContext, RoundingMode};
use crate::error::{Error, Result};

/// The number of coefficient units in a [`Number`]. Each unit holds three
/// decimal digits.
pub const NUMBER_UNITS: usize = 34;

/// The maximum number of significant digits a [`Number`] can hold.
pub const MAX_PRECISION: u32 = (NUMBER_UNITS * 3) as u32;

/// The decimal number every fluent decimal wraps.
pub type Number = Decimal<NUMBER_UNITS>;

/// Parses a finite number from its string representation.
///
/// NaNs and infinities are rejected.
pub fn parse(s: &str) -> Result<Number> {
    let n = Context::<Number>::default()
        .parse(s)
        .map_err(|_| Error::InvalidValue(s.to_string()))?;
    finite(n)
}

/// Returns `n` if it is finite, or an error otherwise.
pub fn finite(n: Number) -> Result<Number> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(Error::InvalidValue(n.to_string()))
    }
}

/// Constructs a number from an `i32`.
pub fn from_i32(n: i32) -> Number {
    Number::from(Decimal128::from(n))
}

/// Constructs a number from a `u32`.
pub fn from_u32(n: u32) -> Number {
    Number::from(Decimal128::from(n))
}

// Processes the integer in 32-bit chunks, most significant first. Only the
// first chunk is sign aware; each further chunk computes `d = d * 2^32 + n`.
// A `Number` holds 102 digits, so every step is exact.
macro_rules! from_wide_int {
    ($($name:ident: $t:ty => $first:ty, $from_first:ident);*) => {
        $(
            #[doc = concat!("Constructs a number from an `", stringify!($t), "`.")]
            pub fn $name(n: $t) -> Number {
                let bytes = n.to_be_bytes();
                let mut cx = Context::<Number>::default();
                let mut two_pow_32 = from_u32(1 << 16);
                cx.mul(&mut two_pow_32, &from_u32(1 << 16));

                let head = [bytes[0], bytes[1], bytes[2], bytes[3]];
                let mut d = $from_first(<$first>::from_be_bytes(head));
                for chunk in bytes[4..].chunks(4) {
                    cx.mul(&mut d, &two_pow_32);
                    let n = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                    cx.add(&mut d, &from_u32(n));
                }
                d
            }
        )*
    };
}

from_wide_int! {
    from_i64: i64 => i32, from_i32;
    from_u64: u64 => u32, from_u32;
    from_i128: i128 => i32, from_i32;
    from_u128: u128 => u32, from_u32
}

/// Returns `n` with a negative zero replaced by a positive zero of the same
/// scale, e.g. `-0.00` becomes `0.00`. Other numbers are returned unchanged.
pub fn unsigned_zero(n: &Number) -> Number {
    let mut n = n.clone();
    if n.is_zero() && n.is_negative() {
        Context::<Number>::default().abs(&mut n);
    }
    n
}

/// Returns the number of digits to the right of the decimal point.
///
/// Negative for numbers with trailing zeros in exponent notation, e.g. `-2`
/// for `1E+2`.
pub fn scale(n: &Number) -> i32 {
    -n.exponent()
}

/// Returns the number of significant digits in the coefficient.
///
/// Zero has a precision of one, whatever its scale.
pub fn precision(n: &Number) -> u32 {
    n.digits()
}

/// Returns the number of digits to the left of the decimal point, computed as
/// `precision - scale`.
///
/// The result is zero or negative for numbers whose magnitude is below one,
/// e.g. `-2` for `0.001`.
pub fn integer_digits(n: &Number) -> i64 {
    i64::from(precision(n)) - i64::from(scale(n))
}

/// Compares two numbers by numeric value, ignoring their scales.
pub fn cmp(lhs: &Number, rhs: &Number) -> Ordering {
    OrderedDecimal(lhs.clone()).cmp(&OrderedDecimal(rhs.clone()))
}

/// Rounds or pads `n` so that it has exactly `scale` digits to the right of
/// the decimal point.
///
/// The coefficient is not limited by any precision context other than the
/// capacity of [`Number`].
pub fn set_scale(n: Number, scale: i32, rounding: RoundingMode) -> Result<Number> {
    let context = PrecisionContext::widest(rounding);
    let mut cx = context.to_context()?;
    let mut n = n;
    cx.rescale(&mut n, &from_i32(-scale));
    context.check(&cx)?;
    Ok(n)
}

/// Converts `n` into an integer of type `T`, failing if `n` has a nonzero
/// fractional part or is out of range for `T`.
pub(crate) fn to_exact<T>(n: &Number, target: &'static str) -> Result<T>
where
    T: FromStr,
{
    let inexact = || Error::InexactConversion { target };
    let mut cx = PrecisionContext::widest(RoundingMode::Down).to_context()?;
    let mut integral = n.clone();
    cx.rescale(&mut integral, &Number::zero());
    let status = cx.status();
    if status.inexact() || status.invalid_operation() {
        return Err(inexact());
    }
    if integral.is_zero() {
        return "0".parse().map_err(|_| inexact());
    }
    integral.to_string().parse().map_err(|_| inexact())
}
