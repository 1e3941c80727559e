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

//! Normalization policies.
//!
//! A [`Scaler`] brings the raw result of an arithmetic operation back into
//! compliance with a scale or precision contract. The policies shipped here
//! cover the common cases:
//!
//! | Scaler           | Policy                                              |
//! |------------------|-----------------------------------------------------|
//! | [`MaxScale`]     | at most `max_scale` fractional digits, bounded integer part |
//! | [`FixedPoint`]   | same contract as [`MaxScale`]                       |
//! | [`FixedScale`]   | exactly `scale` fractional digits                   |
//! | [`Cash`]         | nearest multiple of a denomination                  |
//! | [`Integer`]      | no fractional digits                                |
//! | [`MaxPrecision`] | unchanged; the precision context alone applies      |
//! | [`NoOp`]         | unchanged                                           |

use std::any::Any;
use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cash::CashRounding;
use crate::context::{PrecisionContext, RoundingMode};
use crate::error::{Error, Result};
use crate::number::{self, Number};

/// Value comparison between type-erased scalers.
///
/// This trait is implemented automatically for every `'static` type that
/// implements [`PartialEq`]; it should not be implemented by hand.
pub trait ScalerEq: Any {
    /// Returns `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Reports whether `other` is of the same type as `self` and equal to it.
    fn eq_scaler(&self, other: &dyn Any) -> bool;
}

impl<S> ScalerEq for S
where
    S: Any + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_scaler(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<S>().map_or(false, |other| self == other)
    }
}

/// A normalization policy.
///
/// `scale` receives the raw result of an arithmetic operation together with
/// the precision context it was computed under, and returns either the value
/// unchanged, a rescaled value, or an error if the value cannot be made to
/// comply.
///
/// Scalers are compared by value: two scalers are equal if they are of the
/// same type and compare equal with that type's [`PartialEq`].
pub trait Scaler: ScalerEq + fmt::Debug + Send + Sync {
    /// Normalizes `value`.
    fn scale(&self, value: Number, context: &PrecisionContext) -> Result<Number>;

    /// Checks that this scaler can ever be satisfied under `context`.
    ///
    /// Called whenever a configuration pairs the scaler with a precision
    /// context.
    fn validate(&self, context: &PrecisionContext) -> Result<()> {
        let _ = context;
        Ok(())
    }
}

impl<'a> PartialEq for dyn Scaler + 'a {
    fn eq(&self, other: &(dyn Scaler + 'a)) -> bool {
        self.eq_scaler(other.as_any())
    }
}

fn validate_max_scale(max_scale: u32, context: &PrecisionContext) -> Result<()> {
    if max_scale >= context.precision() {
        return Err(Error::InvalidConfiguration(format!(
            "max scale {} must be less than precision {}",
            max_scale,
            context.precision()
        )));
    }
    Ok(())
}

fn check_integer_digits(value: &Number, max_integer_digits: i64) -> Result<()> {
    let integer_digits = number::integer_digits(value);
    if integer_digits > max_integer_digits {
        debug!(
            %value,
            integer_digits,
            max_integer_digits,
            "value does not fit the reserved integer digits"
        );
        return Err(Error::PrecisionExceeded {
            integer_digits,
            max_integer_digits,
        });
    }
    Ok(())
}

// Shared by `MaxScale` and `FixedPoint`.
fn scale_bounded(value: Number, context: &PrecisionContext, max_scale: u32) -> Result<Number> {
    let max_integer_digits = i64::from(context.precision()) - i64::from(max_scale);
    check_integer_digits(&value, max_integer_digits)?;
    if i64::from(number::scale(&value)) <= i64::from(max_scale) {
        return Ok(value);
    }
    let max_scale = i32::try_from(max_scale).map_err(|_| Error::Overflow)?;
    let value = number::set_scale(value, max_scale, context.rounding())?;
    // Rounding up can carry into a new integer digit, e.g. 999.995 -> 1000.00.
    check_integer_digits(&value, max_integer_digits)?;
    Ok(value)
}

/// Limits the number of fractional digits to `max_scale`.
///
/// Values with more fractional digits are rounded with the precision
/// context's rounding mode; values with fewer are left alone. Since
/// `max_scale` of the context's digits are reserved for the fractional part,
/// a value with more than `precision - max_scale` integer digits is rejected
/// with [`Error::PrecisionExceeded`].
///
/// The integer digits are checked again after rounding, since rounding up can
/// carry into a new integer digit. A value that fits before rounding may
/// therefore still be rejected: under precision 5, `MaxScale::new(2)` turns
/// `999.995` into `1000.00` and fails. Values produced by an arithmetic
/// operation are already rounded to the context's precision, so this only
/// shows when calling [`Scaler::scale`] directly.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaxScale {
    max_scale: u32,
}

impl MaxScale {
    /// Constructs a scaler allowing at most `max_scale` fractional digits.
    pub fn new(max_scale: u32) -> MaxScale {
        MaxScale { max_scale }
    }

    /// Returns the maximum number of fractional digits.
    pub fn max_scale(&self) -> u32 {
        self.max_scale
    }
}

impl Scaler for MaxScale {
    fn scale(&self, value: Number, context: &PrecisionContext) -> Result<Number> {
        scale_bounded(value, context, self.max_scale)
    }

    fn validate(&self, context: &PrecisionContext) -> Result<()> {
        validate_max_scale(self.max_scale, context)
    }
}

/// A fixed-point column of `precision` total and `scale` fractional digits.
///
/// Behaves exactly like [`MaxScale`], including the second integer digit
/// check after rounding.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedPoint {
    scale: u32,
}

impl FixedPoint {
    /// Constructs a scaler allowing at most `scale` fractional digits.
    pub fn new(scale: u32) -> FixedPoint {
        FixedPoint { scale }
    }

    /// Returns the maximum number of fractional digits.
    pub fn max_scale(&self) -> u32 {
        self.scale
    }
}

impl Scaler for FixedPoint {
    fn scale(&self, value: Number, context: &PrecisionContext) -> Result<Number> {
        scale_bounded(value, context, self.scale)
    }

    fn validate(&self, context: &PrecisionContext) -> Result<()> {
        validate_max_scale(self.scale, context)
    }
}

/// Rescales every value to exactly `scale` fractional digits, padding with
/// zeros or rounding with the precision context's rounding mode.
///
/// The number of integer digits is not checked.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedScale {
    scale: i32,
}

impl FixedScale {
    /// Constructs a scaler producing exactly `scale` fractional digits.
    pub fn new(scale: i32) -> FixedScale {
        FixedScale { scale }
    }

    /// Returns the number of fractional digits produced.
    pub fn fixed_scale(&self) -> i32 {
        self.scale
    }
}

impl Scaler for FixedScale {
    fn scale(&self, value: Number, context: &PrecisionContext) -> Result<Number> {
        number::set_scale(value, self.scale, context.rounding())
    }
}

/// Rounds every value to the nearest multiple of a denomination.
///
/// The rounding mode of the [`CashRounding`] is used; the precision context's
/// rounding mode is ignored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cash {
    rounding: CashRounding,
}

impl Cash {
    /// Constructs a scaler rounding to multiples of `unit`.
    pub fn new(unit: Number, rounding: RoundingMode) -> Result<Cash> {
        Ok(Cash {
            rounding: CashRounding::new(unit, rounding)?,
        })
    }

    /// Returns the underlying rounder.
    pub fn cash_rounding(&self) -> &CashRounding {
        &self.rounding
    }
}

impl From<CashRounding> for Cash {
    fn from(rounding: CashRounding) -> Cash {
        Cash { rounding }
    }
}

impl Scaler for Cash {
    fn scale(&self, value: Number, _: &PrecisionContext) -> Result<Number> {
        self.rounding.round(value)
    }
}

/// Rounds every value to an integer with the precision context's rounding
/// mode.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Integer;

impl Scaler for Integer {
    fn scale(&self, value: Number, context: &PrecisionContext) -> Result<Number> {
        number::set_scale(value, 0, context.rounding())
    }
}

/// Leaves values unchanged, so that only the precision context bounds them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaxPrecision;

impl Scaler for MaxPrecision {
    fn scale(&self, value: Number, _: &PrecisionContext) -> Result<Number> {
        Ok(value)
    }
}

/// Leaves values unchanged.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoOp;

impl Scaler for NoOp {
    fn scale(&self, value: Number, _: &PrecisionContext) -> Result<Number> {
        Ok(value)
    }
}
