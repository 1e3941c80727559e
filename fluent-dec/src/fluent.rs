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

use std::cmp::Ordering;

use dec::{Context, OrderedDecimal};
use tracing::trace;

use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::number::{self, Number};

/// A value that may serve as the argument of a binary operation.
///
/// An operand may be absent: `None` of any `Option<O>` yields no number.
/// Binary operations treat an absent operand as a neutral element and return
/// the receiver unchanged.
pub trait Operand {
    /// Returns the operand's number, or `None` if the operand is absent.
    fn to_operand(&self) -> Option<Number>;
}

impl Operand for Number {
    fn to_operand(&self) -> Option<Number> {
        Some(self.clone())
    }
}

impl<'a, O> Operand for &'a O
where
    O: Operand + ?Sized,
{
    fn to_operand(&self) -> Option<Number> {
        (**self).to_operand()
    }
}

impl<O> Operand for Option<O>
where
    O: Operand,
{
    fn to_operand(&self) -> Option<Number> {
        self.as_ref().and_then(Operand::to_operand)
    }
}

macro_rules! integer_operands {
    ($($t:ty => $from:ident),*) => {
        $(
            impl Operand for $t {
                fn to_operand(&self) -> Option<Number> {
                    Some(number::$from(*self))
                }
            }
        )*
    };
}

integer_operands!(
    i32 => from_i32,
    u32 => from_u32,
    i64 => from_i64,
    u64 => from_u64,
    i128 => from_i128,
    u128 => from_u128
);

macro_rules! exact_conversions {
    ($($t:ident),*) => {
        $(
            paste::paste! {
                #[doc = "Converts the value into an `" $t "`."]
                #[doc = ""]
                #[doc = "Fails with [`Error::InexactConversion`] if the value has a nonzero"]
                #[doc = "fractional part or does not fit into an `" $t "`."]
                fn [<to_ $t _exact>](&self) -> Result<$t> {
                    number::to_exact(self.value(), stringify!($t))
                }
            }
        )*
    };
}

/// An immutable decimal number whose arithmetic results are normalized by
/// its [`Configuration`].
///
/// Every operation runs the same pipeline (see [`apply`]):
///
///  1. The operation is computed on a copy of the value under the
///     configuration's [`PrecisionContext`], which rounds the result to the
///     context's precision.
///  2. The result is normalized by the configuration's [`Scaler`].
///  3. The normalized value is wrapped into a new `Self` carrying the same
///     configuration, using the configuration's [`Factory`].
///
/// Wrapper types are declared with [`fluent_decimal!`], which implements this
/// trait along with ordering, hashing and formatting by value.
///
/// [`apply`]: FluentDecimal::apply
/// [`PrecisionContext`]: crate::PrecisionContext
/// [`Scaler`]: crate::scaler::Scaler
/// [`Factory`]: crate::Factory
/// [`fluent_decimal!`]: crate::fluent_decimal
pub trait FluentDecimal: Clone + Sized {
    /// Returns the wrapped number.
    fn value(&self) -> &Number;

    /// Returns the configuration this value belongs to.
    fn configuration(&self) -> &Configuration<Self>;

    /// Runs `projection` on the value under the precision context, normalizes
    /// the result and wraps it.
    ///
    /// `operation` names the operation in log events.
    fn apply<P>(&self, operation: &'static str, projection: P) -> Result<Self>
    where
        P: FnOnce(&mut Context<Number>, &mut Number) -> Result<()>,
    {
        let configuration = self.configuration();
        let precision_context = configuration.precision_context();
        let mut cx = precision_context.to_context()?;
        let mut value = self.value().clone();
        projection(&mut cx, &mut value)?;
        precision_context.check(&cx)?;
        let value = configuration.scaler().scale(value, &precision_context)?;
        trace!(operation, %value, "normalized");
        Ok(configuration.of_raw(value))
    }

    /// Like [`apply`](FluentDecimal::apply), but for binary operations.
    ///
    /// If `operand` is absent, returns a clone of `self` without running the
    /// pipeline.
    fn apply_operand<O, P>(
        &self,
        operation: &'static str,
        operand: O,
        projection: P,
    ) -> Result<Self>
    where
        O: Operand,
        P: FnOnce(&mut Context<Number>, &mut Number, &Number) -> Result<()>,
    {
        match operand.to_operand() {
            None => Ok(self.clone()),
            Some(operand) => self.apply(operation, |cx, value| projection(cx, value, &operand)),
        }
    }

    /// Normalizes the value.
    ///
    /// The value is rounded to the precision context and passed through the
    /// scaler. This brings a value created with
    /// [`Configuration::of_raw`] into compliance.
    fn round(&self) -> Result<Self> {
        self.apply("round", |cx, value| {
            cx.plus(value);
            Ok(())
        })
    }

    /// Converts the value into the wrapper family of `configuration`,
    /// normalizing it under that configuration.
    fn round_into<U>(&self, configuration: &Configuration<U>) -> Result<U>
    where
        U: FluentDecimal,
    {
        configuration.of_raw(self.value().clone()).round()
    }

    /// Moves the value into `configuration` as is, without normalizing it.
    fn with_configuration<U>(&self, configuration: &Configuration<U>) -> U {
        configuration.of_raw(self.value().clone())
    }

    /// Adds `augend`.
    fn add<O>(&self, augend: O) -> Result<Self>
    where
        O: Operand,
    {
        self.apply_operand("add", augend, |cx, value, augend| {
            cx.add(value, augend);
            Ok(())
        })
    }

    /// Subtracts `subtrahend`.
    fn subtract<O>(&self, subtrahend: O) -> Result<Self>
    where
        O: Operand,
    {
        self.apply_operand("subtract", subtrahend, |cx, value, subtrahend| {
            cx.sub(value, subtrahend);
            Ok(())
        })
    }

    /// Multiplies by `multiplicand`.
    fn multiply<O>(&self, multiplicand: O) -> Result<Self>
    where
        O: Operand,
    {
        self.apply_operand("multiply", multiplicand, |cx, value, multiplicand| {
            cx.mul(value, multiplicand);
            Ok(())
        })
    }

    /// Divides by `divisor`.
    ///
    /// Fails with [`Error::DivideByZero`] if `divisor` is zero.
    fn divide<O>(&self, divisor: O) -> Result<Self>
    where
        O: Operand,
    {
        self.apply_operand("divide", divisor, |cx, value, divisor| {
            if divisor.is_zero() {
                return Err(Error::DivideByZero);
            }
            cx.div(value, divisor);
            Ok(())
        })
    }

    /// Negates the value.
    fn negate(&self) -> Result<Self> {
        self.apply("negate", |cx, value| {
            cx.minus(value);
            Ok(())
        })
    }

    /// Computes the absolute value.
    fn abs(&self) -> Result<Self> {
        self.apply("abs", |cx, value| {
            cx.abs(value);
            Ok(())
        })
    }

    /// Raises the value to the power of `exponent`.
    fn pow(&self, exponent: i32) -> Result<Self> {
        self.apply("pow", |cx, value| {
            cx.pow(value, &number::from_i32(exponent));
            Ok(())
        })
    }

    /// Interprets the value as a percentage and converts it to a fraction,
    /// i.e. divides by 100.
    fn pct_to_fraction(&self) -> Result<Self> {
        self.divide(100)
    }

    /// Interprets the value as a fraction and converts it to a percentage,
    /// i.e. multiplies by 100.
    fn fraction_to_pct(&self) -> Result<Self> {
        self.multiply(100)
    }

    /// Compares the value with `other` numerically, ignoring scale.
    ///
    /// Returns `None` if `other` is absent.
    fn compare_to<O>(&self, other: O) -> Option<Ordering>
    where
        O: Operand,
    {
        other
            .to_operand()
            .map(|other| number::cmp(self.value(), &other))
    }

    /// Reports whether the value is numerically equal to `other`, e.g.
    /// `2.0` compares to `2.00`.
    fn compares_to<O>(&self, other: O) -> bool
    where
        O: Operand,
    {
        self.compare_to(other) == Some(Ordering::Equal)
    }

    /// Reports whether the value compares to zero.
    fn is_zero(&self) -> bool {
        self.compares_to(0)
    }

    /// Reports whether the value is greater than zero.
    fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Reports whether the value is less than zero.
    fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns -1, 0 or 1 as the value is negative, zero or positive.
    fn signum(&self) -> i32 {
        if self.value().is_zero() {
            0
        } else if self.value().is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns the number of digits to the right of the decimal point.
    fn scale(&self) -> i32 {
        number::scale(self.value())
    }

    /// Returns the number of significant digits.
    fn precision(&self) -> u32 {
        number::precision(self.value())
    }

    /// Returns the value wrapped for total ordering and hashing.
    fn ordered(&self) -> OrderedDecimal<Number> {
        OrderedDecimal(self.value().clone())
    }

    exact_conversions!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
}
