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

use std::convert::TryFrom;
use std::fmt;

use dec::{Context, Rounding};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::number::{Number, MAX_PRECISION};

/// Algorithms for rounding decimal numbers.
///
/// All modes except [`RoundingMode::Unnecessary`] correspond directly to a
/// [`Rounding`] of the underlying decimal arithmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round away from zero.
    Up,
    /// Round towards zero (truncation).
    Down,
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards negative infinity.
    Floor,
    /// Round to nearest; if equidistant, round up.
    HalfUp,
    /// Round to nearest; if equidistant, round down.
    HalfDown,
    /// Round to nearest; if equidistant, round so that the final digit is even.
    HalfEven,
    /// Assert that no rounding is necessary.
    ///
    /// Operations whose result would have to discard nonzero digits fail with
    /// [`Error::RoundingNecessary`] instead of rounding.
    Unnecessary,
}

impl Default for RoundingMode {
    fn default() -> RoundingMode {
        RoundingMode::HalfUp
    }
}

impl RoundingMode {
    /// Returns the rounding algorithm the underlying arithmetic runs with.
    ///
    /// `Unnecessary` computes with [`Rounding::HalfEven`]; whether any
    /// rounding took place is checked afterwards.
    pub fn to_rounding(self) -> Rounding {
        match self {
            RoundingMode::Up => Rounding::Up,
            RoundingMode::Down => Rounding::Down,
            RoundingMode::Ceiling => Rounding::Ceiling,
            RoundingMode::Floor => Rounding::Floor,
            RoundingMode::HalfUp => Rounding::HalfUp,
            RoundingMode::HalfDown => Rounding::HalfDown,
            RoundingMode::HalfEven | RoundingMode::Unnecessary => Rounding::HalfEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RoundingMode::Up => f.write_str("UP"),
            RoundingMode::Down => f.write_str("DOWN"),
            RoundingMode::Ceiling => f.write_str("CEILING"),
            RoundingMode::Floor => f.write_str("FLOOR"),
            RoundingMode::HalfUp => f.write_str("HALF_UP"),
            RoundingMode::HalfDown => f.write_str("HALF_DOWN"),
            RoundingMode::HalfEven => f.write_str("HALF_EVEN"),
            RoundingMode::Unnecessary => f.write_str("UNNECESSARY"),
        }
    }
}

/// An immutable precision and rounding mode pair.
///
/// A precision context bounds the result of every arithmetic operation
/// performed by a fluent decimal: the result is rounded to at most
/// `precision` significant digits using `rounding`.
///
/// The precision must be at least one and no greater than
/// [`MAX_PRECISION`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPrecisionContext")
)]
pub struct PrecisionContext {
    precision: u32,
    rounding: RoundingMode,
}

impl PrecisionContext {
    /// Seven digits, rounding half even.
    pub const DECIMAL32: PrecisionContext = PrecisionContext {
        precision: 7,
        rounding: RoundingMode::HalfEven,
    };

    /// Sixteen digits, rounding half even.
    pub const DECIMAL64: PrecisionContext = PrecisionContext {
        precision: 16,
        rounding: RoundingMode::HalfEven,
    };

    /// Thirty-four digits, rounding half even.
    pub const DECIMAL128: PrecisionContext = PrecisionContext {
        precision: 34,
        rounding: RoundingMode::HalfEven,
    };

    /// Constructs a precision context.
    pub fn new(precision: u32, rounding: RoundingMode) -> Result<PrecisionContext> {
        if precision < 1 || precision > MAX_PRECISION {
            return Err(Error::InvalidConfiguration(format!(
                "precision {} is not in the range [1, {}]",
                precision, MAX_PRECISION
            )));
        }
        Ok(PrecisionContext {
            precision,
            rounding,
        })
    }

    /// The widest context supported, with the given rounding mode.
    pub fn widest(rounding: RoundingMode) -> PrecisionContext {
        PrecisionContext {
            precision: MAX_PRECISION,
            rounding,
        }
    }

    /// Returns the number of significant digits results are rounded to.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns the rounding mode.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns a copy of this context with a different precision.
    pub fn with_precision(&self, precision: u32) -> Result<PrecisionContext> {
        PrecisionContext::new(precision, self.rounding)
    }

    /// Returns a copy of this context with a different rounding mode.
    pub fn with_rounding(&self, rounding: RoundingMode) -> PrecisionContext {
        PrecisionContext {
            precision: self.precision,
            rounding,
        }
    }

    /// Builds a fresh decimal arithmetic context with this precision and
    /// rounding mode and a clear status.
    pub fn to_context(&self) -> Result<Context<Number>> {
        let mut cx = Context::<Number>::default();
        cx.set_precision(self.precision as usize)
            .map_err(|e| Error::InvalidConfiguration(e.to_string()))?;
        cx.set_rounding(self.rounding.to_rounding());
        Ok(cx)
    }

    /// Translates the exceptional conditions accumulated by `cx` into an
    /// error, if any of them is fatal under this context.
    pub fn check(&self, cx: &Context<Number>) -> Result<()> {
        let status = cx.status();
        let err = if status.division_by_zero() || status.division_undefined() {
            Error::DivideByZero
        } else if status.overflow()
            || status.invalid_operation()
            || status.division_impossible()
            || status.insufficient_storage()
        {
            Error::Overflow
        } else if self.rounding == RoundingMode::Unnecessary && status.inexact() {
            Error::RoundingNecessary
        } else {
            return Ok(());
        };
        debug!(?status, context = %self, "decimal operation raised a condition");
        Err(err)
    }
}

impl Default for PrecisionContext {
    fn default() -> PrecisionContext {
        PrecisionContext {
            precision: 34,
            rounding: RoundingMode::default(),
        }
    }
}

impl fmt::Display for PrecisionContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "precision={} roundingMode={}",
            self.precision, self.rounding
        )
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "PrecisionContext")]
struct RawPrecisionContext {
    precision: u32,
    rounding: RoundingMode,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPrecisionContext> for PrecisionContext {
    type Error = Error;

    fn try_from(raw: RawPrecisionContext) -> Result<PrecisionContext> {
        PrecisionContext::new(raw.precision, raw.rounding)
    }
}

impl TryFrom<(u32, RoundingMode)> for PrecisionContext {
    type Error = Error;

    fn try_from((precision, rounding): (u32, RoundingMode)) -> Result<PrecisionContext> {
        PrecisionContext::new(precision, rounding)
    }
}
