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

use std::fmt;

use dec::Rounding;

use crate::context::{PrecisionContext, RoundingMode};
use crate::error::{Error, Result};
use crate::number::{self, Number};

/// Rounds values to the nearest multiple of a smallest denomination.
///
/// For example, with a unit of `0.05` and [`RoundingMode::HalfUp`], `0.76`
/// rounds to `0.75` and `0.78` rounds to `0.80`. Results always carry as many
/// fractional digits as the unit does.
#[derive(Clone)]
pub struct CashRounding {
    unit: Number,
    rounding: RoundingMode,
    // The unit's coefficient, i.e. the unit scaled by 10^scale(unit).
    factor: Number,
}

impl CashRounding {
    /// Constructs a rounder for the given unit.
    ///
    /// The unit must be finite and greater than zero.
    pub fn new(unit: Number, rounding: RoundingMode) -> Result<CashRounding> {
        let unit = number::finite(unit)?;
        if unit.is_zero() || unit.is_negative() {
            return Err(Error::InvalidConfiguration(format!(
                "cash unit {} is not positive",
                unit
            )));
        }
        let context = PrecisionContext::widest(RoundingMode::Unnecessary);
        let mut cx = context.to_context()?;
        let mut factor = unit.clone();
        cx.scaleb(&mut factor, &number::from_i32(number::scale(&unit)));
        context.check(&cx)?;
        Ok(CashRounding {
            unit,
            rounding,
            factor,
        })
    }

    /// Returns the smallest denomination.
    pub fn unit(&self) -> &Number {
        &self.unit
    }

    /// Returns the rounding mode used to pick a neighboring multiple.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Rounds `value` to the nearest multiple of the unit.
    pub fn round(&self, value: Number) -> Result<Number> {
        let scale = number::scale(&self.unit);

        // The quotient is computed at full width with round-05-up, which keeps
        // enough information for the rescale below to round exactly once.
        let wide = PrecisionContext::widest(self.rounding);
        let mut cx = wide.to_context()?;
        cx.set_rounding(Rounding::ZeroFiveUp);
        let mut quotient = value;
        cx.div(&mut quotient, &self.factor);
        wide.check(&cx)?;
        let quotient = number::set_scale(quotient, scale, self.rounding)?;

        let mut cx = wide.to_context()?;
        let mut product = quotient;
        cx.mul(&mut product, &self.factor);
        wide.check(&cx)?;
        number::set_scale(product, scale, self.rounding)
    }
}

impl PartialEq for CashRounding {
    fn eq(&self, other: &CashRounding) -> bool {
        self.rounding == other.rounding
            && number::scale(&self.unit) == number::scale(&other.unit)
            && number::cmp(&self.unit, &other.unit).is_eq()
    }
}

impl Eq for CashRounding {}

impl fmt::Debug for CashRounding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CashRounding")
            .field("unit", &self.unit)
            .field("rounding", &self.rounding)
            .finish()
    }
}
