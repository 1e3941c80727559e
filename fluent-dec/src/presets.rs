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

//! Ready-made configurations for common constraints.
//!
//! Every preset is nothing more than a particular precision context and
//! scaler; the same configurations can be built by hand with
//! [`Configuration::new`] or [`Configuration::builder`].

use crate::cash::CashRounding;
use crate::configuration::{Configuration, Factory};
use crate::context::{PrecisionContext, RoundingMode};
use crate::error::Result;
use crate::number::{self, Number};
use crate::scaler::{Cash, MaxPrecision, MaxScale};

/// The precision of a JPA `BigDecimal` column without explicit precision.
pub const JPA_DEFAULT_PRECISION: u32 = 19;

/// The scale of a JPA `BigDecimal` column without explicit scale.
pub const JPA_DEFAULT_SCALE: u32 = 2;

/// The number of significant digits spreadsheet applications compute with.
pub const SPREADSHEET_PRECISION: u32 = 15;

/// A configuration matching a SQL `DECIMAL(precision, scale)` column.
///
/// Values are rounded half up to at most `scale` fractional digits, and values
/// with more than `precision - scale` integer digits are rejected.
pub fn database_column<T>(
    precision: u32,
    scale: u32,
    factory: Factory<T>,
) -> Result<Configuration<T>> {
    Configuration::new(
        PrecisionContext::new(precision, RoundingMode::HalfUp)?,
        MaxScale::new(scale),
        factory,
    )
}

/// A configuration matching a JPA `BigDecimal` column with default precision
/// and scale, i.e. `DECIMAL(19, 2)`.
pub fn jpa_default<T>(factory: Factory<T>) -> Result<Configuration<T>> {
    database_column(JPA_DEFAULT_PRECISION, JPA_DEFAULT_SCALE, factory)
}

/// A configuration computing like a spreadsheet: fifteen significant digits,
/// rounding half up, no limit on the scale.
pub fn spreadsheet<T>(factory: Factory<T>) -> Result<Configuration<T>> {
    Configuration::new(
        PrecisionContext::new(SPREADSHEET_PRECISION, RoundingMode::HalfUp)?,
        MaxPrecision,
        factory,
    )
}

/// A configuration rounding every result half up to the nearest multiple of
/// a cash unit.
pub fn cash<T>(precision: u32, unit: CashUnit, factory: Factory<T>) -> Result<Configuration<T>> {
    Configuration::new(
        PrecisionContext::new(precision, RoundingMode::HalfUp)?,
        Cash::from(unit.cash_rounding(RoundingMode::HalfUp)?),
        factory,
    )
}

/// The smallest denominations commonly used for cash payments.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CashUnit {
    /// `0.01`
    Cent,
    /// `0.05`, e.g. Swiss francs.
    FiveCents,
    /// `0.10`
    TenCents,
    /// `0.20`
    TwentyCents,
    /// `0.25`
    QuarterUnit,
    /// `0.50`
    HalfUnit,
    /// `1`
    Whole,
}

impl CashUnit {
    /// Returns the denomination as a number.
    pub fn unit(self) -> Number {
        let unit = match self {
            CashUnit::Cent => "0.01",
            CashUnit::FiveCents => "0.05",
            CashUnit::TenCents => "0.10",
            CashUnit::TwentyCents => "0.20",
            CashUnit::QuarterUnit => "0.25",
            CashUnit::HalfUnit => "0.50",
            CashUnit::Whole => "1",
        };
        number::parse(unit).expect("cash unit literals are valid decimals")
    }

    /// Returns a rounder to this denomination.
    pub fn cash_rounding(self, rounding: RoundingMode) -> Result<CashRounding> {
        CashRounding::new(self.unit(), rounding)
    }
}
