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

//! fluent-dec provides immutable decimal numbers whose arithmetic results are
//! normalized automatically.
//!
//! # Introduction
//!
//! Business and monetary computations usually have to keep decimal values
//! within an external constraint: the precision and scale of a database
//! column, the smallest denomination of a currency, the working precision of
//! a spreadsheet. With a plain decimal type every intermediate result has to
//! be re-rounded by hand. With fluent-dec the constraint is configured once
//! and applied after every operation.
//!
//! # Details
//!
//! The arithmetic itself is performed by the [dec] crate. On top of it,
//! fluent-dec exposes the following:
//!
//!  * [`PrecisionContext`], an immutable precision and rounding mode pair that
//!    bounds every arithmetic result.
//!
//!  * [`Scaler`](scaler::Scaler), a normalization policy applied to every
//!    result, e.g. [`MaxScale`](scaler::MaxScale) to honor a database
//!    column's scale or [`Cash`](scaler::Cash) to round to the nearest
//!    multiple of a currency unit.
//!
//!  * [`Configuration`], which bundles a precision context, a scaler and the
//!    factory constructing the wrapper type.
//!
//!  * [`FluentDecimal`], the trait implemented by wrapper types such as
//!    [`FluentNumber`] and [`Money`]. Each operation computes the raw result
//!    under the precision context, normalizes it with the scaler and wraps it
//!    with the factory. New wrapper types are declared with
//!    [`fluent_decimal!`].
//!
//! All types are immutable; every operation returns a new value.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! use fluent_dec::scaler::{MaxPrecision, MaxScale};
//! use fluent_dec::{num, Configuration, FluentDecimal, FluentNumber};
//! use fluent_dec::{PrecisionContext, RoundingMode};
//!
//! let working = Configuration::new(
//!     PrecisionContext::new(7, RoundingMode::HalfUp)?,
//!     MaxPrecision,
//!     FluentNumber::new,
//! )?;
//! let column = Configuration::new(
//!     PrecisionContext::new(18, RoundingMode::HalfUp)?,
//!     MaxScale::new(2),
//!     FluentNumber::new,
//! )?;
//!
//! let x = working.of_raw(num!(12.3456789));
//! assert_eq!(x.to_string(), "12.3456789");
//!
//! let x = x.round()?.add(num!(54.555555))?;
//! assert_eq!(x.to_string(), "66.90124");
//!
//! let x = x.round_into(&column)?;
//! assert_eq!(x.to_string(), "66.90");
//! assert_eq!(x.multiply(num!(123.99999))?.to_string(), "8295.60");
//!
//! # Ok::<_, Box<dyn Error>>(())
//! ```
//!
//! [dec]: https://docs.rs/dec

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;
mod cash;
mod configuration;
mod context;
mod error;
mod fluent;
pub mod number;
pub mod presets;
pub mod scaler;
mod wrappers;

pub use dec;

pub use cash::CashRounding;
pub use configuration::{Configuration, ConfigurationBuilder, Factory};
pub use context::{PrecisionContext, RoundingMode};
pub use error::{Error, Result};
pub use fluent::{FluentDecimal, Operand};
pub use number::{Number, MAX_PRECISION};
pub use wrappers::{FluentNumber, Money};
