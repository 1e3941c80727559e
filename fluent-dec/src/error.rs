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

use thiserror::Error;

/// The errors raised while configuring or computing with fluent decimals.
///
/// Every error is returned synchronously by the operation that detected it.
/// Nothing is retried: the inputs are immutable, so a failing operation fails
/// the same way every time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A precision context or normalization policy was constructed with
    /// parameters that can never be satisfied.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A required argument was not supplied.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// The integer part of a value does not fit once the fractional digits
    /// required by the normalization policy are reserved.
    #[error(
        "precision exceeded: value has {integer_digits} integer digits \
         but at most {max_integer_digits} are available"
    )]
    PrecisionExceeded {
        /// The number of integer digits of the offending value.
        integer_digits: i64,
        /// The number of integer digits the policy leaves room for.
        max_integer_digits: i64,
    },

    /// A division by a value that compares equal to zero.
    #[error("division by zero")]
    DivideByZero,

    /// A value could not be converted exactly into a primitive integer type.
    #[error("decimal cannot be expressed exactly as {target}")]
    InexactConversion {
        /// The name of the target type.
        target: &'static str,
    },

    /// The rounding mode forbids rounding, but the result is inexact.
    #[error("rounding necessary")]
    RoundingNecessary,

    /// The result cannot be represented by the underlying decimal type.
    #[error("decimal overflow")]
    Overflow,

    /// A string is not a valid decimal number, or the number is not finite.
    #[error("invalid decimal value: {0}")]
    InvalidValue(String),
}

/// A specialized result type for fluent decimal operations.
pub type Result<T> = std::result::Result<T, Error>;
