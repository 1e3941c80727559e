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

use static_assertions::assert_impl_all;

use crate::configuration::Configuration;

fluent_decimal! {
    /// A general purpose fluent decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_dec::{num, Configuration, FluentDecimal, FluentNumber, RoundingMode};
    ///
    /// let cfg = Configuration::builder()
    ///     .precision(7)
    ///     .rounding(RoundingMode::HalfUp)
    ///     .factory(FluentNumber::new)
    ///     .build()?;
    /// let x = cfg.of(num!(12.3456789))?;
    /// assert_eq!(x.to_string(), "12.34568");
    /// assert_eq!(x.add(num!(54.555555))?.to_string(), "66.90124");
    /// # Ok::<_, fluent_dec::Error>(())
    /// ```
    pub struct FluentNumber;
}

fluent_decimal! {
    /// A monetary amount.
    ///
    /// `Money` behaves exactly like [`FluentNumber`]; having a distinct type
    /// keeps amounts from being mixed up with other quantities. Use
    /// [`Configuration::with_factory`] to derive a money configuration from an
    /// existing one.
    pub struct Money;
}

assert_impl_all!(FluentNumber: Send, Sync, Clone);
assert_impl_all!(Money: Send, Sync, Clone);
assert_impl_all!(Configuration<FluentNumber>: Send, Sync, Clone);

#[cfg(feature = "num-traits")]
mod to_primitive {
    use num_traits::ToPrimitive;

    use super::{FluentNumber, Money};
    use crate::fluent::FluentDecimal;

    macro_rules! impl_to_primitive {
        ($($t:ty),*) => {
            $(
                impl ToPrimitive for $t {
                    fn to_i64(&self) -> Option<i64> {
                        self.to_i64_exact().ok()
                    }

                    fn to_u64(&self) -> Option<u64> {
                        self.to_u64_exact().ok()
                    }

                    fn to_i128(&self) -> Option<i128> {
                        self.to_i128_exact().ok()
                    }

                    fn to_u128(&self) -> Option<u128> {
                        self.to_u128_exact().ok()
                    }
                }
            )*
        };
    }

    impl_to_primitive!(FluentNumber, Money);
}
