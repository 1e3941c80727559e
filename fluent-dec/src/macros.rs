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

#[macro_export]
/// A macro to construct a [`Number`] from a literal.
/// Converts the input tokens to a string, and then parses the string into a [`Number`].
/// Panics if the provided input is not a valid finite [`Number`] literal.
///
/// [`Number`]: crate::Number
///
/// # Examples:
/// ```
/// use fluent_dec::num;
///
/// assert!(num!(1.753).to_string() == "1.753");
/// assert!(num!(0.00).to_string() == "0.00");
/// ```
macro_rules! num {
    ($l:expr) => {
        $crate::number::parse(stringify!($l)).unwrap_or_else(|e| panic!("{}", e.to_string()))
    };
}

#[macro_export]
/// A macro to declare a fluent decimal wrapper type.
///
/// The declared struct holds a [`Number`] and the [`Configuration`] it belongs
/// to, and gets:
///
///  * a `new(value, configuration)` constructor that wraps the value without
///    normalizing it, suitable as the configuration's [`Factory`];
///  * implementations of [`FluentDecimal`] and [`Operand`];
///  * `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash` implementations that
///    consider only the numeric value, so that `1.0 == 1.00` and the
///    configuration is ignored;
///  * `Display` (the value, with a negative zero printed as zero) and `Debug`
///    implementations.
///
/// [`Number`]: crate::Number
/// [`Configuration`]: crate::Configuration
/// [`Factory`]: crate::Factory
/// [`FluentDecimal`]: crate::FluentDecimal
/// [`Operand`]: crate::Operand
///
/// # Examples:
/// ```
/// use fluent_dec::scaler::MaxScale;
/// use fluent_dec::{fluent_decimal, num, Configuration, FluentDecimal, PrecisionContext};
///
/// fluent_decimal! {
///     /// A unit price.
///     pub struct Price;
/// }
///
/// let cfg = Configuration::new(PrecisionContext::DECIMAL64, MaxScale::new(4), Price::new)?;
/// let price = cfg.of(num!(1.234567))?;
/// assert_eq!(price.to_string(), "1.2346");
/// # Ok::<_, fluent_dec::Error>(())
/// ```
macro_rules! fluent_decimal {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone)]
        $vis struct $name {
            value: $crate::Number,
            configuration: $crate::Configuration<$name>,
        }

        impl $name {
            /// Wraps `value` without normalizing it.
            ///
            /// This is the factory of configurations producing this type.
            pub fn new(
                value: $crate::Number,
                configuration: $crate::Configuration<$name>,
            ) -> $name {
                $name {
                    value,
                    configuration,
                }
            }
        }

        impl $crate::FluentDecimal for $name {
            fn value(&self) -> &$crate::Number {
                &self.value
            }

            fn configuration(&self) -> &$crate::Configuration<$name> {
                &self.configuration
            }
        }

        impl $crate::Operand for $name {
            fn to_operand(&self) -> ::std::option::Option<$crate::Number> {
                ::std::option::Option::Some(::std::clone::Clone::clone(&self.value))
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &$name) -> bool {
                $crate::FluentDecimal::ordered(self) == $crate::FluentDecimal::ordered(other)
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &$name) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &$name) -> ::std::cmp::Ordering {
                ::std::cmp::Ord::cmp(
                    &$crate::FluentDecimal::ordered(self),
                    &$crate::FluentDecimal::ordered(other),
                )
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H>(&self, state: &mut H)
            where
                H: ::std::hash::Hasher,
            {
                ::std::hash::Hash::hash(&$crate::FluentDecimal::ordered(self), state)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&$crate::number::unsigned_zero(&self.value), f)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.value)
                    .field("configuration", &self.configuration)
                    .finish()
            }
        }
    };
}
