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
use std::sync::Arc;

use crate::context::{PrecisionContext, RoundingMode};
use crate::error::{Error, Result};
use crate::fluent::FluentDecimal;
use crate::number::{self, Number};
use crate::scaler::{MaxPrecision, Scaler};

/// Constructs a wrapper of type `T` from a value and the configuration it
/// belongs to.
///
/// Factories must be stateless and deterministic. The constructor generated
/// by [`fluent_decimal!`](crate::fluent_decimal) for each wrapper type, e.g.
/// [`FluentNumber::new`](crate::FluentNumber::new), is a suitable factory.
pub type Factory<T> = fn(Number, Configuration<T>) -> T;

/// The settings shared by a family of fluent decimals of type `T`.
///
/// A configuration bundles the [`PrecisionContext`] that bounds every
/// arithmetic result, the [`Scaler`] that normalizes it, and the [`Factory`]
/// that wraps the normalized value into a `T`.
///
/// Configurations are immutable and cheap to clone: clones share the same
/// underlying settings, which [`Configuration::ptr_eq`] can detect. Two
/// configurations are equal if their precision contexts and scalers are
/// equal; the factory is not compared.
pub struct Configuration<T> {
    inner: Arc<Settings<T>>,
}

struct Settings<T> {
    precision_context: PrecisionContext,
    scaler: Arc<dyn Scaler>,
    factory: Factory<T>,
}

impl<T> Configuration<T> {
    /// Constructs a configuration.
    ///
    /// Fails if `scaler` can never be satisfied under `precision_context`,
    /// e.g. a [`MaxScale`](crate::scaler::MaxScale) whose maximum scale is not
    /// less than the precision.
    pub fn new<S>(
        precision_context: PrecisionContext,
        scaler: S,
        factory: Factory<T>,
    ) -> Result<Configuration<T>>
    where
        S: Scaler + 'static,
    {
        Configuration::from_parts(precision_context, Arc::new(scaler), factory)
    }

    fn from_parts(
        precision_context: PrecisionContext,
        scaler: Arc<dyn Scaler>,
        factory: Factory<T>,
    ) -> Result<Configuration<T>> {
        scaler.validate(&precision_context)?;
        Ok(Configuration {
            inner: Arc::new(Settings {
                precision_context,
                scaler,
                factory,
            }),
        })
    }

    /// Starts building a configuration.
    pub fn builder() -> ConfigurationBuilder<T> {
        ConfigurationBuilder::default()
    }

    /// Returns the precision context.
    pub fn precision_context(&self) -> PrecisionContext {
        self.inner.precision_context
    }

    /// Returns the normalization policy.
    pub fn scaler(&self) -> &dyn Scaler {
        &*self.inner.scaler
    }

    /// Returns the factory.
    pub fn factory(&self) -> Factory<T> {
        self.inner.factory
    }

    /// Wraps `value` without normalizing it.
    pub fn of_raw(&self, value: Number) -> T {
        (self.inner.factory)(value, self.clone())
    }

    /// Returns a copy of this configuration with a different precision
    /// context.
    pub fn with_precision_context(
        &self,
        precision_context: PrecisionContext,
    ) -> Result<Configuration<T>> {
        if precision_context == self.inner.precision_context {
            return Ok(self.clone());
        }
        Configuration::from_parts(
            precision_context,
            Arc::clone(&self.inner.scaler),
            self.inner.factory,
        )
    }

    /// Returns a copy of this configuration with a different scaler.
    pub fn with_scaler<S>(&self, scaler: S) -> Result<Configuration<T>>
    where
        S: Scaler + 'static,
    {
        let scaler: Arc<dyn Scaler> = Arc::new(scaler);
        if *scaler == *self.inner.scaler {
            return Ok(self.clone());
        }
        Configuration::from_parts(self.inner.precision_context, scaler, self.inner.factory)
    }

    /// Returns a configuration with the same precision context and scaler
    /// that produces wrappers of type `U`.
    pub fn with_factory<U>(&self, factory: Factory<U>) -> Configuration<U> {
        Configuration {
            inner: Arc::new(Settings {
                precision_context: self.inner.precision_context,
                scaler: Arc::clone(&self.inner.scaler),
                factory,
            }),
        }
    }

    /// Reports whether `a` and `b` share the same underlying settings.
    pub fn ptr_eq(a: &Configuration<T>, b: &Configuration<T>) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T> Configuration<T>
where
    T: FluentDecimal,
{
    /// Wraps `value` and normalizes it with a full [`round`] pass.
    ///
    /// [`round`]: FluentDecimal::round
    pub fn of(&self, value: Number) -> Result<T> {
        self.of_raw(number::finite(value)?).round()
    }

    /// Parses `s` and wraps the result like [`Configuration::of`].
    pub fn parse(&self, s: &str) -> Result<T> {
        self.of(number::parse(s)?)
    }
}

impl<T> Clone for Configuration<T> {
    fn clone(&self) -> Configuration<T> {
        Configuration {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Configuration<T> {
    fn eq(&self, other: &Configuration<T>) -> bool {
        self.inner.precision_context == other.inner.precision_context
            && *self.inner.scaler == *other.inner.scaler
    }
}

impl<T> Eq for Configuration<T> {}

impl<T> fmt::Debug for Configuration<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("precision_context", &self.inner.precision_context)
            .field("scaler", &self.inner.scaler)
            .finish()
    }
}

/// A builder for [`Configuration`].
///
/// The precision defaults to 34 digits, the rounding mode to
/// [`RoundingMode::HalfUp`] and the scaler to [`MaxPrecision`]. The factory
/// has no default and must be supplied.
pub struct ConfigurationBuilder<T> {
    precision: u32,
    rounding: RoundingMode,
    scaler: Arc<dyn Scaler>,
    factory: Option<Factory<T>>,
}

impl<T> Default for ConfigurationBuilder<T> {
    fn default() -> ConfigurationBuilder<T> {
        let precision_context = PrecisionContext::default();
        ConfigurationBuilder {
            precision: precision_context.precision(),
            rounding: precision_context.rounding(),
            scaler: Arc::new(MaxPrecision),
            factory: None,
        }
    }
}

impl<T> ConfigurationBuilder<T> {
    /// Sets the number of significant digits.
    pub fn precision(mut self, precision: u32) -> ConfigurationBuilder<T> {
        self.precision = precision;
        self
    }

    /// Sets the rounding mode.
    pub fn rounding(mut self, rounding: RoundingMode) -> ConfigurationBuilder<T> {
        self.rounding = rounding;
        self
    }

    /// Sets both precision and rounding mode from a precision context.
    pub fn precision_context(
        mut self,
        precision_context: PrecisionContext,
    ) -> ConfigurationBuilder<T> {
        self.precision = precision_context.precision();
        self.rounding = precision_context.rounding();
        self
    }

    /// Sets the normalization policy.
    pub fn scaler<S>(mut self, scaler: S) -> ConfigurationBuilder<T>
    where
        S: Scaler + 'static,
    {
        self.scaler = Arc::new(scaler);
        self
    }

    /// Sets the factory.
    pub fn factory(mut self, factory: Factory<T>) -> ConfigurationBuilder<T> {
        self.factory = Some(factory);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<Configuration<T>> {
        let factory = self.factory.ok_or(Error::MissingArgument("factory"))?;
        let precision_context = PrecisionContext::new(self.precision, self.rounding)?;
        Configuration::from_parts(precision_context, self.scaler, factory)
    }
}

impl<T> fmt::Debug for ConfigurationBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ConfigurationBuilder")
            .field("precision", &self.precision)
            .field("rounding", &self.rounding)
            .field("scaler", &self.scaler)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}
