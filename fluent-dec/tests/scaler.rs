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

use std::error::Error;

use fluent_dec::number;
use fluent_dec::scaler::{
    Cash, FixedPoint, FixedScale, Integer, MaxPrecision, MaxScale, NoOp, Scaler,
};
use fluent_dec::{num, CashRounding, PrecisionContext, RoundingMode};

fn run_table(
    scaler: &dyn Scaler,
    context: &PrecisionContext,
    table: &[(&str, &str)],
) -> Result<(), Box<dyn Error>> {
    for (input, expected) in table {
        let value = number::parse(input)?;
        let scaled = scaler.scale(value, context)?;
        println!("{:?} {}: {} => {}", scaler, context, input, scaled);
        assert_eq!(scaled.to_string(), *expected);
        // Normalizing a compliant value leaves it untouched.
        assert_eq!(scaler.scale(scaled.clone(), context)?.to_string(), *expected);
    }
    Ok(())
}

#[test]
fn test_max_scale() -> Result<(), Box<dyn Error>> {
    const TABLE: &[(&str, &str)] = &[
        ("999.99", "999.99"),
        ("0.001", "0.00"),
        ("12.345", "12.35"),
        ("-12.345", "-12.35"),
        ("1.5", "1.5"),
        ("123", "123"),
        ("1E+2", "1E+2"),
    ];
    let context = PrecisionContext::new(5, RoundingMode::HalfUp)?;
    run_table(&MaxScale::new(2), &context, TABLE)?;
    run_table(&FixedPoint::new(2), &context, TABLE)
}

#[test]
fn test_max_scale_rounding_modes() -> Result<(), Box<dyn Error>> {
    const TABLE: &[(RoundingMode, &str, &str)] = &[
        (RoundingMode::Up, "1.231", "1.24"),
        (RoundingMode::Down, "1.239", "1.23"),
        (RoundingMode::Ceiling, "-1.239", "-1.23"),
        (RoundingMode::Floor, "-1.231", "-1.24"),
        (RoundingMode::HalfUp, "1.235", "1.24"),
        (RoundingMode::HalfDown, "1.235", "1.23"),
        (RoundingMode::HalfEven, "1.225", "1.22"),
        (RoundingMode::HalfEven, "1.235", "1.24"),
    ];
    for (rounding, input, expected) in TABLE {
        let context = PrecisionContext::new(10, *rounding)?;
        let scaled = MaxScale::new(2).scale(number::parse(input)?, &context)?;
        println!("{}: {} => {}", rounding, input, scaled);
        assert_eq!(scaled.to_string(), *expected);
    }
    Ok(())
}

#[test]
fn test_max_scale_precision_exceeded() -> Result<(), Box<dyn Error>> {
    const TABLE: &[(&str, i64)] = &[("99999", 5), ("9999.9", 4), ("999.995", 4), ("-1000", 4)];
    let context = PrecisionContext::new(5, RoundingMode::HalfUp)?;
    for scaler in &[&MaxScale::new(2) as &dyn Scaler, &FixedPoint::new(2)] {
        for (input, integer_digits) in TABLE {
            let err = scaler
                .scale(number::parse(input)?, &context)
                .unwrap_err();
            println!("{:?}: {} => {}", scaler, input, err);
            assert_eq!(
                err,
                fluent_dec::Error::PrecisionExceeded {
                    integer_digits: *integer_digits,
                    max_integer_digits: 3,
                }
            );
        }
    }
    Ok(())
}

#[test]
fn test_max_scale_validate() -> Result<(), Box<dyn Error>> {
    let context = PrecisionContext::new(5, RoundingMode::HalfUp)?;
    assert!(MaxScale::new(4).validate(&context).is_ok());
    assert!(matches!(
        MaxScale::new(5).validate(&context),
        Err(fluent_dec::Error::InvalidConfiguration(_))
    ));
    assert!(matches!(
        FixedPoint::new(6).validate(&context),
        Err(fluent_dec::Error::InvalidConfiguration(_))
    ));
    assert!(FixedScale::new(50).validate(&context).is_ok());
    Ok(())
}

#[test]
fn test_fixed_scale() -> Result<(), Box<dyn Error>> {
    let context = PrecisionContext::new(5, RoundingMode::HalfUp)?;
    run_table(
        &FixedScale::new(2),
        &context,
        &[
            ("1", "1.00"),
            ("1.005", "1.01"),
            ("0.1", "0.10"),
            ("123456789.999", "123456790.00"),
        ],
    )?;
    run_table(&FixedScale::new(-2), &context, &[("1234", "1.2E+3")])?;

    let context = PrecisionContext::new(5, RoundingMode::Down)?;
    run_table(&FixedScale::new(2), &context, &[("1.999", "1.99")])
}

#[test]
fn test_integer() -> Result<(), Box<dyn Error>> {
    let context = PrecisionContext::new(10, RoundingMode::HalfEven)?;
    run_table(
        &Integer,
        &context,
        &[
            ("2.5", "2"),
            ("3.5", "4"),
            ("-2.5", "-2"),
            ("7", "7"),
            ("1E+2", "100"),
        ],
    )?;
    let context = PrecisionContext::new(10, RoundingMode::HalfUp)?;
    run_table(&Integer, &context, &[("2.5", "3"), ("-2.5", "-3")])
}

#[test]
fn test_unchanged() -> Result<(), Box<dyn Error>> {
    let context = PrecisionContext::new(3, RoundingMode::HalfUp)?;
    const TABLE: &[(&str, &str)] = &[("1.23456789", "1.23456789"), ("1E+5", "1E+5")];
    run_table(&MaxPrecision, &context, TABLE)?;
    run_table(&NoOp, &context, TABLE)
}

#[test]
fn test_cash() -> Result<(), Box<dyn Error>> {
    const TABLE: &[(&str, RoundingMode, &str, &str)] = &[
        ("0.05", RoundingMode::HalfUp, "0.00", "0.00"),
        ("0.05", RoundingMode::HalfUp, "0.02", "0.00"),
        ("0.05", RoundingMode::HalfUp, "0.76", "0.75"),
        ("0.05", RoundingMode::HalfUp, "0.78", "0.80"),
        ("0.05", RoundingMode::HalfUp, "0.98", "1.00"),
        ("0.05", RoundingMode::HalfUp, "1.02", "1.00"),
        ("0.05", RoundingMode::HalfUp, "1", "1.00"),
        ("0.05", RoundingMode::HalfUp, "1.0000", "1.00"),
        ("0.05", RoundingMode::HalfUp, "-0.78", "-0.80"),
        ("0.05", RoundingMode::HalfUp, "0.025", "0.05"),
        ("0.05", RoundingMode::HalfDown, "0.025", "0.00"),
        ("0.05", RoundingMode::HalfEven, "0.075", "0.10"),
        ("0.05", RoundingMode::HalfDown, "0.075", "0.05"),
        ("0.05", RoundingMode::Down, "0.79", "0.75"),
        ("0.05", RoundingMode::Up, "0.76", "0.80"),
        ("0.05", RoundingMode::HalfUp, "123.980", "124.00"),
        ("0.5", RoundingMode::HalfUp, "1.23", "1.0"),
        ("0.5", RoundingMode::HalfUp, "1.26", "1.5"),
        ("0.25", RoundingMode::HalfUp, "1.13", "1.25"),
        ("0.25", RoundingMode::HalfUp, "1.12", "1.00"),
        ("0.03", RoundingMode::HalfUp, "0.04", "0.03"),
        ("0.03", RoundingMode::HalfUp, "0.05", "0.06"),
        ("1", RoundingMode::HalfUp, "2.5", "3"),
    ];
    // The context is ignored by the cash scaler.
    let context = PrecisionContext::new(3, RoundingMode::Floor)?;
    for (unit, rounding, input, expected) in TABLE {
        let scaler = Cash::new(number::parse(unit)?, *rounding)?;
        let scaled = scaler.scale(number::parse(input)?, &context)?;
        println!("{} {}: {} => {}", unit, rounding, input, scaled);
        assert_eq!(scaled.to_string(), *expected);
        assert_eq!(scaler.scale(scaled, &context)?.to_string(), *expected);
    }
    Ok(())
}

#[test]
fn test_cash_unnecessary() -> Result<(), Box<dyn Error>> {
    let rounder = CashRounding::new(num!(0.05), RoundingMode::Unnecessary)?;
    assert_eq!(rounder.round(num!(0.75))?.to_string(), "0.75");
    assert_eq!(
        rounder.round(num!(0.76)).unwrap_err(),
        fluent_dec::Error::RoundingNecessary
    );
    Ok(())
}

#[test]
fn test_cash_invalid_unit() {
    for unit in &["0", "0.00", "-0.05", "NaN", "Infinity"] {
        let unit = match number::parse(unit) {
            Ok(unit) => unit,
            // Non-finite values are already rejected when parsing.
            Err(_) => continue,
        };
        assert!(CashRounding::new(unit, RoundingMode::HalfUp).is_err());
    }
}

#[test]
fn test_scaler_equality() -> Result<(), Box<dyn Error>> {
    fn same(a: &dyn Scaler, b: &dyn Scaler) -> bool {
        a == b
    }

    assert!(same(&MaxScale::new(2), &MaxScale::new(2)));
    assert!(!same(&MaxScale::new(2), &MaxScale::new(3)));
    assert!(!same(&MaxScale::new(2), &FixedPoint::new(2)));
    assert!(!same(&FixedScale::new(2), &MaxScale::new(2)));
    assert!(same(&Integer, &Integer));
    assert!(!same(&NoOp, &MaxPrecision));

    let cash = |unit: &str, rounding| -> Result<Cash, fluent_dec::Error> {
        Cash::new(number::parse(unit)?, rounding)
    };
    assert!(same(
        &cash("0.05", RoundingMode::HalfUp)?,
        &cash("0.05", RoundingMode::HalfUp)?
    ));
    assert!(!same(
        &cash("0.05", RoundingMode::HalfUp)?,
        &cash("0.05", RoundingMode::HalfEven)?
    ));
    assert!(!same(
        &cash("0.05", RoundingMode::HalfUp)?,
        &cash("0.050", RoundingMode::HalfUp)?
    ));
    Ok(())
}
