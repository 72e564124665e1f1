#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property tests for arithmetic over the valid operand range

use calculator::{CalculatorError, Number, Service};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Folds an arbitrary `i32` into `(-1_000_001, 1_000_001)`.
fn in_range(v: i32) -> i64 {
    i64::from(v % 1_000_001)
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

#[quickcheck]
fn add_matches_integer_sum(a: i32, b: i32) -> bool {
    let (a, b) = (in_range(a), in_range(b));
    Service::new().add(a, b) == Ok(Number::Int(a + b))
}

#[quickcheck]
fn subtract_matches_integer_difference(a: i32, b: i32) -> bool {
    let (a, b) = (in_range(a), in_range(b));
    Service::new().subtract(a, b) == Ok(Number::Int(a - b))
}

#[quickcheck]
fn multiply_matches_integer_product(a: i32, b: i32) -> bool {
    let (a, b) = (in_range(a), in_range(b));
    Service::new().multiply(a, b) == Ok(Number::Int(a * b))
}

#[quickcheck]
fn divide_round_trips(a: i32, b: i32) -> TestResult {
    let (a, b) = (in_range(a), in_range(b));
    if b == 0 {
        return TestResult::discard();
    }
    let service = Service::new();
    let quotient = service.divide(a, b).unwrap();
    // Rounding may nudge the product just past a bound.
    let product = (quotient * Number::Int(b).as_f64()).clamp(-1_000_000.0, 1_000_000.0);
    let restored = service.divide(product, 1).unwrap();
    TestResult::from_bool(close(restored, Number::Int(a).as_f64()))
}

#[quickcheck]
fn float_add_is_within_tolerance(a: i32, b: i32) -> bool {
    let a = Number::Int(in_range(a)).as_f64() / 3.0;
    let b = Number::Int(in_range(b)).as_f64() / 7.0;
    let sum = Service::new().add(a, b).unwrap();
    sum.is_float() && close(sum.as_f64(), a + b)
}

#[quickcheck]
fn out_of_range_left_operand_is_reported(excess: u16, b: i32) -> bool {
    let a = 1_000_001 + i64::from(excess);
    Service::new().add(a, in_range(b))
        == Err(CalculatorError::InvalidInput {
            value: Number::Int(a),
        })
}

#[quickcheck]
fn identical_inputs_give_identical_outputs(a: i32, b: i32) -> bool {
    let service = Service::new();
    let (a, b) = (in_range(a), in_range(b));
    service.multiply(a, b) == service.multiply(a, b)
        && service.divide(a, b) == service.divide(a, b)
}
