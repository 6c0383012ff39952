//! Arithmetic operations.
//!
//! Floating-point functions follow IEEE semantics (overflow yields infinity).
//! Integer functions return unsigned results and fail instead of wrapping.

use crate::utils::error::{Result, ServiceError};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails on a zero divisor of either sign.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(ServiceError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn sqrt(number: f64) -> Result<f64> {
    if number < 0.0 {
        return Err(ServiceError::NegativeSquareRoot);
    }
    Ok(number.sqrt())
}

/// `20!` is the largest factorial that fits in a `u64`.
pub fn factorial(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(ServiceError::NegativeFactorial);
    }

    (2..=n as u64).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or(ServiceError::ArithmeticOverflow {
            operation: "factorial",
        })
    })
}

pub fn average(numbers: &[f64]) -> Result<f64> {
    if numbers.is_empty() {
        return Err(ServiceError::EmptyCollection {
            action: "calculate average",
        });
    }
    let sum: f64 = numbers.iter().sum();
    Ok(sum / numbers.len() as f64)
}

pub fn max(numbers: &[f64]) -> Result<f64> {
    let (first, rest) = numbers.split_first().ok_or(ServiceError::EmptyCollection {
        action: "find maximum",
    })?;
    Ok(rest
        .iter()
        .fold(*first, |best, &n| if n > best { n } else { best }))
}

pub fn min(numbers: &[f64]) -> Result<f64> {
    let (first, rest) = numbers.split_first().ok_or(ServiceError::EmptyCollection {
        action: "find minimum",
    })?;
    Ok(rest
        .iter()
        .fold(*first, |best, &n| if n < best { n } else { best }))
}

/// Greatest common divisor of the absolute values.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn lcm(a: i64, b: i64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .ok_or(ServiceError::ArithmeticOverflow { operation: "lcm" })
}

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as u64;
    let mut divisor = 3u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
