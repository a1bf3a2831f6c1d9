//! Inndata-validering for treningspakker.
//!
//! Alle sjekker feiler på første brudd og returnerer
//! `WorkoutError::InvalidValue` med feltnavn og verdi.

use crate::errors::WorkoutError;

fn invalid(field: &'static str, requirement: &'static str, value: f64) -> WorkoutError {
    WorkoutError::InvalidValue { field, requirement, value }
}

/// NaN/inf avvises.
pub fn finite(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(field, "a finite number", value))
    }
}

/// Strengt positiv (brukes for verdier vi deler på).
pub fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(field, "a finite number > 0", value))
    }
}

pub fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(field, "a finite number >= 0", value))
    }
}

/// Heltall >= 0 (skritt, armtak, antall bassenglengder).
pub fn whole_count(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    // u64::MAX as f64 == 2^64, som ikke passer i u64
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(invalid(field, "a whole number >= 0", value))
    }
}

pub fn arity(code: &str, expected: usize, got: usize) -> Result<(), WorkoutError> {
    if expected == got {
        Ok(())
    } else {
        Err(WorkoutError::Arity { code: code.to_string(), expected, got })
    }
}
