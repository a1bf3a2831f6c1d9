// core/src/dispatch.rs
use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::errors::WorkoutError;
use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::validation::{arity, finite, whole_count};

/// Bygger en økt fra posisjonelle sensordata.
pub type Builder = fn(&[f64]) -> Result<Workout, WorkoutError>;

/// Typene som kan leses fra en pakke: kode + feltrekkefølge.
pub trait FromPackage: Sized + Into<Workout> {
    const CODE: &'static str;
    const FIELDS: &'static [&'static str];

    /// `values` har allerede riktig lengde og kun endelige tall.
    fn from_values(values: &[f64]) -> Result<Self, WorkoutError>;
}

impl FromPackage for Running {
    const CODE: &'static str = "RUN";
    const FIELDS: &'static [&'static str] = &["action", "duration", "weight"];

    fn from_values(v: &[f64]) -> Result<Self, WorkoutError> {
        Running::new(whole_count("action", v[0])?, v[1], v[2])
    }
}

impl FromPackage for SportsWalking {
    const CODE: &'static str = "WLK";
    const FIELDS: &'static [&'static str] = &["action", "duration", "weight", "height"];

    fn from_values(v: &[f64]) -> Result<Self, WorkoutError> {
        SportsWalking::new(whole_count("action", v[0])?, v[1], v[2], v[3])
    }
}

impl FromPackage for Swimming {
    const CODE: &'static str = "SWM";
    const FIELDS: &'static [&'static str] =
        &["action", "duration", "weight", "length_pool", "count_pool"];

    fn from_values(v: &[f64]) -> Result<Self, WorkoutError> {
        let action = whole_count("action", v[0])?;
        let count_pool = whole_count("count_pool", v[4])?;
        Swimming::new(action, v[1], v[2], v[3], count_pool)
    }
}

fn build<T: FromPackage>(data: &[f64]) -> Result<Workout, WorkoutError> {
    arity(T::CODE, T::FIELDS.len(), data.len())?;
    for (&field, &value) in T::FIELDS.iter().zip(data) {
        finite(field, value)?;
    }
    T::from_values(data).map(Into::into)
}

// Kode → konstruktør
static TRAINING_TYPES: Lazy<HashMap<&'static str, Builder>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, Builder> = HashMap::new();
    m.insert(Swimming::CODE, build::<Swimming>);
    m.insert(Running::CODE, build::<Running>);
    m.insert(SportsWalking::CODE, build::<SportsWalking>);
    m
});

/// Kjente treningskoder, sortert.
pub fn known_codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = TRAINING_TYPES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

/// Les data mottatt fra sensorene.
///
/// Ukjent kode gir `InvalidInput`, feil antall verdier gir `Arity`, og
/// ugyldige feltverdier (f.eks. varighet 0) gir `InvalidValue`.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let builder = TRAINING_TYPES
        .get(workout_type)
        .ok_or_else(|| WorkoutError::InvalidInput { code: workout_type.to_string() })?;

    let workout = builder(data)?;
    debug!(
        "read_package: {} -> {} (action={}, duration={})",
        workout_type,
        workout.training_type(),
        workout.session().action(),
        workout.session().duration()
    );
    Ok(workout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_codes() {
        assert_eq!(known_codes(), vec!["RUN", "SWM", "WLK"]);
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidInput { .. })
        ));
    }
}
