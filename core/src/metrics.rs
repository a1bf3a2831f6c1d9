use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::errors::WorkoutError;

/// Tellere for én rapportkjøring.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    packages_total: IntCounterVec,
    rejected_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let packages_total = IntCounterVec::new(
            Opts::new("workout_packages_total", "Summarized workout packages"),
            &["training_type"],
        )?;
        let rejected_total = IntCounterVec::new(
            Opts::new("workout_packages_rejected_total", "Rejected workout packages"),
            &["reason"],
        )?;

        registry.register(Box::new(packages_total.clone()))?;
        registry.register(Box::new(rejected_total.clone()))?;

        Ok(Self { registry, packages_total, rejected_total })
    }

    pub fn record_summary(&self, training_type: &str) {
        self.packages_total.with_label_values(&[training_type]).inc();
    }

    pub fn record_rejected(&self, err: &WorkoutError) {
        self.rejected_total.with_label_values(&[err.reason()]).inc();
    }

    pub fn summarized(&self, training_type: &str) -> u64 {
        self.packages_total.with_label_values(&[training_type]).get()
    }

    pub fn rejected(&self, reason: &str) -> u64 {
        self.rejected_total.with_label_values(&[reason]).get()
    }

    /// Prometheus tekstformat.
    pub fn encode_text(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
