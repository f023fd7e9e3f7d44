//! Prometheus counters for engine outcomes.

use prometheus::{IntCounterVec, Opts, Registry};

pub struct Metrics {
    registry: Registry,
    vin_validations: IntCounterVec,
    barcode_extractions: IntCounterVec,
}

impl Metrics {
    pub fn new(namespace: &str) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let vin_validations = IntCounterVec::new(
            Opts::new("vin_validations_total", "VIN validations by outcome").namespace(namespace),
            &["outcome"],
        )?;
        let barcode_extractions = IntCounterVec::new(
            Opts::new("barcode_extractions_total", "Barcode extractions by matched rule")
                .namespace(namespace),
            &["rule"],
        )?;

        registry.register(Box::new(vin_validations.clone()))?;
        registry.register(Box::new(barcode_extractions.clone()))?;

        Ok(Self {
            registry,
            vin_validations,
            barcode_extractions,
        })
    }

    pub fn record_vin(&self, outcome: &str) {
        self.vin_validations.with_label_values(&[outcome]).inc();
    }

    pub fn record_barcode(&self, rule: &str) {
        self.barcode_extractions.with_label_values(&[rule]).inc();
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
