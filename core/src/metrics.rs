use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts, Registry};

use crate::types::{AcwrResult, RiskZone};

static GLOBAL: Lazy<Metrics> = Lazy::new(Metrics::new);

/// Prometheus-tellere for analysegrensen. Kjernen selv er ren og tar ingen
/// metrics-håndtak; tellingen skjer ved JSON-grensen.
pub struct Metrics {
    analyses_total: IntCounter,
    insufficient_data_total: IntCounter,
    high_risk_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            analyses_total: counter("acwr_analyses_total", "Antall gjennomførte ACWR-analyser"),
            insufficient_data_total: counter(
                "acwr_insufficient_data_total",
                "Analyser degradert til insufficient-data",
            ),
            high_risk_total: counter(
                "acwr_high_risk_total",
                "Analyser klassifisert som high-risk",
            ),
        }
    }

    pub fn global() -> &'static Metrics {
        &GLOBAL
    }

    /// Registrer tellerne i et Prometheus-register (typisk default_registry).
    pub fn register(&self, registry: &Registry) -> prometheus::Result<()> {
        registry.register(Box::new(self.analyses_total.clone()))?;
        registry.register(Box::new(self.insufficient_data_total.clone()))?;
        registry.register(Box::new(self.high_risk_total.clone()))?;
        Ok(())
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

// navn/hjelpetekst er statiske og gyldige, så konstruksjon kan ikke feile
fn counter(name: &str, help: &str) -> IntCounter {
    IntCounter::with_opts(Opts::new(name, help)).unwrap()
}

pub fn acwr_analyses_total(m: &Metrics) -> &IntCounter {
    &m.analyses_total
}

pub fn acwr_insufficient_data_total(m: &Metrics) -> &IntCounter {
    &m.insufficient_data_total
}

pub fn acwr_high_risk_total(m: &Metrics) -> &IntCounter {
    &m.high_risk_total
}

pub fn observe_result(m: &Metrics, result: &AcwrResult) {
    acwr_analyses_total(m).inc();
    match result.zone {
        RiskZone::InsufficientData => acwr_insufficient_data_total(m).inc(),
        RiskZone::HighRisk => acwr_high_risk_total(m).inc(),
        _ => {}
    }
}
