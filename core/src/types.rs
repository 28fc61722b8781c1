use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    // kalenderdag (YYYY-MM-DD), normalisert av kalleren
    #[serde(alias = "sessionDate", alias = "day")]
    pub date: NaiveDate,
    #[serde(default, alias = "totalVolume", alias = "volume")]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub rpe: Option<f64>, // 0–10
    #[serde(default, alias = "durationSeconds", alias = "duration_sec")]
    pub duration_seconds: Option<f64>,
}

/// Én økts belastning før aggregering. Flere innslag kan dele dato.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLoad {
    pub date: NaiveDate,
    pub load: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskZone {
    Detraining,
    Optimal,
    Warning,
    HighRisk,
    InsufficientData,
}

impl RiskZone {
    pub fn label(self) -> &'static str {
        match self {
            RiskZone::Detraining => "Detraining",
            RiskZone::Optimal => "Optimal",
            RiskZone::Warning => "Warning",
            RiskZone::HighRisk => "High Risk",
            RiskZone::InsufficientData => "Insufficient Data",
        }
    }
}

impl fmt::Display for RiskZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resultatet av én ACWR-analyse. Produseres ferskt per kall og muteres aldri.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcwrResult {
    pub ratio: Option<f64>, // 2 desimaler; None ved insufficient-data
    pub acute_load: f64,    // avrundet til nærmeste heltall
    pub chronic_load: f64,  // avrundet til nærmeste heltall
    pub zone: RiskZone,
    pub label: String,
}

/// Sonegrenser for ACWR.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneThresholds {
    pub detraining_below: f64, // typ 0.8
    pub optimal_max: f64,      // typ 1.3
    pub warning_max: f64,      // typ 1.5
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self {
            detraining_below: 0.8,
            optimal_max: 1.3,
            warning_max: 1.5,
        }
    }
}

/// Justerbare domeneparametre for analysen. Default bærer de validerte
/// konstantene (7/28-vinduer, minimum 14 dagers historikk, nøytral RPE 5).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AcwrSettings {
    pub acute_window_days: usize,
    pub chronic_window_days: usize,
    pub min_history_days: usize,
    pub lookback_days: usize,
    pub default_rpe: f64,
    pub thresholds: ZoneThresholds,
}

impl Default for AcwrSettings {
    fn default() -> Self {
        Self {
            acute_window_days: 7,
            chronic_window_days: 28,
            min_history_days: 14,
            lookback_days: 42,
            default_rpe: 5.0,
            thresholds: ZoneThresholds::default(),
        }
    }
}
