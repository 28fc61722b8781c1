use chrono::NaiveDate;
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::acwr::classify_series;
use crate::daily::build_daily_series;
use crate::metrics::{self, Metrics};
use crate::strain::daily_loads;
use crate::types::{AcwrResult, AcwrSettings, RiskZone, SessionRecord};

/// Full pipeline for én utøver: økter → strain → tett dagserie → ACWR.
/// Ren og synkron; trygg å kalle i parallell per utøver.
pub fn analyze_records(
    records: &[SessionRecord],
    today: NaiveDate,
    settings: &AcwrSettings,
) -> AcwrResult {
    let loads = daily_loads(records, settings.default_rpe);
    let series = build_daily_series(&loads, settings.lookback_days, today);
    let result = classify_series(&series, settings);

    match result.zone {
        RiskZone::InsufficientData => warn!(
            "ACWR: utilstrekkelig datagrunnlag ({} økter, {} dagers vindu)",
            records.len(),
            settings.lookback_days
        ),
        zone => debug!(
            "ACWR {:?} -> {} (akutt={}, kronisk={})",
            result.ratio, zone, result.acute_load, result.chronic_load
        ),
    }
    result
}

// Inngangsobjekt for JSON-grensen. `today` er valgfri (default: lokal dag),
// `settings` er valgfri (default: validerte konstanter).
#[derive(Debug, Deserialize)]
struct AnalyzeIn {
    records: Vec<SessionRecord>,
    #[serde(default)]
    today: Option<NaiveDate>,
    #[serde(default, alias = "cfg")]
    settings: Option<AcwrSettings>,
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("ugyldig analyse-input ved '{path}': {message}")]
    InvalidInput { path: String, message: String },
    #[error("kunne ikke serialisere resultat: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON-grensen mot vertsapplikasjonen:
/// `{ "records": [...], "today": "YYYY-MM-DD"?, "settings": {...}? }`
/// inn, serialisert `AcwrResult` ut. Feltaliaser (`totalVolume`,
/// `durationSeconds`, ...) aksepteres for eldre klienter.
pub fn analyze_acwr_json(input_json: &str) -> Result<String, AnalyzeError> {
    let mut de = serde_json::Deserializer::from_str(input_json);
    let input: AnalyzeIn =
        serde_path_to_error::deserialize(&mut de).map_err(|e| AnalyzeError::InvalidInput {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })?;

    let settings = input.settings.unwrap_or_default();
    let today = input
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let result = analyze_records(&input.records, today, &settings);
    metrics::observe_result(Metrics::global(), &result);

    Ok(serde_json::to_string(&result)?)
}
