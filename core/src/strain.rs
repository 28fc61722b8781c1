use crate::types::{DailyLoad, SessionRecord};

/// Nøytral RPE når utøveren ikke har logget opplevd anstrengelse.
pub const DEFAULT_RPE: f64 = 5.0;

// RPE utenfor 0–10 eller ikke-finit behandles som manglende
fn effective_rpe(rpe: Option<f64>, default_rpe: f64) -> f64 {
    match rpe {
        Some(r) if r.is_finite() && (0.0..=10.0).contains(&r) => r,
        _ => default_rpe,
    }
}

fn positive(x: Option<f64>) -> Option<f64> {
    match x {
        Some(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

/// Daglig "strain" for én gjennomført økt.
/// 1) volum × RPE når totalvolum finnes
/// 2) ellers session-RPE: RPE × minutter
/// 3) ellers 0; feiler aldri mot kalleren
pub fn session_strain_with(
    total_volume: Option<f64>,
    rpe: Option<f64>,
    duration_seconds: Option<f64>,
    default_rpe: f64,
) -> f64 {
    let rpe = effective_rpe(rpe, default_rpe);

    if let Some(volume) = positive(total_volume) {
        return volume * rpe;
    }
    if let Some(dur) = positive(duration_seconds) {
        return rpe * (dur / 60.0);
    }
    0.0
}

pub fn session_strain(
    total_volume: Option<f64>,
    rpe: Option<f64>,
    duration_seconds: Option<f64>,
) -> f64 {
    session_strain_with(total_volume, rpe, duration_seconds, DEFAULT_RPE)
}

/// Strain for en hel øktliste, én `DailyLoad` per økt (usortert OK).
pub fn daily_loads(records: &[SessionRecord], default_rpe: f64) -> Vec<DailyLoad> {
    records
        .iter()
        .map(|r| DailyLoad {
            date: r.date,
            load: session_strain_with(r.total_volume, r.rpe, r.duration_seconds, default_rpe),
        })
        .collect()
}
