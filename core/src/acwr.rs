use crate::smoothing::{ewma, smoothing_alpha};
use crate::types::{AcwrResult, AcwrSettings, RiskZone, ZoneThresholds};

// --- RoundTo trait (offentlig, brukt av tester og analyze) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Soneoppslag for en ferdig beregnet ratio. Første treff vinner.
pub fn zone_for_ratio(ratio: f64, t: &ZoneThresholds) -> RiskZone {
    if ratio < t.detraining_below {
        RiskZone::Detraining
    } else if ratio <= t.optimal_max {
        RiskZone::Optimal
    } else if ratio <= t.warning_max {
        RiskZone::Warning
    } else {
        RiskZone::HighRisk
    }
}

fn insufficient(acute_load: f64, chronic_load: f64) -> AcwrResult {
    AcwrResult {
        ratio: None,
        acute_load,
        chronic_load,
        zone: RiskZone::InsufficientData,
        label: RiskZone::InsufficientData.label().to_string(),
    }
}

/// Klassifiser en tett dagserie (eldst først) til ACWR-sone.
///
/// Koblet modell: akuttvinduet (siste 7 dager) inngår i kronisk-vinduet
/// (siste 28 dager). Under `min_history_days` dager serie, eller ved
/// kronisk last 0, degraderes resultatet til insufficient-data i stedet
/// for å feile.
pub fn classify_series(series: &[f64], settings: &AcwrSettings) -> AcwrResult {
    if series.len() < settings.min_history_days {
        return insufficient(0.0, 0.0);
    }

    let acute = ewma(
        tail(series, settings.acute_window_days),
        smoothing_alpha(settings.acute_window_days),
    );
    let chronic = ewma(
        tail(series, settings.chronic_window_days),
        smoothing_alpha(settings.chronic_window_days),
    );

    // kronisk last 0 → ingen ratio, men beregnet akuttlast beholdes
    if !chronic.is_finite() || chronic <= 0.0 {
        let acute_display = if acute.is_finite() { acute.round_to(0) } else { 0.0 };
        return insufficient(acute_display, 0.0);
    }
    if !acute.is_finite() {
        return insufficient(0.0, chronic.round_to(0));
    }

    // ratio avrundes til 2 desimaler før soneoppslaget
    let ratio = (acute / chronic).round_to(2);
    let zone = zone_for_ratio(ratio, &settings.thresholds);
    AcwrResult {
        ratio: Some(ratio),
        acute_load: acute.round_to(0),
        chronic_load: chronic.round_to(0),
        zone,
        label: zone.label().to_string(),
    }
}

// siste n elementer, eller hele serien når den er kortere
fn tail(series: &[f64], n: usize) -> &[f64] {
    &series[series.len().saturating_sub(n)..]
}
