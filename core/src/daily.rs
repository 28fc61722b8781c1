use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use crate::types::DailyLoad;

/// Tett dagserie over de siste `window_days` dagene, eldst først, som ender
/// på `today`. Flere økter samme dag summeres; hviledager fylles med 0.
/// Lengden er alltid nøyaktig `window_days`, uansett hvor sparsom input er.
pub fn build_daily_series(
    loads: &[DailyLoad],
    window_days: usize,
    today: NaiveDate,
) -> Vec<f64> {
    if window_days == 0 {
        return Vec::new();
    }

    // dato -> summert last (dobbeltøkter akkumulerer)
    let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();
    for dl in loads {
        if dl.load.is_finite() && dl.load > 0.0 {
            *by_day.entry(dl.date).or_insert(0.0) += dl.load;
        }
    }

    let start = today - Duration::days(window_days as i64 - 1);
    let mut series = Vec::with_capacity(window_days);
    for offset in 0..window_days as i64 {
        let day = start + Duration::days(offset);
        series.push(by_day.get(&day).copied().unwrap_or(0.0));
    }
    series
}
