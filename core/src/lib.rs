pub mod acwr;
pub mod analyze_acwr;
pub mod daily;
pub mod metrics;
pub mod smoothing;
pub mod storage;
pub mod strain;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use acwr::{classify_series, zone_for_ratio, RoundTo};
pub use analyze_acwr::{analyze_acwr_json, analyze_records, AnalyzeError};
pub use daily::build_daily_series;
pub use smoothing::{ewma, smoothing_alpha};
pub use storage::{load_settings, save_settings};
pub use strain::{daily_loads, session_strain, session_strain_with, DEFAULT_RPE};
pub use types::{AcwrResult, AcwrSettings, DailyLoad, RiskZone, SessionRecord, ZoneThresholds};
