use crate::types::AcwrSettings;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;

/// Leser inn analyseinnstillinger fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-innstillinger.
pub fn load_settings(path: &str) -> Result<AcwrSettings> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("kunne ikke lese innstillinger fra {path}"))?;
        let settings: AcwrSettings = serde_json::from_str(&contents)
            .with_context(|| format!("ugyldig innstillingsfil: {path}"))?;
        info!("Innstillinger lastet fra {path}");
        Ok(settings)
    } else {
        warn!("Fant ikke innstillinger på {path}, bruker default");
        Ok(AcwrSettings::default())
    }
}

/// Lagrer innstillinger til disk som JSON (pretty-print).
pub fn save_settings(settings: &AcwrSettings, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)
        .with_context(|| format!("kunne ikke skrive innstillinger til {path}"))?;
    info!("Innstillinger lagret til {path}");
    Ok(())
}
