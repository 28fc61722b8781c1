/// Glattingsfaktor α = 2/(N+1) for et vindu på N dager.
pub fn smoothing_alpha(window_days: usize) -> f64 {
    2.0 / (window_days as f64 + 1.0)
}

/// Eksponentielt vektet glidende snitt over en ordnet serie (eldst først).
/// Seedes med første element, ikke 0. Tom serie gir 0.
/// α utenfor (0, 1] klemmes inn i intervallet.
pub fn ewma(values: &[f64], alpha: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let a = alpha.clamp(f64::EPSILON, 1.0);

    let mut e = values[0];
    for &v in &values[1..] {
        e = a * v + (1.0 - a) * e;
    }
    e
}
