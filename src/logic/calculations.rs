/// Round half up to the nearest whole number (2.5 -> 3, -2.5 -> -2)
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Convert wind speed from m/s to whole km/h
pub fn ms_to_kmh(speed_ms: f64) -> f64 {
    round_half_up(speed_ms * 3.6)
}

/// Convert visibility from metres to whole kilometres
pub fn meters_to_km(meters: f64) -> f64 {
    round_half_up(meters / 1000.0)
}
