use crate::state::{Pokemon, State, Terrain, Weather};

pub fn swift_swim(speed: f64, _holder: &Pokemon, state: &State) -> f64 {
    match state.effective_weather() {
        Some(w) if w.is_rain() => speed * 2.0,
        _ => speed,
    }
}

pub fn chlorophyll(speed: f64, _holder: &Pokemon, state: &State) -> f64 {
    match state.effective_weather() {
        Some(w) if w.is_sun() => speed * 2.0,
        _ => speed,
    }
}

pub fn sand_rush(speed: f64, _holder: &Pokemon, state: &State) -> f64 {
    match state.effective_weather() {
        Some(Weather::Sand) => speed * 2.0,
        _ => speed,
    }
}

pub fn slush_rush(speed: f64, _holder: &Pokemon, state: &State) -> f64 {
    match state.effective_weather() {
        Some(Weather::Hail | Weather::Snow) => speed * 2.0,
        _ => speed,
    }
}

pub fn surge_surfer(speed: f64, _holder: &Pokemon, state: &State) -> f64 {
    if state.terrain == Some(Terrain::Electric) {
        speed * 2.0
    } else {
        speed
    }
}

/// Quick Feet: 1.5x while statused. Ordering skips the paralysis penalty.
pub fn quick_feet(speed: f64, holder: &Pokemon, _state: &State) -> f64 {
    if holder.status.is_none() {
        speed
    } else {
        speed * 1.5
    }
}
