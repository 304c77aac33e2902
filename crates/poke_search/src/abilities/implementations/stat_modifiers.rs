/// Contrary: stage changes are inverted
pub fn contrary(change: i8) -> i8 {
    -change
}

/// Simple: stage changes are doubled
pub fn simple(change: i8) -> i8 {
    change.saturating_mul(2)
}
