pub mod distance_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Coordinates entering the kernel are assumed to be pre-snapped to the
/// host's grid, so this only has to absorb floating-point noise.
pub const TOLERANCE: f64 = 1e-10;

/// Snaps a scalar to the nearest multiple of `grid_size`.
///
/// A non-positive grid size leaves the value unchanged.
#[must_use]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_grid_line() {
        assert!((snap_to_grid(12.4, 5.0) - 10.0).abs() < TOLERANCE);
        assert!((snap_to_grid(12.6, 5.0) - 15.0).abs() < TOLERANCE);
        // Ties round away from zero.
        assert!((snap_to_grid(-7.5, 5.0) + 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn snap_with_zero_grid_is_identity() {
        assert!((snap_to_grid(12.34, 0.0) - 12.34).abs() < TOLERANCE);
    }
}
