use crate::math::Point2;

/// A single point of a wire's polyline.
///
/// Pure value type; a point has no identity beyond its position and
/// junction flag. The junction flag marks the spot where another wire's
/// endpoint touches this wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WirePoint {
    /// The 2D position of the point.
    pub pos: Point2,
    /// Whether another wire's endpoint terminates at this point.
    pub is_junction: bool,
}

impl WirePoint {
    /// Creates a new non-junction point at the given position.
    #[must_use]
    pub fn new(pos: Point2) -> Self {
        Self {
            pos,
            is_junction: false,
        }
    }
}
