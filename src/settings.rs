/// Per-manager configuration, read by the connector-follow logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Grid spacing used to snap inserted bend points.
    pub grid_size: f64,
    /// If `true`, moving an attached connector keeps every adjacent wire
    /// segment horizontal or vertical by inserting bend points.
    pub preserve_straight_angles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            preserve_straight_angles: true,
        }
    }
}
