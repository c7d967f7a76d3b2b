use std::collections::HashSet;

use super::net::NetId;
use super::point::WirePoint;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the manager's arena.
    pub struct WireId;
}

/// An ordered, mutable polyline participating in the connectivity graph.
///
/// A wire is constructed detached, then handed to the manager which
/// assigns it to a net. The `connected` set is a derived, symmetric
/// relation maintained by the manager: it lists the *other* wires sharing
/// a junction with this one.
///
/// Point mutations here are purely structural; index bookkeeping for
/// connector attachments lives in the manager, which wraps these calls.
/// Out-of-range indices are caller bugs and panic.
#[derive(Debug, Clone, Default)]
pub struct Wire {
    points: Vec<WirePoint>,
    net: Option<NetId>,
    connected: HashSet<WireId>,
}

impl Wire {
    /// Creates a new, empty, detached wire.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point at the end of the polyline.
    pub fn append_point(&mut self, pos: Point2) {
        self.points.push(WirePoint::new(pos));
    }

    /// Prepends a point at the start of the polyline.
    pub fn prepend_point(&mut self, pos: Point2) {
        self.points.insert(0, WirePoint::new(pos));
    }

    /// Inserts a point before `index`, shifting subsequent points.
    ///
    /// # Panics
    ///
    /// Panics if `index > points_count()`.
    pub fn insert_point(&mut self, index: usize, pos: Point2) {
        assert!(
            index <= self.points.len(),
            "point index {index} out of range"
        );
        self.points.insert(index, WirePoint::new(pos));
    }

    /// Removes and returns the point at `index`, shifting subsequent points.
    ///
    /// # Panics
    ///
    /// Panics if `index >= points_count()`.
    pub fn remove_point(&mut self, index: usize) -> WirePoint {
        assert!(index < self.points.len(), "point index {index} out of range");
        self.points.remove(index)
    }

    /// Moves the point at `index` to a new position, keeping its index and
    /// junction flag. No connectivity recomputation happens here.
    ///
    /// # Panics
    ///
    /// Panics if `index >= points_count()`.
    pub fn move_point_to(&mut self, index: usize, pos: Point2) {
        assert!(index < self.points.len(), "point index {index} out of range");
        self.points[index].pos = pos;
    }

    /// Sets or clears the junction flag of the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= points_count()`.
    pub fn set_junction(&mut self, index: usize, is_junction: bool) {
        assert!(index < self.points.len(), "point index {index} out of range");
        self.points[index].is_junction = is_junction;
    }

    /// Returns the ordered point sequence.
    #[must_use]
    pub fn points(&self) -> &[WirePoint] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn points_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&WirePoint> {
        self.points.get(index)
    }

    /// Returns the net this wire belongs to. `None` only while detached.
    #[must_use]
    pub fn net(&self) -> Option<NetId> {
        self.net
    }

    /// Returns the set of wires directly connected to this one.
    #[must_use]
    pub fn connected_wires(&self) -> &HashSet<WireId> {
        &self.connected
    }

    pub(crate) fn set_net(&mut self, net: Option<NetId>) {
        self.net = net;
    }

    pub(crate) fn connected_mut(&mut self) -> &mut HashSet<WireId> {
        &mut self.connected
    }
}
