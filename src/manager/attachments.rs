//! Connector attachment table.
//!
//! A connector is an external anchor (a component pin) known to the kernel
//! only by its handle and last reported position. An attachment pins a
//! connector to one physical point of one wire; the manager re-indexes the
//! table on every structural wire edit so the attachment keeps referring
//! to the same physical point.

use super::Manager;
use crate::math::distance_2d::points_coincident;
use crate::math::Point2;
use crate::topology::{ConnectorId, WireId};

/// A connector's link to one point of one wire.
///
/// `point_index` is always a valid index into the wire's point sequence;
/// entries are dropped when the referenced wire or point disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    /// The attached wire.
    pub wire: WireId,
    /// Index of the attached point within the wire.
    pub point_index: usize,
}

impl Manager {
    /// Registers a connector at the given position and returns its handle.
    pub fn add_connector(&mut self, pos: Point2) -> ConnectorId {
        self.connectors.insert(pos)
    }

    /// Unregisters a connector, dropping any attachment it holds.
    pub fn remove_connector(&mut self, connector: ConnectorId) {
        self.connectors.remove(connector);
        self.attachments.remove(connector);
    }

    /// Returns the connector's last reported position.
    #[must_use]
    pub fn connector_position(&self, connector: ConnectorId) -> Option<Point2> {
        self.connectors.get(connector).copied()
    }

    /// Attaches a wire to a connector.
    ///
    /// Scans the wire's points for the first one coincident with the
    /// connector's position and records the attachment there. Attachment
    /// is independent of junction status. A failed attach (no coincident
    /// point, unknown wire or connector) is a no-op that never clears an
    /// existing attachment.
    ///
    /// Returns `true` if an attachment was recorded.
    pub fn attach_wire_to_connector(&mut self, wire: WireId, connector: ConnectorId) -> bool {
        let Some(pos) = self.connector_position(connector) else {
            return false;
        };
        let Ok(w) = self.wire(wire) else {
            return false;
        };
        let Some(point_index) = w
            .points()
            .iter()
            .position(|pt| points_coincident(&pt.pos, &pos))
        else {
            return false;
        };
        self.attachments
            .insert(connector, Attachment { wire, point_index });
        true
    }

    /// Removes the connector's attachment, if any.
    pub fn detach_wire(&mut self, connector: ConnectorId) {
        self.attachments.remove(connector);
    }

    /// Returns the wire attached to the connector.
    #[must_use]
    pub fn attached_wire(&self, connector: ConnectorId) -> Option<WireId> {
        self.attachments.get(connector).map(|att| att.wire)
    }

    /// Returns the index of the wire point attached to the connector.
    #[must_use]
    pub fn attached_point(&self, connector: ConnectorId) -> Option<usize> {
        self.attachments
            .get(connector)
            .map(|att| att.point_index)
    }

    /// Checks whether any connector is attached to the given wire point.
    #[must_use]
    pub fn point_is_attached(&self, wire: WireId, index: usize) -> bool {
        self.attachments
            .values()
            .any(|att| att.wire == wire && att.point_index == index)
    }

    /// Re-indexes attachments after a point was inserted before `index`.
    pub(crate) fn shift_attachments_for_insert(&mut self, wire: WireId, index: usize) {
        for att in self.attachments.values_mut() {
            if att.wire == wire && att.point_index >= index {
                att.point_index += 1;
            }
        }
        self.normalize_attachments(wire);
    }

    /// Re-indexes attachments after the point at `index` was removed.
    ///
    /// An attachment on the removed point itself cannot be preserved and
    /// is dropped.
    pub(crate) fn shift_attachments_for_remove(&mut self, wire: WireId, index: usize) {
        self.attachments
            .retain(|_, att| !(att.wire == wire && att.point_index == index));
        for att in self.attachments.values_mut() {
            if att.wire == wire && att.point_index > index {
                att.point_index -= 1;
            }
        }
        self.normalize_attachments(wire);
    }

    /// Snaps endpoint attachments on the wire back to the wire's ends.
    ///
    /// A connector sitting on the wire's first point is attached to index
    /// 0, one sitting on the last point to the last index, so prepending
    /// or appending a duplicate of an attached endpoint keeps the
    /// attachment on the terminal point. Interior attachments keep their
    /// shifted index (they still track the physical point they were
    /// recorded on).
    pub(crate) fn normalize_attachments(&mut self, wire: WireId) {
        let Ok(w) = self.wire(wire) else {
            return;
        };
        let points = w.points();
        let Some(last) = points.len().checked_sub(1) else {
            return;
        };
        let mut updates: Vec<(ConnectorId, usize)> = Vec::new();
        for (connector, att) in &self.attachments {
            if att.wire != wire {
                continue;
            }
            let Some(pos) = self.connectors.get(connector) else {
                continue;
            };
            let target = if points_coincident(&points[0].pos, pos) {
                0
            } else if points_coincident(&points[last].pos, pos) {
                last
            } else {
                continue;
            };
            if target != att.point_index {
                updates.push((connector, target));
            }
        }
        for (connector, index) in updates {
            if let Some(att) = self.attachments.get_mut(connector) {
                att.point_index = index;
            }
        }
    }
}
