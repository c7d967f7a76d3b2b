//! Connector-follow logic: keeping attached wire points on their
//! connectors as the host moves things around.

use super::attachments::Attachment;
use super::Manager;
use crate::math::distance_2d::points_coincident;
use crate::math::{snap_to_grid, Point2, TOLERANCE};
use crate::topology::{ConnectorId, WireId};

impl Manager {
    /// Repositions the wire point attached to a moved connector.
    ///
    /// Updates the connector's stored position; without an attachment
    /// that is all. With `preserve_straight_angles` disabled the attached
    /// point is moved in place, freely deforming the adjacent segments.
    /// With it enabled, a diagonal move of an attached endpoint inserts
    /// two bend points so that every leg of the resulting path stays
    /// horizontal or vertical; the bend coordinate is the midpoint
    /// between the endpoint's neighbor and the target, snapped to the
    /// grid. The insertions re-index every other attachment on the wire.
    pub fn connector_moved(&mut self, connector: ConnectorId, pos: Point2) {
        let Some(stored) = self.connectors.get_mut(connector) else {
            return;
        };
        *stored = pos;

        let Some(&Attachment { wire, point_index }) = self.attachments.get(connector)
        else {
            return;
        };
        let Ok(w) = self.wire(wire) else {
            return;
        };

        let old = w.points()[point_index].pos;
        if points_coincident(&old, &pos) {
            return;
        }

        let count = w.points_count();
        let is_endpoint = point_index == 0 || point_index + 1 == count;
        if !self.settings().preserve_straight_angles || count < 2 || !is_endpoint {
            self.wires[wire].move_point_to(point_index, pos);
            return;
        }

        let neighbor_index = if point_index == 0 { 1 } else { point_index - 1 };
        let neighbor = w.points()[neighbor_index].pos;
        let diagonal =
            (neighbor.x - pos.x).abs() >= TOLERANCE && (neighbor.y - pos.y).abs() >= TOLERANCE;
        if !diagonal {
            self.wires[wire].move_point_to(point_index, pos);
            return;
        }

        let grid = self.settings().grid_size;
        let vertical_segment = (old.x - neighbor.x).abs() < TOLERANCE;
        // Bends ordered from the neighbor side toward the moved endpoint.
        let (near, far) = if vertical_segment {
            let mid_y = snap_to_grid((neighbor.y + pos.y) / 2.0, grid);
            (
                Point2::new(neighbor.x, mid_y),
                Point2::new(pos.x, mid_y),
            )
        } else {
            let mid_x = snap_to_grid((neighbor.x + pos.x) / 2.0, grid);
            (
                Point2::new(mid_x, neighbor.y),
                Point2::new(mid_x, pos.y),
            )
        };

        if point_index == 0 {
            self.insert_bend(wire, 1, far);
            self.insert_bend(wire, 2, near);
            self.wires[wire].move_point_to(0, pos);
        } else {
            self.insert_bend(wire, point_index, near);
            self.insert_bend(wire, point_index + 1, far);
            self.wires[wire].move_point_to(point_index + 2, pos);
        }
    }

    fn insert_bend(&mut self, wire: WireId, index: usize, pos: Point2) {
        self.wires[wire].insert_point(index, pos);
        self.shift_attachments_for_insert(wire, index);
    }

    /// Refreshes attachments after an externally driven point edit.
    ///
    /// Connectors attached to this point but no longer coincident with it
    /// are detached; unattached connectors now coincident with it are
    /// attached. Used by undo layers after restoring wire geometry.
    pub fn point_moved_by_user(&mut self, wire: WireId, index: usize) {
        let Ok(w) = self.wire(wire) else {
            return;
        };
        let Some(point) = w.point(index) else {
            return;
        };
        let pos = point.pos;

        let connector_ids: Vec<ConnectorId> = self.connectors.keys().collect();
        for connector in connector_ids {
            let connector_pos = self.connectors[connector];
            let coincident = points_coincident(&connector_pos, &pos);
            let attached_here = self
                .attachments
                .get(connector)
                .is_some_and(|att| att.wire == wire && att.point_index == index);

            if attached_here && !coincident {
                self.attachments.remove(connector);
            } else if !attached_here && coincident && self.attachments.get(connector).is_none()
            {
                self.attachments
                    .insert(connector, Attachment { wire, point_index: index });
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::topology::Wire;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn attached_setup() -> (Manager, WireId, ConnectorId) {
        let mut manager = Manager::new();
        let mut wire = Wire::new();
        wire.append_point(p(0.0, 10.0));
        wire.append_point(p(10.0, 10.0));
        let w = manager.add_wire(wire);
        let conn = manager.add_connector(p(10.0, 10.0));
        assert!(manager.attach_wire_to_connector(w, conn));
        (manager, w, conn)
    }

    fn assert_point(manager: &Manager, wire: WireId, index: usize, x: f64, y: f64) {
        let pos = manager.wire(wire).unwrap().points()[index].pos;
        assert_relative_eq!(pos.x, x);
        assert_relative_eq!(pos.y, y);
    }

    #[test]
    fn diagonal_move_with_straight_angles_inserts_bends() {
        let (mut manager, wire, conn) = attached_setup();
        manager.set_settings(Settings {
            grid_size: 1.0,
            preserve_straight_angles: true,
        });

        manager.connector_moved(conn, p(10.0, 20.0));

        assert_eq!(manager.wire(wire).unwrap().points_count(), 4);
        assert_point(&manager, wire, 0, 0.0, 10.0);
        assert_point(&manager, wire, 1, 5.0, 10.0);
        assert_point(&manager, wire, 2, 5.0, 20.0);
        assert_point(&manager, wire, 3, 10.0, 20.0);
        // The attachment followed the endpoint to its new index.
        assert_eq!(manager.attached_point(conn), Some(3));
    }

    #[test]
    fn diagonal_move_without_straight_angles_deforms_freely() {
        let (mut manager, wire, conn) = attached_setup();
        manager.set_settings(Settings {
            grid_size: 1.0,
            preserve_straight_angles: false,
        });

        manager.connector_moved(conn, p(10.0, 20.0));

        assert_eq!(manager.wire(wire).unwrap().points_count(), 2);
        assert_point(&manager, wire, 0, 0.0, 10.0);
        assert_point(&manager, wire, 1, 10.0, 20.0);
        assert_eq!(manager.attached_point(conn), Some(1));
    }

    #[test]
    fn axis_aligned_move_needs_no_bends() {
        let (mut manager, wire, conn) = attached_setup();
        manager.set_settings(Settings {
            grid_size: 1.0,
            preserve_straight_angles: true,
        });

        manager.connector_moved(conn, p(20.0, 10.0));

        assert_eq!(manager.wire(wire).unwrap().points_count(), 2);
        assert_point(&manager, wire, 1, 20.0, 10.0);
    }

    #[test]
    fn first_endpoint_gets_bends_on_its_side() {
        let mut manager = Manager::new();
        let mut wire = Wire::new();
        wire.append_point(p(0.0, 10.0));
        wire.append_point(p(10.0, 10.0));
        let w = manager.add_wire(wire);
        let conn = manager.add_connector(p(0.0, 10.0));
        assert!(manager.attach_wire_to_connector(w, conn));
        manager.set_settings(Settings {
            grid_size: 1.0,
            preserve_straight_angles: true,
        });

        manager.connector_moved(conn, p(0.0, 0.0));

        assert_eq!(manager.wire(w).unwrap().points_count(), 4);
        assert_point(&manager, w, 0, 0.0, 0.0);
        assert_point(&manager, w, 1, 5.0, 0.0);
        assert_point(&manager, w, 2, 5.0, 10.0);
        assert_point(&manager, w, 3, 10.0, 10.0);
        assert_eq!(manager.attached_point(conn), Some(0));
    }

    #[test]
    fn bend_insertion_reindexes_other_attachments() {
        let (mut manager, wire, conn) = attached_setup();
        let other = manager.add_connector(p(0.0, 10.0));
        assert!(manager.attach_wire_to_connector(wire, other));
        manager.set_settings(Settings {
            grid_size: 1.0,
            preserve_straight_angles: true,
        });

        manager.connector_moved(conn, p(10.0, 20.0));

        assert_eq!(manager.attached_point(other), Some(0));
        assert_eq!(manager.attached_point(conn), Some(3));
    }

    #[test]
    fn moving_an_unattached_connector_is_a_no_op() {
        let mut manager = Manager::new();
        let mut wire = Wire::new();
        wire.append_point(p(0.0, 10.0));
        wire.append_point(p(10.0, 10.0));
        let w = manager.add_wire(wire);
        let conn = manager.add_connector(p(100.0, 100.0));

        manager.connector_moved(conn, p(200.0, 200.0));

        assert_eq!(manager.wire(w).unwrap().points_count(), 2);
        assert_eq!(manager.connector_position(conn), Some(p(200.0, 200.0)));
    }

    #[test]
    fn point_moved_by_user_attaches_and_detaches() {
        let mut manager = Manager::new();
        let mut wire = Wire::new();
        wire.append_point(p(0.0, 10.0));
        wire.append_point(p(10.0, 10.0));
        let w = manager.add_wire(wire);
        let conn = manager.add_connector(p(30.0, 30.0));

        // Drag the endpoint onto the connector.
        manager.move_point_to(w, 1, p(30.0, 30.0)).unwrap();
        manager.point_moved_by_user(w, 1);
        assert_eq!(manager.attached_wire(conn), Some(w));
        assert_eq!(manager.attached_point(conn), Some(1));

        // Drag it away again.
        manager.move_point_to(w, 1, p(10.0, 10.0)).unwrap();
        manager.point_moved_by_user(w, 1);
        assert_eq!(manager.attached_wire(conn), None);
    }
}
