//! Junction inference, explicit connect/disconnect and net merge/split.

use std::collections::{HashSet, VecDeque};

use log::debug;

use super::Manager;
use crate::error::TopologyError;
use crate::math::distance_2d::{point_to_segment_dist, points_coincident};
use crate::math::{Point2, TOLERANCE};
use crate::topology::{Net, NetId, Wire, WireId};

/// Checks whether a position lies on a wire: on one of its points or
/// anywhere along one of its segments.
fn point_on_wire(wire: &Wire, pos: &Point2) -> bool {
    if wire
        .points()
        .iter()
        .any(|pt| points_coincident(&pt.pos, pos))
    {
        return true;
    }
    wire.points()
        .windows(2)
        .any(|seg| point_to_segment_dist(pos, &seg[0].pos, &seg[1].pos) < TOLERANCE)
}

/// Endpoint indices of a wire: first and last point, deduplicated for
/// single-point wires.
fn endpoint_indices(wire: &Wire) -> Vec<usize> {
    match wire.points_count() {
        0 => Vec::new(),
        1 => vec![0],
        n => vec![0, n - 1],
    }
}

impl Manager {
    /// Infers junctions from geometric coincidence.
    ///
    /// For every wire endpoint lying on another wire (on a point or a
    /// segment), the pair is connected as if by
    /// [`Manager::connect_wire`]: the endpoint becomes a junction and the
    /// two nets merge. Calling this after any sequence of `add_wire` calls
    /// converges to correct connectivity. O(wires² × points), fine for
    /// diagram-sized inputs.
    pub fn generate_junctions(&mut self) {
        let mut hits: Vec<(WireId, WireId, usize)> = Vec::new();
        for (wire_id, wire) in &self.wires {
            for endpoint in endpoint_indices(wire) {
                let pos = wire.points()[endpoint].pos;
                for (other_id, other) in &self.wires {
                    if other_id == wire_id {
                        continue;
                    }
                    if point_on_wire(other, &pos) {
                        hits.push((other_id, wire_id, endpoint));
                    }
                }
            }
        }

        debug!("generate_junctions: {} endpoint hits", hits.len());
        for (host, toucher, endpoint) in hits {
            self.connect_wire_internal(host, toucher, endpoint);
        }
    }

    /// Explicitly connects two wires.
    ///
    /// Marks `wire_b`'s point at `point_index` as a junction, registers
    /// the symmetric connectivity edge and merges the two nets. The caller
    /// asserts the wires coincide geometrically (or is about to make them
    /// coincide); no geometry is checked here.
    ///
    /// # Errors
    ///
    /// Returns an error if either wire is not found.
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is out of range for `wire_b`.
    pub fn connect_wire(
        &mut self,
        wire_a: WireId,
        wire_b: WireId,
        point_index: usize,
    ) -> Result<(), TopologyError> {
        if !self.wires.contains_key(wire_a) {
            return Err(TopologyError::EntityNotFound("wire"));
        }
        let count = self.wire(wire_b)?.points_count();
        assert!(point_index < count, "point index {point_index} out of range");
        self.connect_wire_internal(wire_a, wire_b, point_index);
        Ok(())
    }

    fn connect_wire_internal(&mut self, wire_a: WireId, wire_b: WireId, point_index: usize) {
        let wires = &mut self.wires;
        wires[wire_b].set_junction(point_index, true);
        wires[wire_a].connected_mut().insert(wire_b);
        wires[wire_b].connected_mut().insert(wire_a);

        let net_a = wires[wire_a].net();
        let net_b = wires[wire_b].net();
        if let (Some(net_a), Some(net_b)) = (net_a, net_b) {
            if net_a != net_b {
                self.merge_nets(net_a, net_b);
            }
        }
    }

    /// Merges two nets, keeping the named one if exactly one has a name,
    /// otherwise the first.
    fn merge_nets(&mut self, first: NetId, second: NetId) {
        let first_named = !self.nets[first].name().is_empty();
        let second_named = !self.nets[second].name().is_empty();
        let (keep, lose) = if second_named && !first_named {
            (second, first)
        } else {
            (first, second)
        };

        // Snapshot the losing net's members before reassigning them.
        let members: Vec<WireId> = self.nets[lose].wires().to_vec();
        debug!("merging net {lose:?} ({} wires) into {keep:?}", members.len());
        for wire in members {
            self.link_wire_to_net(wire, keep);
        }
        self.drop_net(lose);
    }

    /// Removes the connectivity edge between two wires.
    ///
    /// Junction flags that solely encoded this connection are cleared,
    /// and connectivity of the remaining net is re-derived: if the two
    /// wires are no longer reachable from each other, the net splits —
    /// the original net keeps `wire_a`'s component and a fresh anonymous
    /// net receives `wire_b`'s. Disconnecting an unconnected pair is a
    /// harmless no-op.
    pub fn disconnect_wire(&mut self, wire_a: WireId, wire_b: WireId) {
        let Ok(wa) = self.wire(wire_a) else {
            return;
        };
        if !wa.connected_wires().contains(&wire_b) || self.wire(wire_b).is_err() {
            return;
        }

        let wires = &mut self.wires;
        wires[wire_a].connected_mut().remove(&wire_b);
        wires[wire_b].connected_mut().remove(&wire_a);

        self.clear_orphaned_junctions(wire_a, wire_b);
        self.clear_orphaned_junctions(wire_b, wire_a);

        // Removing one edge may or may not split the net.
        let component_a = self.wires_connected_to(wire_a);
        if component_a.contains(&wire_b) {
            return;
        }

        let Some(old_net) = self.wires[wire_a].net() else {
            return;
        };
        let component_b = self.wires_connected_to(wire_b);
        debug!(
            "splitting net {old_net:?}: {} wires move to a fresh net",
            component_b.len()
        );
        let fresh = self.insert_net(Net::new());
        for wire in component_b {
            self.nets[old_net].remove_wire(wire);
            self.link_wire_to_net(wire, fresh);
        }
    }

    /// Clears junction flags on `toucher`'s points that lie on `host` and
    /// are not touched by any third wire.
    fn clear_orphaned_junctions(&mut self, host: WireId, toucher: WireId) {
        let flagged: Vec<(usize, Point2)> = self.wires[toucher]
            .points()
            .iter()
            .enumerate()
            .filter(|(_, pt)| pt.is_junction)
            .map(|(index, pt)| (index, pt.pos))
            .collect();

        for (index, pos) in flagged {
            if !point_on_wire(&self.wires[host], &pos) {
                continue;
            }
            let touched_elsewhere = self.wires.iter().any(|(id, wire)| {
                id != host && id != toucher && point_on_wire(wire, &pos)
            });
            if !touched_elsewhere {
                self.wires[toucher].set_junction(index, false);
            }
        }
    }

    /// Returns the transitive closure of the `connected` relation starting
    /// at `wire`, including `wire` itself. Empty for an unknown handle.
    #[must_use]
    pub fn wires_connected_to(&self, wire: WireId) -> Vec<WireId> {
        if !self.wires.contains_key(wire) {
            return Vec::new();
        }

        let mut seen: HashSet<WireId> = HashSet::new();
        let mut queue: VecDeque<WireId> = VecDeque::new();
        let mut closure = Vec::new();
        seen.insert(wire);
        queue.push_back(wire);

        while let Some(current) = queue.pop_front() {
            closure.push(current);
            for &next in self.wires[current].connected_wires() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        closure
    }
}
