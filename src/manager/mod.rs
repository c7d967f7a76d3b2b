mod attachments;
mod connectivity;
mod follow;
mod global_nets;

pub use attachments::Attachment;
pub use global_nets::GlobalNet;

use slotmap::{SecondaryMap, SlotMap};

use crate::error::TopologyError;
use crate::math::distance_2d::is_collinear;
use crate::math::Point2;
use crate::settings::Settings;
use crate::topology::{ConnectorId, Net, NetId, Wire, WireId, WirePoint};

/// Central arena that owns all wires and nets and orchestrates the
/// connectivity graph.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation. The
/// manager is the sole owner of wire lifetime; nets and the attachment
/// table store handles only.
///
/// All operations are synchronous, single-threaded graph edits; callers
/// observe the resulting state by polling after each call.
#[derive(Debug, Default)]
pub struct Manager {
    wires: SlotMap<WireId, Wire>,
    nets: SlotMap<NetId, Net>,
    /// Net insertion order; drives the deterministic `global_nets` pass.
    net_order: Vec<NetId>,
    connectors: SlotMap<ConnectorId, Point2>,
    attachments: SecondaryMap<ConnectorId, Attachment>,
    settings: Settings,
}

impl Manager {
    /// Creates a new, empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Replaces the settings.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    // --- Wire lifecycle ---

    /// Takes ownership of a wire and assigns it a fresh anonymous net.
    ///
    /// Geometric coincidence with existing wires is not inspected here;
    /// call [`Manager::generate_junctions`] after a batch of additions to
    /// converge the connectivity graph.
    pub fn add_wire(&mut self, wire: Wire) -> WireId {
        let id = self.wires.insert(wire);
        let net = self.insert_net(Net::new());
        self.link_wire_to_net(id, net);
        id
    }

    /// Removes a wire, disconnecting it from all connected wires, dropping
    /// its connector attachments and destroying its net if emptied.
    ///
    /// Returns the wire data so callers (e.g. an undo layer) can re-add it.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found.
    pub fn remove_wire(&mut self, id: WireId) -> Result<Wire, TopologyError> {
        if !self.wires.contains_key(id) {
            return Err(TopologyError::EntityNotFound("wire"));
        }

        let connected: Vec<WireId> = self.wires[id].connected_wires().iter().copied().collect();
        for other in connected {
            self.disconnect_wire(other, id);
        }

        self.attachments.retain(|_, att| att.wire != id);

        if let Some(net) = self.wires[id].net() {
            self.nets[net].remove_wire(id);
            if self.nets[net].is_empty() {
                self.drop_net(net);
            }
        }

        let mut wire = self.wires.remove(id).ok_or(TopologyError::EntityNotFound("wire"))?;
        wire.set_net(None);
        Ok(wire)
    }

    /// Returns a reference to the wire, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn wire(&self, id: WireId) -> Result<&Wire, TopologyError> {
        self.wires.get(id).ok_or(TopologyError::EntityNotFound("wire"))
    }

    /// Returns a mutable reference to the wire, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn wire_mut(&mut self, id: WireId) -> Result<&mut Wire, TopologyError> {
        self.wires.get_mut(id).ok_or(TopologyError::EntityNotFound("wire"))
    }

    /// Iterates over all wires.
    pub fn wires(&self) -> impl Iterator<Item = (WireId, &Wire)> {
        self.wires.iter()
    }

    // --- Net lifecycle ---

    /// Adds a caller-constructed net (typically empty, possibly pre-named).
    ///
    /// Member wires are linked separately; the manager always updates both
    /// sides of the wire↔net relation itself.
    pub fn add_net(&mut self, net: Net) -> NetId {
        self.insert_net(net)
    }

    /// Removes a net.
    ///
    /// # Errors
    ///
    /// Returns an error if the net is not found or still has member wires.
    pub fn remove_net(&mut self, id: NetId) -> Result<Net, TopologyError> {
        let net = self.nets.get(id).ok_or(TopologyError::EntityNotFound("net"))?;
        if !net.is_empty() {
            return Err(TopologyError::InvalidTopology(
                "net still has member wires".into(),
            ));
        }
        self.net_order.retain(|&n| n != id);
        self.nets.remove(id).ok_or(TopologyError::EntityNotFound("net"))
    }

    /// Returns a reference to the net, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn net(&self, id: NetId) -> Result<&Net, TopologyError> {
        self.nets.get(id).ok_or(TopologyError::EntityNotFound("net"))
    }

    /// Returns a mutable reference to the net, or an error if not found.
    ///
    /// The mutable surface is intended for renaming; membership is managed
    /// through the manager's own operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn net_mut(&mut self, id: NetId) -> Result<&mut Net, TopologyError> {
        self.nets.get_mut(id).ok_or(TopologyError::EntityNotFound("net"))
    }

    /// Iterates over all nets in insertion order.
    pub fn nets(&self) -> impl Iterator<Item = (NetId, &Net)> {
        self.net_order
            .iter()
            .filter_map(|&id| self.nets.get(id).map(|net| (id, net)))
    }

    /// Moves a wire into the given net, unlinking it from its current one.
    ///
    /// The vacated net is destroyed if this removes its last member.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire or net is not found.
    pub fn assign_wire_to_net(&mut self, wire: WireId, net: NetId) -> Result<(), TopologyError> {
        if !self.nets.contains_key(net) {
            return Err(TopologyError::EntityNotFound("net"));
        }
        let old = self
            .wires
            .get(wire)
            .ok_or(TopologyError::EntityNotFound("wire"))?
            .net();
        if old == Some(net) {
            return Ok(());
        }
        if let Some(old) = old {
            self.nets[old].remove_wire(wire);
            if self.nets[old].is_empty() {
                self.drop_net(old);
            }
        }
        self.link_wire_to_net(wire, net);
        Ok(())
    }

    // --- Point edits (attachment-aware wrappers) ---

    /// Appends a point to a managed wire.
    ///
    /// An attachment on the previous last point follows to the new end if
    /// its connector coincides with the appended point.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found.
    pub fn append_point(&mut self, wire: WireId, pos: Point2) -> Result<(), TopologyError> {
        self.wire_mut(wire)?.append_point(pos);
        self.normalize_attachments(wire);
        Ok(())
    }

    /// Prepends a point, shifting every attachment on the wire by one.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found.
    pub fn prepend_point(&mut self, wire: WireId, pos: Point2) -> Result<(), TopologyError> {
        self.wire_mut(wire)?.prepend_point(pos);
        self.shift_attachments_for_insert(wire, 0);
        Ok(())
    }

    /// Inserts a point before `index`, re-indexing attachments at or after
    /// the insertion point.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn insert_point(
        &mut self,
        wire: WireId,
        index: usize,
        pos: Point2,
    ) -> Result<(), TopologyError> {
        self.wire_mut(wire)?.insert_point(index, pos);
        self.shift_attachments_for_insert(wire, index);
        Ok(())
    }

    /// Removes the point at `index`, dropping any attachment on it and
    /// re-indexing attachments after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_point(&mut self, wire: WireId, index: usize) -> Result<WirePoint, TopologyError> {
        let removed = self.wire_mut(wire)?.remove_point(index);
        self.shift_attachments_for_remove(wire, index);
        Ok(removed)
    }

    /// Moves the point at `index` to a new position. The index stays
    /// constant, so attachments are untouched; no connectivity is
    /// recomputed.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn move_point_to(
        &mut self,
        wire: WireId,
        index: usize,
        pos: Point2,
    ) -> Result<(), TopologyError> {
        self.wire_mut(wire)?.move_point_to(index, pos);
        Ok(())
    }

    /// Removes interior points that are collinear with both neighbors and
    /// carry no semantic significance (no junction flag, no attachment).
    ///
    /// Every removal renumbers later attachments; attached and junction
    /// points are never dropped. Duplicate consecutive points count as
    /// collinear.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire is not found.
    pub fn simplify_wire(&mut self, wire: WireId) -> Result<(), TopologyError> {
        let mut index = 1;
        loop {
            let w = self.wire(wire)?;
            if index + 1 >= w.points_count() {
                break;
            }
            let points = w.points();
            let removable = !points[index].is_junction
                && !self.point_is_attached(wire, index)
                && is_collinear(
                    &points[index - 1].pos,
                    &points[index].pos,
                    &points[index + 1].pos,
                );
            if removable {
                self.remove_point(wire, index)?;
            } else {
                index += 1;
            }
        }
        Ok(())
    }

    // --- Internal helpers ---

    pub(crate) fn insert_net(&mut self, net: Net) -> NetId {
        let id = self.nets.insert(net);
        self.net_order.push(id);
        id
    }

    /// Removes a net from the arena and the insertion-order list.
    pub(crate) fn drop_net(&mut self, id: NetId) {
        self.nets.remove(id);
        self.net_order.retain(|&n| n != id);
    }

    /// Links both sides of the wire↔net relation.
    pub(crate) fn link_wire_to_net(&mut self, wire: WireId, net: NetId) {
        self.nets[net].add_wire(wire);
        self.wires[wire].set_net(Some(net));
    }
}
