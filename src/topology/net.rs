use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a net in the manager's arena.
    pub struct NetId;
}

/// A named or anonymous group of transitively connected wires.
///
/// A net owns no geometry, only membership, and stores wire handles
/// rather than references. The manager keeps the wire↔net relation
/// bidirectionally consistent by always updating both sides; `Net` never
/// reaches back into a wire.
#[derive(Debug, Clone, Default)]
pub struct Net {
    name: String,
    wires: Vec<WireId>,
}

impl Net {
    /// Creates a new, empty, anonymous net.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty net with the given name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wires: Vec::new(),
        }
    }

    /// Returns the net's name. Empty means anonymous.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the net's name. An empty string makes the net anonymous.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Adds a wire handle to the member list if absent.
    ///
    /// Returns `true` if the wire was added.
    pub fn add_wire(&mut self, wire: WireId) -> bool {
        if self.wires.contains(&wire) {
            return false;
        }
        self.wires.push(wire);
        true
    }

    /// Removes a wire handle from the member list.
    ///
    /// Returns `true` if the wire was a member.
    pub fn remove_wire(&mut self, wire: WireId) -> bool {
        let before = self.wires.len();
        self.wires.retain(|&w| w != wire);
        self.wires.len() != before
    }

    /// Checks membership.
    #[must_use]
    pub fn contains(&self, wire: WireId) -> bool {
        self.wires.contains(&wire)
    }

    /// Returns the member wires in insertion order.
    #[must_use]
    pub fn wires(&self) -> &[WireId] {
        &self.wires
    }

    /// Returns `true` if the net has no member wires.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }
}
