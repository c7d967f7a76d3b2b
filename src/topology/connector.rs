slotmap::new_key_type! {
    /// Opaque handle for an external anchor point (e.g. a component pin).
    ///
    /// The kernel never mutates the external object behind a connector;
    /// it only tracks the connector's last reported position and any wire
    /// attachment recorded against it.
    pub struct ConnectorId;
}
