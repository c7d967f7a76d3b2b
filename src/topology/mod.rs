pub mod connector;
pub mod net;
pub mod point;
pub mod wire;

pub use connector::ConnectorId;
pub use net::{Net, NetId};
pub use point::WirePoint;
pub use wire::{Wire, WireId};
