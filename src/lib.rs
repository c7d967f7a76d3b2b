pub mod error;
pub mod manager;
pub mod math;
pub mod settings;
pub mod topology;

pub use error::{Result, WirenetError};
pub use manager::Manager;
pub use settings::Settings;
