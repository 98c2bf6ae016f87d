//! Wardsim Core - Medical Prop Simulation
//!
//! Stateful simulation of the props a hospital level is dressed with:
//! adjustable beds with lighting and climate control, occupancy sensing,
//! a diagnostic scanner with vitals monitoring, and window furnishings.
//!
//! Everything here runs synchronously on the caller's thread. Each device
//! is privately owned by whoever created it (usually the [`factory`]); the
//! host engine binding that exposes these objects to a scripting layer
//! lives outside this crate.
//!
//! # Example
//!
//! ```rust
//! use wardsim_core::prelude::*;
//! use wardsim_logic::catalog::FallbackPolicy;
//!
//! let factory = BedFactory::new(FallbackPolicy::DefaultToPatient);
//! let mut bed = factory.create_from_name("surgical").unwrap();
//!
//! bed.power_on();
//! bed.set_height(100.0);
//! bed.enter_sterile_mode();
//! ```

pub mod bed;
pub mod devices;
pub mod factory;
pub mod observer;
pub mod rng;
pub mod window;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::bed::{Bed, MaintenanceReport};
    pub use crate::devices::light_strip::{EmergencyListener, LightStrip};
    pub use crate::devices::scanner::{DeviceListener, ScannerDevice};
    pub use crate::factory::{BedFactory, FactoryError};
    pub use crate::observer::SubscriptionId;
    pub use crate::rng::SimRng;
    pub use crate::window::Window;
}
