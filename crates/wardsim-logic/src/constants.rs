//! Binding constants — temperature modes and bed types as plain `u8` ids.
//!
//! A host scripting layer can only pass integers and strings across its
//! call boundary, so the enum surface of this crate is mirrored here as
//! simple constants with no further dependencies.

pub mod temperature_modes {
    pub const COLD: u8 = 0;
    pub const NEUTRAL: u8 = 1;
    pub const WARM: u8 = 2;
}

pub mod bed_types {
    pub const PATIENT: u8 = 0;
    pub const SURGICAL: u8 = 1;
}
