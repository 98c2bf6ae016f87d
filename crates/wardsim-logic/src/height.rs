//! Height rules — per-role ranges, named presets, reject-don't-clamp.
//!
//! Bed lift hardware refuses an out-of-range target outright rather than
//! driving to the nearest limit, so the rule here is validation, never
//! repair.

use serde::{Deserialize, Serialize};

/// Inclusive travel range of a bed lift, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min_cm: f32,
    pub max_cm: f32,
}

impl HeightRange {
    /// Patient beds sit low for unassisted entry and cap low for safety.
    pub const PATIENT: HeightRange = HeightRange {
        min_cm: 40.0,
        max_cm: 90.0,
    };

    /// Surgical beds start higher and reach standing work height.
    pub const SURGICAL: HeightRange = HeightRange {
        min_cm: 60.0,
        max_cm: 120.0,
    };

    pub fn contains(&self, height_cm: f32) -> bool {
        height_cm >= self.min_cm && height_cm <= self.max_cm
    }

    /// Validate a requested height. Returns the accepted value, or `None`
    /// when the request is out of range — the caller keeps its current
    /// height in that case.
    pub fn accept(&self, height_cm: f32) -> Option<f32> {
        self.contains(height_cm).then_some(height_cm)
    }
}

/// Named lift positions used by the bed roles.
pub mod presets {
    /// Patient-bed resting default.
    pub const PATIENT_DEFAULT: f32 = 55.0;
    /// Patient-bed comfort-mode position.
    pub const PATIENT_COMFORT: f32 = 50.0;

    /// Surgical-bed standby default.
    pub const SURGICAL_DEFAULT: f32 = 85.0;
    /// Standing work height for the surgeon.
    pub const SURGICAL_WORK: f32 = 100.0;
    /// Gurney-level transfer height.
    pub const SURGICAL_TRANSFER: f32 = 75.0;
    /// Lowered position for patient access and emergency egress.
    pub const SURGICAL_ACCESS: f32 = 70.0;
}

/// Work height for a named surgical procedure. Unrecognized procedures
/// use the standard work height.
pub fn procedure_height(procedure: &str) -> f32 {
    match procedure {
        "brain_surgery" => 110.0,
        "cardiac_surgery" => 95.0,
        "general_surgery" => 100.0,
        _ => presets::SURGICAL_WORK,
    }
}
