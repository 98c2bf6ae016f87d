//! Bed catalog — type enum, free-text alias resolution, fallback policy.
//!
//! The host layer addresses bed types either by integer id or by loosely
//! spelled names coming from level scripts. Name matching is case-folded
//! and alias-tolerant. What happens to a name nobody recognizes is a
//! deliberate configuration choice, not a hard-coded default: the two
//! historical behaviors (quietly build a patient bed vs. refuse) both
//! shipped at some point, so callers pick one explicitly.

use crate::constants::bed_types;
use crate::height::HeightRange;
use serde::{Deserialize, Serialize};

/// The two bed models the ward stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BedType {
    Patient = 0,
    Surgical = 1,
}

impl BedType {
    /// Class-style name, used in diagnostics and host-side type checks.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Patient => "PatientBed",
            Self::Surgical => "SurgicalBed",
        }
    }

    /// Display name for pickers and menus.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Patient => "Patient Bed",
            Self::Surgical => "Surgical Bed",
        }
    }

    /// Canonical catalog name, the one `parse_name` always accepts.
    pub fn catalog_name(self) -> &'static str {
        match self {
            Self::Patient => "patient_bed",
            Self::Surgical => "surgical_bed",
        }
    }

    /// Lift travel range for this model.
    pub fn height_range(self) -> HeightRange {
        match self {
            Self::Patient => HeightRange::PATIENT,
            Self::Surgical => HeightRange::SURGICAL,
        }
    }

    /// Resolve a binding-layer id.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            bed_types::PATIENT => Some(Self::Patient),
            bed_types::SURGICAL => Some(Self::Surgical),
            _ => None,
        }
    }

    pub fn all() -> &'static [BedType] {
        &[Self::Patient, Self::Surgical]
    }
}

/// Display name for a binding-layer id, tolerant of garbage ids.
pub fn bed_type_name(id: u8) -> &'static str {
    match BedType::from_id(id) {
        Some(t) => t.display_name(),
        None => "Unknown Bed Type",
    }
}

/// Case-insensitive, alias-tolerant name resolution.
///
/// Returns `None` for unrecognized names; the caller's
/// [`FallbackPolicy`] decides what that means.
pub fn parse_name(name: &str) -> Option<BedType> {
    match name.to_ascii_lowercase().as_str() {
        "patient_bed" | "patient" | "patientbed" => Some(BedType::Patient),
        "surgical_bed" | "surgical" | "surgery" | "surgicalbed" => Some(BedType::Surgical),
        _ => None,
    }
}

/// What a factory does with a bed-type name it cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// Build a patient bed and log the substitution.
    #[default]
    DefaultToPatient,
    /// Refuse with an error naming the unknown input.
    Reject,
}
