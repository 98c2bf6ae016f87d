//! Bed factory — type or free-text name in, constructed bed out.
//!
//! Name resolution lives in `wardsim_logic::catalog`; this module only
//! decides what a miss means, and that is the caller's choice via
//! [`FallbackPolicy`]. Both historical behaviors are first-class: quietly
//! substitute a patient bed, or refuse with a typed error.

use crate::bed::Bed;
use log::{info, warn};
use thiserror::Error;
use wardsim_logic::catalog::{self, BedType, FallbackPolicy};

/// Factory lookup failures. Only produced under [`FallbackPolicy::Reject`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("unknown bed type: {0:?}")]
    UnknownBedType(String),
    #[error("unknown bed type id: {0}")]
    UnknownBedTypeId(u8),
}

/// Builds beds for the ward.
#[derive(Debug, Clone, Copy, Default)]
pub struct BedFactory {
    fallback: FallbackPolicy,
}

impl BedFactory {
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Construct a bed of a known type. Infallible.
    pub fn create(&self, bed_type: BedType) -> Bed {
        info!("Creating {}", bed_type.class_name());
        match bed_type {
            BedType::Patient => Bed::patient(),
            BedType::Surgical => Bed::surgical(),
        }
    }

    /// Construct from a free-text name (case-insensitive, alias-tolerant).
    /// Unresolvable names go through the fallback policy.
    pub fn create_from_name(&self, name: &str) -> Result<Bed, FactoryError> {
        match catalog::parse_name(name) {
            Some(bed_type) => Ok(self.create(bed_type)),
            None => match self.fallback {
                FallbackPolicy::DefaultToPatient => {
                    warn!("Unknown bed type: {} - defaulting to PatientBed", name);
                    Ok(self.create(BedType::Patient))
                }
                FallbackPolicy::Reject => Err(FactoryError::UnknownBedType(name.to_string())),
            },
        }
    }

    /// Construct from a binding-layer id, through the same fallback policy.
    pub fn create_from_id(&self, id: u8) -> Result<Bed, FactoryError> {
        match BedType::from_id(id) {
            Some(bed_type) => Ok(self.create(bed_type)),
            None => match self.fallback {
                FallbackPolicy::DefaultToPatient => {
                    warn!("Unknown bed type id: {} - defaulting to PatientBed", id);
                    Ok(self.create(BedType::Patient))
                }
                FallbackPolicy::Reject => Err(FactoryError::UnknownBedTypeId(id)),
            },
        }
    }

    /// Catalog names this factory resolves without aliases.
    pub fn available_bed_types() -> Vec<&'static str> {
        BedType::all().iter().map(|t| t.catalog_name()).collect()
    }
}
