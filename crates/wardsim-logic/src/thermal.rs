//! Temperature setpoints — three fixed modes mapped to fixed Celsius values.
//!
//! Bed climate control is deliberately coarse: cold for sterile work,
//! neutral as the powered-on default, warm for patient comfort.

use crate::constants::temperature_modes;
use serde::{Deserialize, Serialize};

/// Climate setpoint for a bed's temperature control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TempMode {
    Cold = 0,
    Neutral = 1,
    Warm = 2,
}

impl TempMode {
    /// Fixed Celsius value for this setpoint.
    pub fn celsius(self) -> f32 {
        match self {
            Self::Cold => 18.0,
            Self::Neutral => 22.0,
            Self::Warm => 26.0,
        }
    }

    /// Human-readable name, as shown in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cold => "COLD",
            Self::Neutral => "NEUTRAL",
            Self::Warm => "WARM",
        }
    }

    /// Resolve a binding-layer id. Unknown ids resolve to `Neutral`, the
    /// same default the setpoint holder starts in.
    pub fn from_id(id: u8) -> Self {
        match id {
            temperature_modes::COLD => Self::Cold,
            temperature_modes::WARM => Self::Warm,
            _ => Self::Neutral,
        }
    }

    pub fn all() -> &'static [TempMode] {
        &[Self::Cold, Self::Neutral, Self::Warm]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_setpoints() {
        assert_eq!(TempMode::Cold.celsius(), 18.0);
        assert_eq!(TempMode::Neutral.celsius(), 22.0);
        assert_eq!(TempMode::Warm.celsius(), 26.0);
    }

    #[test]
    fn test_from_id_known() {
        assert_eq!(TempMode::from_id(temperature_modes::COLD), TempMode::Cold);
        assert_eq!(
            TempMode::from_id(temperature_modes::NEUTRAL),
            TempMode::Neutral
        );
        assert_eq!(TempMode::from_id(temperature_modes::WARM), TempMode::Warm);
    }

    #[test]
    fn test_from_id_unknown_is_neutral() {
        assert_eq!(TempMode::from_id(99), TempMode::Neutral);
    }
}
