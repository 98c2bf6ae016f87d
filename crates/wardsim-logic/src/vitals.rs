//! Vital-sign simulation — baselines, clamped perturbation, alert tiers.
//!
//! Each monitored channel drifts by a small bounded step per simulated
//! tick and is clamped back into its physiological range, so the signal
//! wanders but never leaves the envelope. The random source is injected
//! by the caller; there is no global RNG state.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One snapshot of patient vitals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Blood oxygen saturation in percent.
    pub oxygen_pct: f32,
    /// Heart rate in beats per minute.
    pub heart_rate_bpm: f32,
    /// Systolic blood pressure in mmHg.
    pub blood_pressure_mmhg: f32,
    /// Core body temperature in Celsius.
    pub temperature_c: f32,
    /// Respiration rate in breaths per minute.
    pub respiration_per_min: f32,
}

impl Default for VitalSigns {
    fn default() -> Self {
        Self {
            oxygen_pct: 98.0,
            heart_rate_bpm: 75.0,
            blood_pressure_mmhg: 120.0,
            temperature_c: 37.0,
            respiration_per_min: 16.0,
        }
    }
}

/// Physiological envelope and per-tick drift for the simulated channels.
pub mod vital_constants {
    pub const HEART_RATE_MIN: f32 = 60.0;
    pub const HEART_RATE_MAX: f32 = 100.0;
    /// Maximum heart-rate drift per tick, in whole bpm.
    pub const HEART_RATE_STEP: i32 = 5;

    pub const OXYGEN_MIN: f32 = 95.0;
    pub const OXYGEN_MAX: f32 = 100.0;
    /// Oxygen drifts in 0.1% increments, up to ±0.2%.
    pub const OXYGEN_STEP_TENTHS: i32 = 2;

    pub const BLOOD_PRESSURE_MIN: f32 = 110.0;
    pub const BLOOD_PRESSURE_MAX: f32 = 140.0;
    pub const BLOOD_PRESSURE_STEP: i32 = 3;

    pub const TEMPERATURE_MIN: f32 = 36.5;
    pub const TEMPERATURE_MAX: f32 = 37.5;
    /// Temperature drifts in 0.1 °C increments, up to ±0.1 °C.
    pub const TEMPERATURE_STEP_TENTHS: i32 = 1;

    pub const RESPIRATION_MIN: f32 = 12.0;
    pub const RESPIRATION_MAX: f32 = 20.0;
    pub const RESPIRATION_STEP: i32 = 2;

    /// Below this oxygen saturation the patient is in immediate danger.
    pub const OXYGEN_CRITICAL: f32 = 90.0;
    /// Heart rate outside this band is an immediate danger.
    pub const HEART_RATE_CRITICAL_LOW: f32 = 50.0;
    pub const HEART_RATE_CRITICAL_HIGH: f32 = 120.0;
    /// Temperature outside this band warrants attention.
    pub const TEMPERATURE_WARN_LOW: f32 = 36.0;
    pub const TEMPERATURE_WARN_HIGH: f32 = 38.5;
}

use self::vital_constants as vc;

/// Severity of a vitals snapshot, worst channel wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalAlert {
    /// All channels nominal.
    Normal,
    /// Temperature outside the comfort band — monitor, no intervention.
    Warning,
    /// Oxygen or heart rate outside survivable limits — intervene now.
    Critical,
}

impl VitalSigns {
    /// Apply one tick of random drift, clamped to the physiological
    /// envelope. The caller owns the random source (seeded in tests).
    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.heart_rate_bpm +=
            rng.gen_range(-vc::HEART_RATE_STEP..=vc::HEART_RATE_STEP) as f32;
        self.oxygen_pct +=
            rng.gen_range(-vc::OXYGEN_STEP_TENTHS..=vc::OXYGEN_STEP_TENTHS) as f32 * 0.1;
        self.blood_pressure_mmhg +=
            rng.gen_range(-vc::BLOOD_PRESSURE_STEP..=vc::BLOOD_PRESSURE_STEP) as f32;
        self.temperature_c +=
            rng.gen_range(-vc::TEMPERATURE_STEP_TENTHS..=vc::TEMPERATURE_STEP_TENTHS) as f32 * 0.1;
        self.respiration_per_min +=
            rng.gen_range(-vc::RESPIRATION_STEP..=vc::RESPIRATION_STEP) as f32;

        self.heart_rate_bpm = self
            .heart_rate_bpm
            .clamp(vc::HEART_RATE_MIN, vc::HEART_RATE_MAX);
        self.oxygen_pct = self.oxygen_pct.clamp(vc::OXYGEN_MIN, vc::OXYGEN_MAX);
        self.blood_pressure_mmhg = self
            .blood_pressure_mmhg
            .clamp(vc::BLOOD_PRESSURE_MIN, vc::BLOOD_PRESSURE_MAX);
        self.temperature_c = self
            .temperature_c
            .clamp(vc::TEMPERATURE_MIN, vc::TEMPERATURE_MAX);
        self.respiration_per_min = self
            .respiration_per_min
            .clamp(vc::RESPIRATION_MIN, vc::RESPIRATION_MAX);
    }

    /// Whether every channel sits inside its simulated envelope.
    pub fn in_envelope(&self) -> bool {
        (vc::HEART_RATE_MIN..=vc::HEART_RATE_MAX).contains(&self.heart_rate_bpm)
            && (vc::OXYGEN_MIN..=vc::OXYGEN_MAX).contains(&self.oxygen_pct)
            && (vc::BLOOD_PRESSURE_MIN..=vc::BLOOD_PRESSURE_MAX)
                .contains(&self.blood_pressure_mmhg)
            && (vc::TEMPERATURE_MIN..=vc::TEMPERATURE_MAX).contains(&self.temperature_c)
            && (vc::RESPIRATION_MIN..=vc::RESPIRATION_MAX).contains(&self.respiration_per_min)
    }

    /// Classify this snapshot against the intervention thresholds.
    ///
    /// The thresholds sit outside the simulated envelope, so a snapshot
    /// produced by [`perturb`](Self::perturb) alone never alerts; they
    /// matter when a host scripts vitals directly (trauma scenarios).
    pub fn alert(&self) -> VitalAlert {
        if self.oxygen_pct < vc::OXYGEN_CRITICAL
            || self.heart_rate_bpm < vc::HEART_RATE_CRITICAL_LOW
            || self.heart_rate_bpm > vc::HEART_RATE_CRITICAL_HIGH
        {
            VitalAlert::Critical
        } else if self.temperature_c < vc::TEMPERATURE_WARN_LOW
            || self.temperature_c > vc::TEMPERATURE_WARN_HIGH
        {
            VitalAlert::Warning
        } else {
            VitalAlert::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_baseline_in_envelope() {
        assert!(VitalSigns::default().in_envelope());
    }

    #[test]
    fn test_perturb_never_leaves_envelope() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut vitals = VitalSigns::default();
        for _ in 0..10_000 {
            vitals.perturb(&mut rng);
            assert!(vitals.in_envelope(), "escaped envelope: {:?}", vitals);
        }
    }

    #[test]
    fn test_perturb_deterministic_for_seed() {
        let mut a = VitalSigns::default();
        let mut b = VitalSigns::default();
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            a.perturb(&mut rng_a);
            b.perturb(&mut rng_b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_alert_tiers() {
        let nominal = VitalSigns::default();
        assert_eq!(nominal.alert(), VitalAlert::Normal);

        let feverish = VitalSigns {
            temperature_c: 39.0,
            ..Default::default()
        };
        assert_eq!(feverish.alert(), VitalAlert::Warning);

        let hypoxic = VitalSigns {
            oxygen_pct: 85.0,
            ..Default::default()
        };
        assert_eq!(hypoxic.alert(), VitalAlert::Critical);

        let tachycardic = VitalSigns {
            heart_rate_bpm: 130.0,
            ..Default::default()
        };
        assert_eq!(tachycardic.alert(), VitalAlert::Critical);
    }
}
