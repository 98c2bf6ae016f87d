//! Hospital beds — common frame plus role-specific equipment.
//!
//! One `Bed` type covers both models the ward stocks. The shared frame
//! (power, lift, light strip, thermostat, maintenance sequence) lives on
//! the struct; everything model-specific hangs off the [`BedRole`] tag and
//! is dispatched by capability match — a role-specific call on a bed
//! without that capability is a logged no-op, mirroring how the host
//! scripting layer treats every rejected operation.
//!
//! While a bed is powered off, every adjustment is refused in place with
//! a diagnostic; nothing is queued and nothing clamps.

use crate::devices::light_strip::LightStrip;
use crate::devices::occupancy::{OccupancyEvent, OccupancySensor};
use crate::devices::scanner::ScannerDevice;
use crate::devices::thermostat::Thermostat;
use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use wardsim_logic::catalog::BedType;
use wardsim_logic::height::{presets, procedure_height, HeightRange};
use wardsim_logic::lighting::LightColor;
use wardsim_logic::scans::ScanKind;
use wardsim_logic::thermal::TempMode;

/// Height band a surgical procedure may legally run in. Narrower at the
/// bottom than the lift's travel range: below this the surgeon cannot
/// work, even though the lift can go there.
const SURGICAL_POSITION_MIN_CM: f32 = 70.0;
const SURGICAL_POSITION_MAX_CM: f32 = 120.0;

/// Vitals bounds enforced during an active procedure; outside them the
/// surgical team is alerted.
const PROCEDURE_OXYGEN_FLOOR_PCT: f32 = 95.0;
const PROCEDURE_HEART_RATE_CEIL_BPM: f32 = 110.0;

/// Patient-bed equipment: occupancy sensing and comfort mode.
#[derive(Debug, Default)]
pub struct PatientUnit {
    sensor: OccupancySensor,
    comfort_mode: bool,
}

/// Surgical-bed equipment: scanner device, sterile mode, procedure log.
#[derive(Debug)]
pub struct SurgicalUnit {
    device: ScannerDevice,
    sterile_mode: bool,
    procedure: Option<String>,
}

/// Role tag carrying the model-specific equipment.
#[derive(Debug)]
pub enum BedRole {
    Patient(PatientUnit),
    Surgical(SurgicalUnit),
}

/// One step of a maintenance check.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceStep {
    pub name: &'static str,
    pub ok: bool,
    pub detail: String,
}

/// Ordered result of a full maintenance sequence, e.g. for a host-side
/// engineering panel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaintenanceReport {
    pub steps: Vec<MaintenanceStep>,
}

impl MaintenanceReport {
    fn push(&mut self, name: &'static str, ok: bool, detail: impl Into<String>) {
        let detail = detail.into();
        info!("Checking {}... {}", name, detail);
        self.steps.push(MaintenanceStep { name, ok, detail });
    }

    pub fn all_ok(&self) -> bool {
        self.steps.iter().all(|s| s.ok)
    }
}

/// An adjustable hospital bed.
pub struct Bed {
    bed_type: BedType,
    powered: bool,
    height_cm: f32,
    range: HeightRange,
    lights: LightStrip,
    thermostat: Thermostat,
    role: BedRole,
}

impl Bed {
    pub fn patient() -> Self {
        info!("PatientBed created with occupancy monitoring");
        Self {
            bed_type: BedType::Patient,
            powered: false,
            height_cm: presets::PATIENT_DEFAULT,
            range: HeightRange::PATIENT,
            lights: LightStrip::new(),
            thermostat: Thermostat::new(),
            role: BedRole::Patient(PatientUnit::default()),
        }
    }

    pub fn surgical() -> Self {
        info!("SurgicalBed created with advanced medical systems");
        Self {
            bed_type: BedType::Surgical,
            powered: false,
            height_cm: presets::SURGICAL_DEFAULT,
            range: HeightRange::SURGICAL,
            lights: LightStrip::new(),
            thermostat: Thermostat::new(),
            role: BedRole::Surgical(SurgicalUnit {
                device: ScannerDevice::new(),
                sterile_mode: false,
                procedure: None,
            }),
        }
    }

    pub fn bed_type(&self) -> BedType {
        self.bed_type
    }

    pub fn class_name(&self) -> &'static str {
        self.bed_type.class_name()
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    // ── Power ───────────────────────────────────────────────────────────

    pub fn power_on(&mut self) {
        if self.powered {
            return;
        }
        self.powered = true;
        info!("{} powered ON", self.class_name());
        self.thermostat.set_mode(TempMode::Neutral);
        self.lights.activate();
        self.role_power_on();
    }

    pub fn power_off(&mut self) {
        if !self.powered {
            return;
        }
        self.powered = false;
        info!("{} powered OFF", self.class_name());
        self.lights.deactivate();
        self.role_power_off();
    }

    fn role_power_on(&mut self) {
        match self.bed_type {
            BedType::Patient => {
                info!("PatientBed systems initializing...");
                info!("Occupancy monitoring activated");
                self.set_height(presets::PATIENT_DEFAULT);
                self.set_temperature(TempMode::Neutral);
            }
            BedType::Surgical => {
                info!("SurgicalBed advanced systems initializing...");
                info!("Medical scanner and monitoring system online");
                self.set_height(presets::SURGICAL_DEFAULT);
                self.set_temperature(TempMode::Neutral);
                self.center_device();
            }
        }
    }

    fn role_power_off(&mut self) {
        match self.bed_type {
            BedType::Patient => {
                info!("PatientBed systems shutting down...");
                if self.is_occupied() {
                    warn!("Patient still on bed during shutdown!");
                }
                self.disable_comfort_mode();
            }
            BedType::Surgical => {
                info!("SurgicalBed systems shutting down...");
                if self.is_procedure_active() {
                    warn!("Procedure in progress during shutdown!");
                    self.end_procedure();
                }
                if let BedRole::Surgical(unit) = &mut self.role {
                    unit.device.stop_vital_monitoring();
                    unit.device.stop_scan();
                }
                self.exit_sterile_mode();
            }
        }
    }

    // ── Height ──────────────────────────────────────────────────────────

    pub fn set_height(&mut self, height_cm: f32) {
        if !self.powered {
            info!("Cannot set height - bed is powered off");
            return;
        }
        match self.range.accept(height_cm) {
            Some(h) => {
                self.height_cm = h;
                info!("Height set to {:.1} cm", h);
            }
            None => info!(
                "Invalid height. Range: {:.1} - {:.1} cm",
                self.range.min_cm, self.range.max_cm
            ),
        }
    }

    pub fn raise_height(&mut self, amount: f32) {
        if !self.powered {
            info!("Cannot adjust height - bed is powered off");
            return;
        }
        match self.range.accept(self.height_cm + amount) {
            Some(h) => {
                self.height_cm = h;
                info!("Height raised to {:.1} cm", h);
            }
            None => info!(
                "Cannot raise height - would exceed maximum ({:.1} cm)",
                self.range.max_cm
            ),
        }
    }

    pub fn lower_height(&mut self, amount: f32) {
        if !self.powered {
            info!("Cannot adjust height - bed is powered off");
            return;
        }
        match self.range.accept(self.height_cm - amount) {
            Some(h) => {
                self.height_cm = h;
                info!("Height lowered to {:.1} cm", h);
            }
            None => info!(
                "Cannot lower height - would go below minimum ({:.1} cm)",
                self.range.min_cm
            ),
        }
    }

    pub fn height(&self) -> f32 {
        self.height_cm
    }

    pub fn height_range(&self) -> HeightRange {
        self.range
    }

    // ── Lights ──────────────────────────────────────────────────────────

    pub fn activate_lights(&mut self) {
        self.lights.activate();
    }

    pub fn deactivate_lights(&mut self) {
        self.lights.deactivate();
    }

    pub fn set_light_brightness(&mut self, intensity: f32) {
        self.lights.set_brightness(intensity);
    }

    pub fn set_light_color(&mut self, color: LightColor) {
        self.lights.set_color(color);
    }

    /// Throw the bed into emergency lighting. The strip notifies its
    /// subscribers; the bed's own response happens right here.
    pub fn trigger_emergency(&mut self) {
        warn!("EMERGENCY TRIGGERED on {}", self.class_name());
        self.lights.activate_emergency_mode();
        warn!("{} responding to emergency activation", self.class_name());
    }

    pub fn clear_emergency(&mut self) {
        info!("Emergency cleared on {}", self.class_name());
        self.lights.deactivate_emergency_mode();
        info!("{} emergency response deactivated", self.class_name());
    }

    pub fn lights(&self) -> &LightStrip {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut LightStrip {
        &mut self.lights
    }

    // ── Temperature ─────────────────────────────────────────────────────

    pub fn set_temperature(&mut self, mode: TempMode) {
        if !self.powered {
            info!("Cannot set temperature - bed is powered off");
            return;
        }
        self.thermostat.set_mode(mode);
    }

    /// Binding-layer wrapper taking the integer mode id.
    pub fn set_temperature_id(&mut self, id: u8) {
        self.set_temperature(TempMode::from_id(id));
    }

    pub fn temperature_mode(&self) -> TempMode {
        self.thermostat.mode()
    }

    pub fn temperature_celsius(&self) -> f32 {
        self.thermostat.celsius()
    }

    // ── Maintenance ─────────────────────────────────────────────────────

    /// Fixed four-step check plus the role hook. Nothing aborts the
    /// sequence; the report carries every step in order.
    pub fn perform_maintenance_check(&self) -> MaintenanceReport {
        info!("Starting maintenance check for {}", self.class_name());
        let mut report = MaintenanceReport::default();

        report.push(
            "power system",
            self.powered,
            if self.powered { "ON" } else { "OFF" },
        );
        report.push(
            "height mechanism",
            self.range.contains(self.height_cm),
            format!("{:.1} cm", self.height_cm),
        );
        report.push("light system", true, self.lights.mode_name());
        report.push("temperature system", true, self.thermostat.mode().name());

        self.role_specific_checks(&mut report);

        info!("Maintenance check completed for {}", self.class_name());
        report
    }

    fn role_specific_checks(&self, report: &mut MaintenanceReport) {
        match &self.role {
            BedRole::Patient(unit) => {
                report.push(
                    "occupancy sensor",
                    true,
                    if unit.sensor.is_occupied() {
                        "occupied"
                    } else {
                        "vacant"
                    },
                );
                report.push(
                    "comfort mode",
                    true,
                    if unit.comfort_mode {
                        "ENABLED"
                    } else {
                        "DISABLED"
                    },
                );
            }
            BedRole::Surgical(unit) => {
                report.push(
                    "surgical systems",
                    true,
                    if unit.sterile_mode {
                        "sterile mode ACTIVE"
                    } else {
                        "sterile mode INACTIVE"
                    },
                );
                if let Some(procedure) = &unit.procedure {
                    report.push("active procedure", true, procedure.clone());
                }
                report.push(
                    "positioning system",
                    self.is_surgical_position_valid(),
                    format!("{:.1} cm", self.height_cm),
                );
            }
        }
    }

    // ── Patient role ────────────────────────────────────────────────────

    fn patient_unit(&self) -> Option<&PatientUnit> {
        match &self.role {
            BedRole::Patient(unit) => Some(unit),
            BedRole::Surgical(_) => None,
        }
    }

    fn patient_unit_mut(&mut self) -> Option<&mut PatientUnit> {
        match &mut self.role {
            BedRole::Patient(unit) => Some(unit),
            BedRole::Surgical(_) => None,
        }
    }

    pub fn simulate_patient_entry(&mut self) {
        info!("Patient entering bed...");
        let name = self.class_name();
        let event = match self.patient_unit_mut() {
            Some(unit) => unit.sensor.set_occupied(true),
            None => {
                warn!("{} has no occupancy sensor", name);
                return;
            }
        };
        if event == Some(OccupancyEvent::Entered) {
            self.on_patient_entered();
        }
    }

    pub fn simulate_patient_exit(&mut self) {
        info!("Patient leaving bed...");
        let name = self.class_name();
        let event = match self.patient_unit_mut() {
            Some(unit) => unit.sensor.set_occupied(false),
            None => {
                warn!("{} has no occupancy sensor", name);
                return;
            }
        };
        if event == Some(OccupancyEvent::Left) {
            self.on_patient_left();
        }
    }

    fn on_patient_entered(&mut self) {
        info!("Patient detected on bed");
        if self.is_comfort_mode_enabled() {
            self.apply_comfort_preset();
        }
        if !self.lights.is_emergency_mode() {
            self.lights.set_brightness(0.3);
            self.lights.set_color(LightColor::WARM_WHITE);
        }
    }

    fn on_patient_left(&mut self) {
        info!("Patient left the bed");
        self.reset_patient_defaults();
        if !self.lights.is_emergency_mode() {
            self.lights.set_brightness(0.5);
            self.lights.set_color(LightColor::WHITE);
        }
    }

    fn apply_comfort_preset(&mut self) {
        if !self.powered {
            return;
        }
        info!("Adjusting bed for patient comfort...");
        self.set_height(presets::PATIENT_COMFORT);
        self.set_temperature(TempMode::Warm);
        self.lights.set_brightness(0.4);
        self.lights.set_color(LightColor::SOFT_WARM);
    }

    fn reset_patient_defaults(&mut self) {
        if !self.powered {
            return;
        }
        info!("Resetting to default settings...");
        self.set_height(presets::PATIENT_DEFAULT);
        self.set_temperature(TempMode::Neutral);
        self.lights.set_brightness(0.5);
        self.lights.set_color(LightColor::WHITE);
    }

    pub fn is_occupied(&self) -> bool {
        self.patient_unit()
            .map(|unit| unit.sensor.is_occupied())
            .unwrap_or(false)
    }

    pub fn enable_comfort_mode(&mut self) {
        let name = self.class_name();
        let Some(unit) = self.patient_unit_mut() else {
            warn!("{} has no comfort mode", name);
            return;
        };
        unit.comfort_mode = true;
        info!("Comfort mode ENABLED");
        if self.is_occupied() {
            self.apply_comfort_preset();
        }
    }

    pub fn disable_comfort_mode(&mut self) {
        let name = self.class_name();
        let Some(unit) = self.patient_unit_mut() else {
            warn!("{} has no comfort mode", name);
            return;
        };
        unit.comfort_mode = false;
        info!("Comfort mode DISABLED");
        self.reset_patient_defaults();
    }

    pub fn is_comfort_mode_enabled(&self) -> bool {
        self.patient_unit()
            .map(|unit| unit.comfort_mode)
            .unwrap_or(false)
    }

    /// Occupancy sensor access, e.g. to subscribe a nurse station.
    pub fn occupancy_sensor_mut(&mut self) -> Option<&mut OccupancySensor> {
        self.patient_unit_mut().map(|unit| &mut unit.sensor)
    }

    // ── Surgical role ───────────────────────────────────────────────────

    fn surgical_unit(&self) -> Option<&SurgicalUnit> {
        match &self.role {
            BedRole::Surgical(unit) => Some(unit),
            BedRole::Patient(_) => None,
        }
    }

    fn surgical_unit_mut(&mut self) -> Option<&mut SurgicalUnit> {
        match &mut self.role {
            BedRole::Surgical(unit) => Some(unit),
            BedRole::Patient(_) => None,
        }
    }

    fn require_surgical(&mut self) -> bool {
        if self.surgical_unit().is_none() {
            warn!("{} has no surgical systems", self.class_name());
            return false;
        }
        true
    }

    pub fn enter_sterile_mode(&mut self) {
        if !self.powered {
            info!("Cannot enter sterile mode - bed is powered off");
            return;
        }
        if !self.require_surgical() {
            return;
        }
        if let Some(unit) = self.surgical_unit_mut() {
            unit.sterile_mode = true;
        }
        info!("STERILE MODE ACTIVATED");
        self.lights.set_brightness(0.9);
        self.lights.set_color(LightColor::WHITE);
        self.set_temperature(TempMode::Cold);
        info!("Sterile environment configured");
    }

    pub fn exit_sterile_mode(&mut self) {
        if !self.require_surgical() {
            return;
        }
        if let Some(unit) = self.surgical_unit_mut() {
            unit.sterile_mode = false;
        }
        info!("Sterile mode deactivated");
        self.lights.set_brightness(0.5);
        self.lights.set_color(LightColor::WHITE);
    }

    pub fn is_sterile_mode(&self) -> bool {
        self.surgical_unit()
            .map(|unit| unit.sterile_mode)
            .unwrap_or(false)
    }

    pub fn start_procedure(&mut self, procedure: &str) {
        if !self.powered {
            info!("Cannot start procedure - bed is powered off");
            return;
        }
        if !self.require_surgical() {
            return;
        }
        if !self.is_sterile_mode() {
            warn!("Starting procedure without sterile mode!");
        }
        if let Some(unit) = self.surgical_unit_mut() {
            unit.procedure = Some(procedure.to_string());
        }
        info!("Starting surgical procedure: {}", procedure);
        self.validate_procedure_requirements();
        self.adjust_for_procedure(procedure);
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.start_vital_monitoring();
        }
    }

    pub fn end_procedure(&mut self) {
        if !self.require_surgical() {
            return;
        }
        let finished = self
            .surgical_unit_mut()
            .and_then(|unit| unit.procedure.take());
        let Some(procedure) = finished else {
            info!("No active procedure to end");
            return;
        };
        info!("Ending surgical procedure: {}", procedure);
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.stop_vital_monitoring();
            unit.device.stop_scan();
        }
        self.set_height(presets::SURGICAL_DEFAULT);
        self.exit_sterile_mode();
    }

    pub fn is_procedure_active(&self) -> bool {
        self.surgical_unit()
            .map(|unit| unit.procedure.is_some())
            .unwrap_or(false)
    }

    pub fn current_procedure(&self) -> Option<&str> {
        self.surgical_unit()
            .and_then(|unit| unit.procedure.as_deref())
    }

    fn validate_procedure_requirements(&mut self) {
        if !self.is_sterile_mode() {
            info!("Recommendation: activate sterile mode for surgery");
        }
        if !self.is_surgical_position_valid() {
            info!("Adjusting to optimal surgical height");
            self.set_to_surgical_height();
        }
        info!("Procedure requirements validated");
    }

    fn adjust_for_procedure(&mut self, procedure: &str) {
        info!("Adjusting bed configuration for: {}", procedure);
        match procedure {
            "brain_surgery" | "cardiac_surgery" => {
                self.set_height(procedure_height(procedure));
                self.adjust_lighting_for_procedure();
            }
            "general_surgery" => {
                self.set_height(procedure_height(procedure));
            }
            _ => {
                info!("Using default surgical configuration");
                self.set_to_surgical_height();
            }
        }
        self.set_temperature(TempMode::Cold);
    }

    fn adjust_lighting_for_procedure(&mut self) {
        self.lights.set_brightness(1.0);
        self.lights.set_color(LightColor::WHITE);
    }

    fn is_surgical_position_valid(&self) -> bool {
        self.height_cm >= SURGICAL_POSITION_MIN_CM && self.height_cm <= SURGICAL_POSITION_MAX_CM
    }

    // ── Scanner device (surgical role) ──────────────────────────────────

    pub fn start_scan(&mut self, kind: ScanKind) {
        if !self.require_surgical() {
            return;
        }
        info!("Initiating {} scan...", kind.name());
        if let Some(unit) = self.surgical_unit_mut() {
            if let Some(data) = unit.device.start_scan(kind) {
                info!(
                    "Scan completed on surgical bed: {} (quality {:.0}%)",
                    data.kind.name(),
                    data.quality * 100.0
                );
            }
        }
    }

    pub fn stop_scanning(&mut self) {
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.stop_scan();
        }
    }

    pub fn start_vital_monitoring(&mut self) {
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.start_vital_monitoring();
        }
    }

    pub fn stop_vital_monitoring(&mut self) {
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.stop_vital_monitoring();
        }
    }

    /// One vitals tick. During a procedure the surgical team is alerted
    /// when the snapshot leaves the procedure bounds.
    pub fn update_patient_vitals<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let procedure_active = self.is_procedure_active();
        let name = self.class_name();
        let Some(unit) = self.surgical_unit_mut() else {
            warn!("{} has no vitals monitor", name);
            return;
        };
        if let Some(vitals) = unit.device.update_vitals(rng) {
            if procedure_active
                && (vitals.oxygen_pct < PROCEDURE_OXYGEN_FLOOR_PCT
                    || vitals.heart_rate_bpm > PROCEDURE_HEART_RATE_CEIL_BPM)
            {
                warn!("ALERT: vital signs require attention during procedure!");
            }
        }
    }

    pub fn swivel_device_left(&mut self, angle: f32) {
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.swivel_left(angle);
        }
    }

    pub fn swivel_device_right(&mut self, angle: f32) {
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.swivel_right(angle);
        }
    }

    pub fn center_device(&mut self) {
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.center();
        }
    }

    pub fn position_for_patient_access(&mut self) {
        if !self.require_surgical() {
            return;
        }
        info!("Positioning for patient access...");
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.swivel_right(90.0);
        }
        self.set_height(presets::SURGICAL_ACCESS);
    }

    pub fn position_for_procedure(&mut self) {
        if !self.require_surgical() {
            return;
        }
        info!("Positioning for surgical procedure...");
        self.center_device();
        self.set_to_surgical_height();
    }

    pub fn set_to_surgical_height(&mut self) {
        if !self.require_surgical() {
            return;
        }
        self.set_height(presets::SURGICAL_WORK);
        info!("Set to surgical height: {:.0} cm", presets::SURGICAL_WORK);
    }

    pub fn set_to_transfer_height(&mut self) {
        if !self.require_surgical() {
            return;
        }
        self.set_height(presets::SURGICAL_TRANSFER);
        info!(
            "Set to transfer height: {:.0} cm",
            presets::SURGICAL_TRANSFER
        );
    }

    pub fn trigger_surgical_emergency(&mut self) {
        if !self.require_surgical() {
            return;
        }
        warn!("SURGICAL EMERGENCY TRIGGERED!");
        self.trigger_emergency();
        self.activate_emergency_protocols();
    }

    pub fn activate_emergency_protocols(&mut self) {
        if !self.require_surgical() {
            return;
        }
        warn!("Activating emergency protocols...");
        self.position_for_patient_access();
        if let Some(unit) = self.surgical_unit_mut() {
            unit.device.start_vital_monitoring();
        }
        self.lights.activate_emergency_mode();
        warn!("Emergency protocols active - all systems ready");
    }

    /// Scanner device access, e.g. to subscribe a monitoring station.
    pub fn scanner_device(&self) -> Option<&ScannerDevice> {
        self.surgical_unit().map(|unit| &unit.device)
    }

    pub fn scanner_device_mut(&mut self) -> Option<&mut ScannerDevice> {
        self.surgical_unit_mut().map(|unit| &mut unit.device)
    }
}

impl std::fmt::Debug for Bed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bed")
            .field("bed_type", &self.bed_type)
            .field("powered", &self.powered)
            .field("height_cm", &self.height_cm)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;

    #[test]
    fn test_patient_defaults() {
        let bed = Bed::patient();
        assert_eq!(bed.class_name(), "PatientBed");
        assert!(!bed.is_powered());
        assert_eq!(bed.height(), 55.0);
        assert_eq!(bed.temperature_mode(), TempMode::Neutral);
        assert!(!bed.is_occupied());
    }

    #[test]
    fn test_surgical_defaults() {
        let bed = Bed::surgical();
        assert_eq!(bed.class_name(), "SurgicalBed");
        assert_eq!(bed.height(), 85.0);
        assert!(!bed.is_sterile_mode());
        assert!(!bed.is_procedure_active());
    }

    #[test]
    fn test_adjustments_refused_while_off() {
        let mut bed = Bed::patient();
        bed.set_height(60.0);
        assert_eq!(bed.height(), 55.0);
        bed.raise_height(10.0);
        assert_eq!(bed.height(), 55.0);
        bed.set_temperature(TempMode::Warm);
        assert_eq!(bed.temperature_mode(), TempMode::Neutral);

        bed.power_on();
        bed.set_height(60.0);
        assert_eq!(bed.height(), 60.0);
        bed.set_temperature(TempMode::Warm);
        assert_eq!(bed.temperature_mode(), TempMode::Warm);
    }

    #[test]
    fn test_out_of_range_height_rejected_not_clamped() {
        let mut bed = Bed::patient();
        bed.power_on();
        bed.set_height(200.0);
        assert_eq!(bed.height(), 55.0, "200 cm exceeds the 90 cm max");
        bed.set_height(10.0);
        assert_eq!(bed.height(), 55.0);
    }

    #[test]
    fn test_raise_and_lower_respect_range() {
        let mut bed = Bed::patient();
        bed.power_on();
        bed.raise_height(30.0);
        assert_eq!(bed.height(), 85.0);
        bed.raise_height(30.0); // would reach 115, above 90
        assert_eq!(bed.height(), 85.0);
        bed.lower_height(45.0);
        assert_eq!(bed.height(), 40.0);
        bed.lower_height(1.0); // would reach 39, below 40
        assert_eq!(bed.height(), 40.0);
    }

    #[test]
    fn test_power_cycle_is_idempotent() {
        let mut bed = Bed::patient();
        bed.power_on();
        bed.power_on();
        assert!(bed.is_powered());
        bed.power_off();
        bed.power_off();
        assert!(!bed.is_powered());
    }

    #[test]
    fn test_power_on_activates_lights_and_neutral() {
        let mut bed = Bed::surgical();
        bed.power_on();
        assert!(bed.lights().is_active());
        assert_eq!(bed.temperature_mode(), TempMode::Neutral);
        bed.power_off();
        assert!(!bed.lights().is_active());
    }

    #[test]
    fn test_emergency_lighting_until_cleared() {
        let mut bed = Bed::patient();
        bed.trigger_emergency();
        assert!(bed.lights().is_emergency_mode());
        bed.clear_emergency();
        assert!(!bed.lights().is_emergency_mode());
    }

    #[test]
    fn test_temperature_id_wrapper() {
        let mut bed = Bed::patient();
        bed.power_on();
        bed.set_temperature_id(wardsim_logic::constants::temperature_modes::COLD);
        assert_eq!(bed.temperature_celsius(), 18.0);
        bed.set_temperature_id(200); // unknown id resolves to neutral
        assert_eq!(bed.temperature_celsius(), 22.0);
    }

    #[test]
    fn test_occupancy_drives_lighting() {
        let mut bed = Bed::patient();
        bed.power_on();
        bed.simulate_patient_entry();
        assert!(bed.is_occupied());
        assert_eq!(bed.lights().brightness(), 0.3);
        assert_eq!(bed.lights().color(), LightColor::WARM_WHITE);

        bed.simulate_patient_exit();
        assert!(!bed.is_occupied());
        assert_eq!(bed.lights().brightness(), 0.5);
        assert_eq!(bed.lights().color(), LightColor::WHITE);
        assert_eq!(bed.height(), 55.0);
    }

    #[test]
    fn test_comfort_mode_applies_when_occupied() {
        let mut bed = Bed::patient();
        bed.power_on();
        bed.enable_comfort_mode();
        assert!(bed.is_comfort_mode_enabled());
        assert_eq!(bed.height(), 55.0, "no adjustment until occupied");

        bed.simulate_patient_entry();
        assert_eq!(bed.height(), 50.0);
        assert_eq!(bed.temperature_mode(), TempMode::Warm);

        bed.disable_comfort_mode();
        assert!(!bed.is_comfort_mode_enabled());
        assert_eq!(bed.height(), 55.0);
        assert_eq!(bed.temperature_mode(), TempMode::Neutral);
    }

    #[test]
    fn test_patient_ops_noop_on_surgical_bed() {
        let mut bed = Bed::surgical();
        bed.power_on();
        bed.simulate_patient_entry();
        assert!(!bed.is_occupied());
        bed.enable_comfort_mode();
        assert!(!bed.is_comfort_mode_enabled());
    }

    #[test]
    fn test_surgical_ops_noop_on_patient_bed() {
        let mut bed = Bed::patient();
        bed.power_on();
        bed.enter_sterile_mode();
        assert!(!bed.is_sterile_mode());
        bed.start_procedure("general_surgery");
        assert!(!bed.is_procedure_active());
        bed.set_to_surgical_height();
        assert_eq!(bed.height(), 55.0);
    }

    #[test]
    fn test_sterile_mode_requires_power() {
        let mut bed = Bed::surgical();
        bed.enter_sterile_mode();
        assert!(!bed.is_sterile_mode());

        bed.power_on();
        bed.enter_sterile_mode();
        assert!(bed.is_sterile_mode());
        assert_eq!(bed.lights().brightness(), 0.9);
        assert_eq!(bed.temperature_mode(), TempMode::Cold);

        bed.exit_sterile_mode();
        assert!(!bed.is_sterile_mode());
        assert_eq!(bed.lights().brightness(), 0.5);
    }

    #[test]
    fn test_procedure_lifecycle() {
        let mut bed = Bed::surgical();
        bed.power_on();
        bed.enter_sterile_mode();
        bed.start_procedure("brain_surgery");

        assert!(bed.is_procedure_active());
        assert_eq!(bed.current_procedure(), Some("brain_surgery"));
        assert_eq!(bed.height(), 110.0);
        assert_eq!(bed.temperature_mode(), TempMode::Cold);
        assert!(bed.scanner_device().unwrap().is_monitoring());

        bed.end_procedure();
        assert!(!bed.is_procedure_active());
        assert_eq!(bed.height(), 85.0);
        assert!(!bed.is_sterile_mode());
        assert!(!bed.scanner_device().unwrap().is_monitoring());
    }

    #[test]
    fn test_procedure_heights_by_kind() {
        for (procedure, expected) in [
            ("cardiac_surgery", 95.0),
            ("general_surgery", 100.0),
            ("appendectomy", 100.0), // unknown → standard work height
        ] {
            let mut bed = Bed::surgical();
            bed.power_on();
            bed.start_procedure(procedure);
            assert_eq!(bed.height(), expected, "procedure {}", procedure);
            bed.end_procedure();
        }
    }

    #[test]
    fn test_end_without_procedure_is_noop() {
        let mut bed = Bed::surgical();
        bed.power_on();
        bed.set_height(95.0);
        bed.end_procedure();
        assert_eq!(bed.height(), 95.0, "no reset when nothing was active");
    }

    #[test]
    fn test_power_off_ends_procedure() {
        let mut bed = Bed::surgical();
        bed.power_on();
        bed.start_procedure("general_surgery");
        bed.power_off();
        assert!(!bed.is_procedure_active());
        assert!(!bed.is_sterile_mode());
        assert!(!bed.scanner_device().unwrap().is_monitoring());
    }

    #[test]
    fn test_positioning_presets() {
        let mut bed = Bed::surgical();
        bed.power_on();
        bed.set_to_transfer_height();
        assert_eq!(bed.height(), 75.0);
        bed.position_for_procedure();
        assert_eq!(bed.height(), 100.0);
        assert_eq!(bed.scanner_device().unwrap().swivel_angle(), 0.0);

        bed.position_for_patient_access();
        assert_eq!(bed.height(), 70.0);
        assert_eq!(bed.scanner_device().unwrap().swivel_angle(), 90.0);
    }

    #[test]
    fn test_surgical_emergency_protocols() {
        let mut bed = Bed::surgical();
        bed.power_on();
        bed.trigger_surgical_emergency();
        assert!(bed.lights().is_emergency_mode());
        assert_eq!(bed.height(), 70.0);
        assert!(bed.scanner_device().unwrap().is_monitoring());
    }

    #[test]
    fn test_vitals_tick_through_bed() {
        let mut rng = SimRng::seeded(21);
        let mut bed = Bed::surgical();
        bed.power_on();
        bed.start_vital_monitoring();
        for _ in 0..50 {
            bed.update_patient_vitals(&mut rng);
        }
        assert!(bed.scanner_device().unwrap().last_vitals().in_envelope());
    }

    #[test]
    fn test_maintenance_report_sequence() {
        let mut bed = Bed::patient();
        bed.power_on();
        let report = bed.perform_maintenance_check();
        let names: Vec<_> = report.steps.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "power system",
                "height mechanism",
                "light system",
                "temperature system",
                "occupancy sensor",
                "comfort mode",
            ]
        );
        assert!(report.all_ok());
    }

    #[test]
    fn test_maintenance_reports_power_off() {
        let bed = Bed::surgical();
        let report = bed.perform_maintenance_check();
        assert!(!report.all_ok(), "power step reports OFF");
        assert_eq!(report.steps[0].name, "power system");
        assert!(!report.steps[0].ok);
        // The sequence still ran to the end.
        assert_eq!(report.steps.last().unwrap().name, "positioning system");
    }
}
