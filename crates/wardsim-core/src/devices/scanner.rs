//! Diagnostic scanner device — imaging state machine plus vitals monitor.
//!
//! The imaging pipeline is simulated: one `start_scan` call steps through
//! the whole progress sequence synchronously and returns the finished
//! data. The intermediate states exist so a stop request mid-pipeline is
//! well-defined, and so the state is inspectable from tests.

use crate::observer::{Listeners, SubscriptionId};
use log::{info, warn};
use rand::Rng;
use std::collections::HashMap;
use wardsim_logic::scans::{ScanData, ScanKind, SCAN_PROGRESS_STEPS};
use wardsim_logic::vitals::{VitalAlert, VitalSigns};

/// Hard swivel stop of the boom arm, degrees from center.
const SWIVEL_LIMIT_DEG: f32 = 90.0;

/// Swivel step used when the caller doesn't specify an angle.
pub const DEFAULT_SWIVEL_STEP_DEG: f32 = 45.0;

/// Imaging pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Processing,
    Complete,
}

/// The imaging half of the device.
#[derive(Debug)]
pub struct Scanner {
    state: ScanState,
    kind: ScanKind,
    progress: f32,
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            kind: ScanKind::FullBody,
            progress: 0.0,
        }
    }

    /// Run a scan to completion. Refused (returns `None`) unless idle.
    pub fn start_scan(&mut self, kind: ScanKind) -> Option<ScanData> {
        if self.state != ScanState::Idle {
            warn!("Cannot start scan - scanner busy");
            return None;
        }

        self.kind = kind;
        self.state = ScanState::Scanning;
        self.progress = 0.0;
        info!("Starting {} scan...", kind.name());

        self.state = ScanState::Processing;
        for &step in SCAN_PROGRESS_STEPS {
            self.progress = step as f32 / 100.0;
            info!("Scan progress: {}%", step);
        }

        let data = ScanData::completed(kind);
        self.state = ScanState::Complete;
        info!("Scan completed successfully");

        self.state = ScanState::Idle;
        Some(data)
    }

    /// Abort a scan in flight. A no-op outside Scanning/Processing.
    pub fn stop_scan(&mut self) {
        if matches!(self.state, ScanState::Scanning | ScanState::Processing) {
            self.state = ScanState::Idle;
            self.progress = 0.0;
            info!("Scan stopped");
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn current_kind(&self) -> ScanKind {
        self.kind
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// The vitals half of the device.
#[derive(Debug)]
pub struct VitalsMonitor {
    vitals: VitalSigns,
    monitoring: bool,
}

impl VitalsMonitor {
    pub fn new() -> Self {
        Self {
            vitals: VitalSigns::default(),
            monitoring: false,
        }
    }

    /// Begin monitoring. On the off→on transition the current snapshot is
    /// published (returned); already-on is a silent no-op.
    pub fn start_monitoring(&mut self) -> Option<VitalSigns> {
        if self.monitoring {
            return None;
        }
        self.monitoring = true;
        info!("Vital signs monitoring started");
        Some(self.publish())
    }

    pub fn stop_monitoring(&mut self) {
        if self.monitoring {
            self.monitoring = false;
            info!("Vital signs monitoring stopped");
        }
    }

    /// One simulated tick: perturb within the physiological envelope and
    /// publish. Returns `None` while monitoring is off.
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<VitalSigns> {
        if !self.monitoring {
            return None;
        }
        self.vitals.perturb(rng);
        Some(self.publish())
    }

    fn publish(&self) -> VitalSigns {
        info!(
            "Vitals: HR={:.0} O2={:.1}% BP={:.0} Temp={:.1}°C",
            self.vitals.heart_rate_bpm,
            self.vitals.oxygen_pct,
            self.vitals.blood_pressure_mmhg,
            self.vitals.temperature_c
        );
        self.vitals
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    pub fn current_vitals(&self) -> VitalSigns {
        self.vitals
    }
}

impl Default for VitalsMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Notified when the composite device produces new data.
pub trait DeviceListener {
    fn scan_completed(&mut self, data: &ScanData);
    fn vitals_updated(&mut self, vitals: &VitalSigns);
}

/// Scanner and vitals monitor combined on one swiveling boom arm.
pub struct ScannerDevice {
    scanner: Scanner,
    monitor: VitalsMonitor,
    swivel_deg: f32,
    stored_scans: HashMap<ScanKind, ScanData>,
    last_vitals: VitalSigns,
    listeners: Listeners<dyn DeviceListener>,
}

impl ScannerDevice {
    pub fn new() -> Self {
        info!("Medical scanner device initialized");
        Self {
            scanner: Scanner::new(),
            monitor: VitalsMonitor::new(),
            swivel_deg: 0.0,
            stored_scans: HashMap::new(),
            last_vitals: VitalSigns::default(),
            listeners: Listeners::new(),
        }
    }

    /// Run a scan; on success the result is stored by kind (latest wins)
    /// and fanned out to listeners.
    pub fn start_scan(&mut self, kind: ScanKind) -> Option<ScanData> {
        let data = self.scanner.start_scan(kind)?;
        info!("Scan completed: {}", data.kind.name());
        self.stored_scans.insert(kind, data.clone());
        self.listeners.notify(|l| l.scan_completed(&data));
        Some(data)
    }

    pub fn stop_scan(&mut self) {
        self.scanner.stop_scan();
    }

    pub fn start_vital_monitoring(&mut self) {
        if let Some(vitals) = self.monitor.start_monitoring() {
            self.handle_vitals(vitals);
        }
    }

    pub fn stop_vital_monitoring(&mut self) {
        self.monitor.stop_monitoring();
    }

    /// One vitals tick using the injected random source. Returns the new
    /// snapshot, or `None` while monitoring is off.
    pub fn update_vitals<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<VitalSigns> {
        let vitals = self.monitor.sample(rng)?;
        self.handle_vitals(vitals);
        Some(vitals)
    }

    fn handle_vitals(&mut self, vitals: VitalSigns) {
        self.last_vitals = vitals;
        match vitals.alert() {
            VitalAlert::Critical => {
                warn!("CRITICAL: patient requires immediate attention");
            }
            VitalAlert::Warning => {
                warn!("WARNING: abnormal temperature");
            }
            VitalAlert::Normal => {}
        }
        self.listeners.notify(|l| l.vitals_updated(&vitals));
    }

    /// Swivel the boom arm toward the left stop.
    pub fn swivel_left(&mut self, angle: f32) {
        self.swivel_deg = (self.swivel_deg - angle).max(-SWIVEL_LIMIT_DEG);
        info!("Device swiveled left to {:.0}°", self.swivel_deg);
    }

    /// Swivel the boom arm toward the right stop.
    pub fn swivel_right(&mut self, angle: f32) {
        self.swivel_deg = (self.swivel_deg + angle).min(SWIVEL_LIMIT_DEG);
        info!("Device swiveled right to {:.0}°", self.swivel_deg);
    }

    pub fn center(&mut self) {
        self.swivel_deg = 0.0;
        info!("Device centered");
    }

    pub fn swivel_angle(&self) -> f32 {
        self.swivel_deg
    }

    pub fn is_scanner_busy(&self) -> bool {
        self.scanner.state() != ScanState::Idle
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_monitoring()
    }

    pub fn last_vitals(&self) -> VitalSigns {
        self.last_vitals
    }

    pub fn stored_scan(&self, kind: ScanKind) -> Option<&ScanData> {
        self.stored_scans.get(&kind)
    }

    pub fn subscribe(&mut self, listener: Box<dyn DeviceListener>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl Default for ScannerDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScannerDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerDevice")
            .field("scanner", &self.scanner)
            .field("monitor", &self.monitor)
            .field("swivel_deg", &self.swivel_deg)
            .field("stored_scans", &self.stored_scans.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Station {
        scans: Vec<ScanKind>,
        vitals_count: u32,
    }

    struct StationListener(Rc<RefCell<Station>>);

    impl DeviceListener for StationListener {
        fn scan_completed(&mut self, data: &ScanData) {
            self.0.borrow_mut().scans.push(data.kind);
        }
        fn vitals_updated(&mut self, _vitals: &VitalSigns) {
            self.0.borrow_mut().vitals_count += 1;
        }
    }

    #[test]
    fn test_scan_runs_to_completion() {
        let mut scanner = Scanner::new();
        let data = scanner.start_scan(ScanKind::Brain).unwrap();
        assert_eq!(data.kind, ScanKind::Brain);
        assert_eq!(data.image_data, "scan_image_brain_data");
        assert_eq!(scanner.state(), ScanState::Idle);
        assert_eq!(scanner.progress(), 1.0);
    }

    #[test]
    fn test_stop_scan_outside_pipeline_is_noop() {
        let mut scanner = Scanner::new();
        scanner.start_scan(ScanKind::Heart);
        let progress = scanner.progress();
        scanner.stop_scan();
        assert_eq!(scanner.progress(), progress);
        assert_eq!(scanner.state(), ScanState::Idle);
    }

    #[test]
    fn test_monitor_gates_sampling() {
        let mut rng = SimRng::seeded(3);
        let mut monitor = VitalsMonitor::new();
        assert!(monitor.sample(&mut rng).is_none());

        assert!(monitor.start_monitoring().is_some());
        assert!(monitor.start_monitoring().is_none(), "already on");
        assert!(monitor.sample(&mut rng).is_some());

        monitor.stop_monitoring();
        assert!(monitor.sample(&mut rng).is_none());
    }

    #[test]
    fn test_device_stores_latest_scan_per_kind() {
        let mut device = ScannerDevice::new();
        device.start_scan(ScanKind::FullBody);
        device.start_scan(ScanKind::Lungs);
        assert!(device.stored_scan(ScanKind::FullBody).is_some());
        assert!(device.stored_scan(ScanKind::Lungs).is_some());
        assert!(device.stored_scan(ScanKind::Brain).is_none());
    }

    #[test]
    fn test_device_fans_out_to_listeners() {
        let station = Rc::new(RefCell::new(Station::default()));
        let mut device = ScannerDevice::new();
        device.subscribe(Box::new(StationListener(station.clone())));

        let mut rng = SimRng::seeded(11);
        device.start_scan(ScanKind::Heart);
        device.start_vital_monitoring();
        device.update_vitals(&mut rng);
        device.update_vitals(&mut rng);

        let station = station.borrow();
        assert_eq!(station.scans, vec![ScanKind::Heart]);
        // One snapshot at monitoring start plus two ticks.
        assert_eq!(station.vitals_count, 3);
    }

    #[test]
    fn test_vitals_stay_in_envelope_through_device() {
        let mut rng = SimRng::seeded(5);
        let mut device = ScannerDevice::new();
        device.start_vital_monitoring();
        for _ in 0..1000 {
            let vitals = device.update_vitals(&mut rng).unwrap();
            assert!(vitals.in_envelope());
        }
        assert!(device.last_vitals().in_envelope());
    }

    #[test]
    fn test_swivel_clamped_to_stops() {
        let mut device = ScannerDevice::new();
        device.swivel_left(500.0);
        assert_eq!(device.swivel_angle(), -90.0);
        device.swivel_right(45.0);
        assert_eq!(device.swivel_angle(), -45.0);
        device.swivel_right(500.0);
        assert_eq!(device.swivel_angle(), 90.0);
        device.center();
        assert_eq!(device.swivel_angle(), 0.0);
    }
}
