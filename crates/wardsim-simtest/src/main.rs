//! Wardsim Headless Validation Harness
//!
//! Exercises every prop subsystem without a host engine: factory
//! resolution, bed power/height rules, emergency lighting fan-out,
//! climate setpoints, the scanner device, vitals drift, procedure flow,
//! and window furnishings. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p wardsim-simtest
//!   cargo run -p wardsim-simtest -- --verbose

use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use wardsim_core::bed::Bed;
use wardsim_core::devices::light_strip::EmergencyListener;
use wardsim_core::devices::scanner::DEFAULT_SWIVEL_STEP_DEG;
use wardsim_core::factory::{BedFactory, FactoryError};
use wardsim_core::rng::SimRng;
use wardsim_core::window::{ClosedCurtain, Opaque, OpenCurtain, Transparent, Window};
use wardsim_logic::catalog::{self, BedType, FallbackPolicy};
use wardsim_logic::scans::ScanKind;
use wardsim_logic::thermal::TempMode;
use wardsim_logic::vitals::VitalSigns;

// ── Ward manifest (the fixture a level would be dressed from) ───────────
const MANIFEST_JSON: &str = include_str!("../../../data/ward_manifest.json");

#[derive(Debug, Deserialize)]
struct WardSpec {
    room: String,
    bed_type: String,
    beds: u32,
    windows: u32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Wardsim Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Ward manifest resolves end to end
    results.extend(validate_ward_manifest(verbose));

    // 2. Factory lookup and both fallback policies
    results.extend(validate_factory(verbose));

    // 3. Bed power gating and height rules
    results.extend(validate_bed_power_height(verbose));

    // 4. Emergency lighting and listener fan-out
    results.extend(validate_lighting(verbose));

    // 5. Climate setpoints
    results.extend(validate_thermal(verbose));

    // 6. Scanner device sweep
    results.extend(validate_scanner(verbose));

    // 7. Vitals drift envelope
    results.extend(validate_vitals(verbose));

    // 8. Surgical procedure flow
    results.extend(validate_procedure_flow(verbose));

    // 9. Window furnishings
    results.extend(validate_windows(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Ward manifest ────────────────────────────────────────────────────

fn validate_ward_manifest(_verbose: bool) -> Vec<TestResult> {
    println!("--- Ward Manifest ---");
    let mut results = Vec::new();

    let manifest: Vec<WardSpec> = match serde_json::from_str(MANIFEST_JSON) {
        Ok(m) => m,
        Err(e) => {
            results.push(check(
                "manifest_parse",
                false,
                format!("JSON parse error: {}", e),
            ));
            return results;
        }
    };

    results.push(check(
        "manifest_not_empty",
        !manifest.is_empty(),
        format!("{} rooms loaded", manifest.len()),
    ));

    let bad_counts: Vec<_> = manifest.iter().filter(|w| w.beds == 0).collect();
    results.push(check(
        "manifest_positive_bed_counts",
        bad_counts.is_empty(),
        format!("{} rooms with zero beds", bad_counts.len()),
    ));

    // Every manifest name must resolve without touching the fallback.
    let unresolved: Vec<_> = manifest
        .iter()
        .filter(|w| catalog::parse_name(&w.bed_type).is_none())
        .map(|w| w.room.as_str())
        .collect();
    results.push(check(
        "manifest_names_resolve",
        unresolved.is_empty(),
        if unresolved.is_empty() {
            "all bed type names resolve".to_string()
        } else {
            format!("unresolved in: {}", unresolved.join(", "))
        },
    ));

    // Dress the whole ward and count what came out.
    let factory = BedFactory::new(FallbackPolicy::Reject);
    let mut patient = 0u32;
    let mut surgical = 0u32;
    let mut windows = 0u32;
    for spec in &manifest {
        for _ in 0..spec.beds {
            match factory.create_from_name(&spec.bed_type) {
                Ok(bed) if bed.bed_type() == BedType::Patient => patient += 1,
                Ok(_) => surgical += 1,
                Err(_) => {}
            }
        }
        for _ in 0..spec.windows {
            let mut window = Window::new();
            window.set_shade(Box::new(Transparent));
            window.set_curtain(Box::new(OpenCurtain));
            windows += 1;
        }
    }
    let total_beds: u32 = manifest.iter().map(|w| w.beds).sum();
    results.push(check(
        "manifest_ward_dressed",
        patient + surgical == total_beds,
        format!(
            "{} patient + {} surgical beds, {} windows",
            patient, surgical, windows
        ),
    ));

    results
}

// ── 2. Factory ──────────────────────────────────────────────────────────

fn validate_factory(_verbose: bool) -> Vec<TestResult> {
    println!("--- Bed Factory ---");
    let mut results = Vec::new();

    let factory = BedFactory::default();
    let all_surgical = ["SURGICAL", "surgical", "surgery"]
        .iter()
        .all(|name| match factory.create_from_name(name) {
            Ok(bed) => bed.class_name() == "SurgicalBed",
            Err(_) => false,
        });
    results.push(check(
        "factory_alias_tolerant",
        all_surgical,
        "SURGICAL / surgical / surgery all build a SurgicalBed",
    ));

    let defaulted = factory.create_from_name("recliner");
    results.push(check(
        "factory_default_policy",
        matches!(&defaulted, Ok(bed) if bed.class_name() == "PatientBed"),
        "unknown name substitutes a PatientBed under DefaultToPatient",
    ));

    let strict = BedFactory::new(FallbackPolicy::Reject);
    let rejected = strict.create_from_name("recliner");
    results.push(check(
        "factory_reject_policy",
        matches!(rejected, Err(FactoryError::UnknownBedType(ref name)) if name == "recliner"),
        "unknown name errors under Reject",
    ));

    results.push(check(
        "factory_id_lookup",
        strict.create_from_id(0).is_ok()
            && strict.create_from_id(1).is_ok()
            && strict.create_from_id(7).is_err(),
        "ids 0/1 build, 7 errors under Reject",
    ));

    results.push(check(
        "factory_catalog_listing",
        BedFactory::available_bed_types() == vec!["patient_bed", "surgical_bed"],
        "catalog lists both models",
    ));

    results.push(check(
        "factory_display_names",
        catalog::bed_type_name(0) == "Patient Bed"
            && catalog::bed_type_name(1) == "Surgical Bed"
            && catalog::bed_type_name(9) == "Unknown Bed Type",
        "display names cover unknown ids",
    ));

    results
}

// ── 3. Power & height ───────────────────────────────────────────────────

fn validate_bed_power_height(_verbose: bool) -> Vec<TestResult> {
    println!("--- Power & Height ---");
    let mut results = Vec::new();

    let mut bed = Bed::patient();
    bed.set_height(80.0);
    results.push(check(
        "height_refused_while_off",
        bed.height() == 55.0,
        format!("unpowered set_height left {} cm", bed.height()),
    ));

    bed.power_on();
    bed.set_height(200.0);
    results.push(check(
        "height_out_of_range_rejected",
        bed.height() == 55.0,
        "200 cm exceeds the 90 cm max; height unchanged",
    ));

    bed.set_height(80.0);
    results.push(check(
        "height_in_range_accepted",
        bed.height() == 80.0,
        "80 cm accepted after power on",
    ));

    bed.power_off();
    bed.raise_height(5.0);
    bed.set_temperature(TempMode::Warm);
    results.push(check(
        "adjustments_inert_after_power_off",
        bed.height() == 80.0 && bed.temperature_mode() == TempMode::Neutral,
        "height and setpoint unchanged while off",
    ));

    let mut surgical = Bed::surgical();
    surgical.power_on();
    surgical.set_height(59.0);
    surgical.set_height(121.0);
    results.push(check(
        "surgical_range_enforced",
        surgical.height() == 85.0,
        "surgical range is 60-120 cm",
    ));

    results
}

// ── 4. Lighting ─────────────────────────────────────────────────────────

struct OrderProbe {
    seen: Rc<RefCell<Vec<&'static str>>>,
    tag: &'static str,
}

impl EmergencyListener for OrderProbe {
    fn emergency_activated(&mut self) {
        self.seen.borrow_mut().push(self.tag);
    }
    fn emergency_cleared(&mut self) {}
}

fn validate_lighting(_verbose: bool) -> Vec<TestResult> {
    println!("--- Emergency Lighting ---");
    let mut results = Vec::new();

    let mut bed = Bed::patient();
    bed.trigger_emergency();
    results.push(check(
        "emergency_mode_latches",
        bed.lights().is_emergency_mode(),
        "emergency holds until explicitly cleared",
    ));

    bed.set_light_brightness(0.1);
    results.push(check(
        "emergency_controls_locked",
        bed.lights().brightness() == 1.0,
        "brightness locked to maximum in emergency",
    ));

    bed.clear_emergency();
    results.push(check(
        "emergency_clears",
        !bed.lights().is_emergency_mode(),
        "normal behavior reinstalled",
    ));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut bed = Bed::patient();
    bed.lights_mut().subscribe(Box::new(OrderProbe {
        seen: seen.clone(),
        tag: "nurse_station",
    }));
    let ward_id = bed.lights_mut().subscribe(Box::new(OrderProbe {
        seen: seen.clone(),
        tag: "ward_panel",
    }));
    bed.trigger_emergency();
    let first_round = seen.borrow().clone();

    bed.clear_emergency();
    bed.lights_mut().unsubscribe(ward_id);
    seen.borrow_mut().clear();
    bed.trigger_emergency();
    let second_round = seen.borrow().clone();

    results.push(check(
        "listeners_in_registration_order",
        first_round == vec!["nurse_station", "ward_panel"],
        format!("order: {:?}", first_round),
    ));
    results.push(check(
        "unsubscribed_listener_silent",
        second_round == vec!["nurse_station"],
        format!("after unsubscribe: {:?}", second_round),
    ));

    results
}

// ── 5. Thermal ──────────────────────────────────────────────────────────

fn validate_thermal(_verbose: bool) -> Vec<TestResult> {
    println!("--- Climate Setpoints ---");
    let mut results = Vec::new();

    let fixed = TempMode::all()
        .iter()
        .map(|m| m.celsius())
        .collect::<Vec<_>>();
    results.push(check(
        "thermal_fixed_values",
        fixed == vec![18.0, 22.0, 26.0],
        "cold/neutral/warm map to 18/22/26 °C",
    ));

    let mut bed = Bed::patient();
    bed.power_on();
    bed.set_temperature_id(wardsim_logic::constants::temperature_modes::WARM);
    results.push(check(
        "thermal_id_binding",
        bed.temperature_celsius() == 26.0,
        "binding id drives the setpoint",
    ));

    results
}

// ── 6. Scanner device ───────────────────────────────────────────────────

fn validate_scanner(_verbose: bool) -> Vec<TestResult> {
    println!("--- Scanner Device ---");
    let mut results = Vec::new();

    let mut bed = Bed::surgical();
    bed.power_on();

    for &kind in ScanKind::all() {
        bed.start_scan(kind);
    }
    let device = bed.scanner_device().expect("surgical bed has a device");
    let all_stored = ScanKind::all()
        .iter()
        .all(|&k| device.stored_scan(k).is_some());
    results.push(check(
        "scanner_all_kinds_stored",
        all_stored,
        "full_body/brain/heart/lungs scans stored by kind",
    ));

    let brain = device.stored_scan(ScanKind::Brain).unwrap();
    results.push(check(
        "scanner_payload_format",
        brain.image_data == "scan_image_brain_data" && brain.is_valid,
        format!("payload {:?}, quality {:.2}", brain.image_data, brain.quality),
    ));

    results.push(check(
        "scanner_idle_after_scan",
        !device.is_scanner_busy(),
        "pipeline returns to idle synchronously",
    ));

    bed.swivel_device_left(500.0);
    let left = bed.scanner_device().unwrap().swivel_angle();
    bed.swivel_device_right(500.0);
    let right = bed.scanner_device().unwrap().swivel_angle();
    bed.center_device();
    let centered = bed.scanner_device().unwrap().swivel_angle();
    results.push(check(
        "scanner_swivel_clamped",
        left == -90.0 && right == 90.0 && centered == 0.0,
        format!("stops at ±90°, centered back to {}°", centered),
    ));

    bed.swivel_device_right(DEFAULT_SWIVEL_STEP_DEG);
    results.push(check(
        "scanner_swivel_default_step",
        bed.scanner_device().unwrap().swivel_angle() == 45.0,
        "one default step swings 45°",
    ));

    results
}

// ── 7. Vitals ───────────────────────────────────────────────────────────

fn validate_vitals(_verbose: bool) -> Vec<TestResult> {
    println!("--- Vitals Drift ---");
    let mut results = Vec::new();

    let mut rng = SimRng::seeded(1234);
    let mut vitals = VitalSigns::default();
    let mut escaped = false;
    for _ in 0..10_000 {
        vitals.perturb(&mut rng);
        if !vitals.in_envelope() {
            escaped = true;
            break;
        }
    }
    results.push(check(
        "vitals_envelope_sweep",
        !escaped,
        "10k ticks: HR in [60,100], O2 in [95,100], temp in [36.5,37.5]",
    ));

    let mut a = VitalSigns::default();
    let mut b = VitalSigns::default();
    let mut rng_a = SimRng::seeded(77);
    let mut rng_b = SimRng::seeded(77);
    for _ in 0..500 {
        a.perturb(&mut rng_a);
        b.perturb(&mut rng_b);
    }
    results.push(check(
        "vitals_deterministic_replay",
        a == b,
        "same seed replays the same drift",
    ));

    let mut bed = Bed::surgical();
    bed.power_on();
    bed.start_vital_monitoring();
    for _ in 0..100 {
        bed.update_patient_vitals(&mut rng);
    }
    let last = bed.scanner_device().unwrap().last_vitals();
    results.push(check(
        "vitals_through_device",
        last.in_envelope(),
        format!("last snapshot HR={:.0} O2={:.1}%", last.heart_rate_bpm, last.oxygen_pct),
    ));

    results
}

// ── 8. Procedure flow ───────────────────────────────────────────────────

fn validate_procedure_flow(_verbose: bool) -> Vec<TestResult> {
    println!("--- Procedure Flow ---");
    let mut results = Vec::new();

    let mut bed = Bed::surgical();
    bed.enter_sterile_mode();
    results.push(check(
        "sterile_requires_power",
        !bed.is_sterile_mode(),
        "sterile mode refused while off",
    ));

    bed.power_on();
    bed.enter_sterile_mode();
    results.push(check(
        "sterile_environment",
        bed.is_sterile_mode()
            && bed.temperature_mode() == TempMode::Cold
            && bed.lights().brightness() == 0.9,
        "cold setpoint, 0.9 brightness",
    ));

    bed.start_procedure("brain_surgery");
    results.push(check(
        "procedure_brain_height",
        bed.is_procedure_active() && bed.height() == 110.0,
        format!("brain surgery at {} cm", bed.height()),
    ));
    results.push(check(
        "procedure_monitoring_on",
        bed.scanner_device().unwrap().is_monitoring(),
        "vitals monitoring runs during the procedure",
    ));

    bed.end_procedure();
    results.push(check(
        "procedure_teardown",
        !bed.is_procedure_active()
            && !bed.is_sterile_mode()
            && bed.height() == 85.0
            && !bed.scanner_device().unwrap().is_monitoring(),
        "height restored, sterile exited, monitoring stopped",
    ));

    let mut ward_bed = Bed::patient();
    ward_bed.power_on();
    ward_bed.start_procedure("general_surgery");
    results.push(check(
        "procedure_needs_surgical_bed",
        !ward_bed.is_procedure_active(),
        "patient bed refuses procedures",
    ));

    results
}

// ── 9. Windows ──────────────────────────────────────────────────────────

fn validate_windows(_verbose: bool) -> Vec<TestResult> {
    println!("--- Window Furnishings ---");
    let mut results = Vec::new();

    let mut window = Window::new();
    results.push(check(
        "window_starts_bare",
        window.shade_name().is_none() && window.curtain_name().is_none(),
        "no state installed at construction",
    ));

    window.set_shade(Box::new(Opaque));
    window.set_shade(Box::new(Transparent));
    window.apply_shade();
    results.push(check(
        "window_shade_swap",
        window.shade_name() == Some("transparent"),
        "latest installed shade wins",
    ));

    window.set_curtain(Box::new(OpenCurtain));
    window.set_curtain(Box::new(ClosedCurtain));
    window.operate_curtain();
    results.push(check(
        "window_curtain_swap",
        window.curtain_name() == Some("closed"),
        "latest installed curtain wins",
    ));

    results
}
