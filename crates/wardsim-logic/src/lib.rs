//! Pure simulation logic for wardsim.
//!
//! This crate contains all medical-prop logic that is independent of any
//! device object, engine, or runtime. Functions take plain data and return
//! results, making them unit-testable and portable between the device layer
//! (`wardsim-core`), the headless harness, and any future host binding.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Bed types, free-text alias resolution, fallback policy |
//! | [`constants`] | Temperature-mode and bed-type ids for host bindings (u8) |
//! | [`height`] | Per-role height ranges, presets, reject-don't-clamp rule |
//! | [`lighting`] | RGB color value type, named presets, brightness clamp |
//! | [`scans`] | Scan kinds, wire names, payload format, progress steps |
//! | [`thermal`] | Three-setpoint temperature modes with fixed Celsius values |
//! | [`vitals`] | Vital-sign baselines, clamped perturbation, alert tiers |

pub mod catalog;
pub mod constants;
pub mod height;
pub mod lighting;
pub mod scans;
pub mod thermal;
pub mod vitals;
