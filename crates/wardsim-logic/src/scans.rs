//! Scan catalog — kinds, wire names, payload format, progress steps.

use serde::{Deserialize, Serialize};

/// Body regions the diagnostic scanner images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanKind {
    FullBody,
    Brain,
    Heart,
    Lungs,
}

impl ScanKind {
    /// Stable name used in payloads and stored-scan keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullBody => "full_body",
            Self::Brain => "brain",
            Self::Heart => "heart",
            Self::Lungs => "lungs",
        }
    }

    pub fn all() -> &'static [ScanKind] {
        &[Self::FullBody, Self::Brain, Self::Heart, Self::Lungs]
    }
}

/// Fixed quality score the simulated imaging pipeline reports.
pub const SCAN_QUALITY: f32 = 0.95;

/// Progress checkpoints logged while a scan runs, in percent.
pub const SCAN_PROGRESS_STEPS: &[u32] = &[0, 20, 40, 60, 80, 100];

/// Result of one completed scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanData {
    pub kind: ScanKind,
    /// Opaque stand-in for the image payload.
    pub image_data: String,
    pub quality: f32,
    pub is_valid: bool,
}

impl ScanData {
    /// A completed scan of `kind` with the simulated payload attached.
    pub fn completed(kind: ScanKind) -> Self {
        Self {
            kind,
            image_data: format!("scan_image_{}_data", kind.name()),
            quality: SCAN_QUALITY,
            is_valid: true,
        }
    }
}
