// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{FacingMode, PaperSize, TextDirection};

/// Persistent application settings.
///
/// Only settings live here; the product list itself is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// LTR (English) or RTL (Hebrew) layout for the UI and exported PDF.
    pub direction: TextDirection,
    /// Paper size of the exported product list.
    pub paper_size: PaperSize,
    /// TrueType font embedded in the PDF for non-Latin text. Required for RTL.
    pub font_path: Option<PathBuf>,
    /// Camera the scanner asks for.
    pub facing_mode: FacingMode,
    /// Decoder frame rate.
    pub scan_fps: u32,
    /// Side of the square decode region, in pixels.
    pub scan_box_px: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            direction: TextDirection::Ltr,
            paper_size: PaperSize::A4,
            font_path: None,
            facing_mode: FacingMode::Environment,
            scan_fps: 10,
            scan_box_px: 250,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "direction": "Rtl" }"#).unwrap();
        assert_eq!(config.direction, TextDirection::Rtl);
        assert_eq!(config.scan_fps, 10);
        assert_eq!(config.paper_size, PaperSize::A4);
        assert!(config.font_path.is_none());
    }
}
