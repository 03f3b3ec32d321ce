// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.

use std::path::PathBuf;

use tally_core::error::Result;
use tally_core::{AppConfig, FacingMode, Symbology};
use tokio::sync::mpsc;

/// Unified bridge that groups the host capabilities the UI calls directly.
pub trait PlatformBridge: NativeAlert + NativeSaveFile {
    /// Human-readable platform name (e.g. "Desktop", "Android 14").
    fn platform_name(&self) -> &str;
}

/// How loud an alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// Blocking user notification.
pub trait NativeAlert {
    /// Show a modal message and return once the user dismisses it.
    fn alert(&self, title: &str, message: &str, level: AlertLevel);
}

/// Save prompt for exported files.
pub trait NativeSaveFile {
    /// Ask where to save a file, pre-filled with `suggested_name`.
    /// Returns None if the user cancelled.
    fn prompt_save_path(&self, suggested_name: &str) -> Result<Option<PathBuf>>;
}

// ---------------------------------------------------------------------------
// Camera decoding engine
// ---------------------------------------------------------------------------

/// Where the engine pushes decoded text. Sends after the session has
/// finished fail and must be ignored by the engine.
pub type DecodeSink = mpsc::UnboundedSender<String>;

/// State the engine reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Not started, or stopped.
    NotStarted,
    /// Camera open, decoding frames.
    Scanning,
    /// Camera open, decoding suspended.
    Paused,
    /// The engine cannot tell.
    Unknown,
}

/// What the engine is asked to do when it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Mount point of the camera preview in the UI.
    pub surface_id: String,
    pub facing: FacingMode,
    pub fps: u32,
    /// Side of the square decode region, in pixels.
    pub scan_box_px: u32,
    pub symbologies: Vec<Symbology>,
}

impl ScanConfig {
    /// Element id of the preview surface rendered by the scanner overlay.
    pub const SURFACE_ID: &'static str = "barcode-scanner-surface";

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            facing: config.facing_mode,
            fps: config.scan_fps,
            scan_box_px: config.scan_box_px,
            ..Self::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            surface_id: Self::SURFACE_ID.to_owned(),
            facing: FacingMode::Environment,
            fps: 10,
            scan_box_px: 250,
            symbologies: Symbology::DEFAULT_SET.to_vec(),
        }
    }
}

/// A third-party camera barcode decoder, treated as a black box.
///
/// `start` resolves once the camera is streaming; decodes then arrive on the
/// sink. `clear` must release the camera and the preview surface whatever
/// state the engine is in.
#[allow(async_fn_in_trait)]
pub trait DecodeEngine {
    fn state(&self) -> EngineState;

    async fn start(&mut self, config: &ScanConfig, sink: DecodeSink) -> Result<()>;

    async fn stop(&mut self) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}
