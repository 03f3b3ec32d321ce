// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: settings persistence, product-list export and the
// platform bridge, in a form the Dioxus UI can call directly.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tally_bridge::traits::{AlertLevel, PlatformBridge};
use tally_core::error::{Result, TallyError};
use tally_core::human_errors::{Severity, humanize_error};
use tally_core::{AppConfig, Product};
use tally_document::{ProductListExporter, write_document};
use tracing::{error, info, warn};

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct can be
/// passed into closures and async blocks without lifetime issues.
#[derive(Clone)]
pub struct AppServices {
    bridge: Arc<dyn PlatformBridge>,
    data_dir: PathBuf,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");
        Self::with_bridge(dir, Arc::from(tally_bridge::platform_bridge()))
    }

    fn with_bridge(data_dir: PathBuf, bridge: Arc<dyn PlatformBridge>) -> Self {
        let config = match load_config(&data_dir) {
            Ok(Some(config)) => config,
            Ok(None) => AppConfig::default(),
            Err(e) => {
                warn!(error = %e, "unreadable settings file, using defaults");
                AppConfig::default()
            }
        };

        Self {
            bridge,
            data_dir,
            config: Arc::new(Mutex::new(config)),
        }
    }

    pub fn platform_name(&self) -> &str {
        self.bridge.platform_name()
    }

    // -- Alerts --------------------------------------------------------------

    /// Show the human-readable form of `err` as a blocking alert.
    pub fn alert_error(&self, err: &TallyError) {
        let human = humanize_error(err);
        let level = match human.severity {
            Severity::Transient => AlertLevel::Warning,
            Severity::ActionRequired | Severity::Permanent => AlertLevel::Error,
        };
        self.bridge.alert("Tally", &human.alert_text(), level);
    }

    // -- Export --------------------------------------------------------------

    /// Render `products` with `config` as a PDF, ask where to save it, and
    /// write it. `config` is the one the UI is showing, saved or not.
    ///
    /// Returns None if the user dismissed the save prompt.
    pub fn export_products(
        &self,
        products: &[Product],
        config: &AppConfig,
    ) -> Result<Option<PathBuf>> {
        let exporter = ProductListExporter::from_config(config)?;
        let document = exporter.export(products, Utc::now())?;

        let Some(path) = self.bridge.prompt_save_path(&document.file_name)? else {
            info!("export cancelled at save prompt");
            return Ok(None);
        };

        let written = write_document(&document, &path)?;
        info!(path = %written.display(), rows = document.rows, "product list exported");
        Ok(Some(written))
    }

    /// Export with the failure policy applied: log, alert, abort.
    pub fn export_or_alert(&self, products: &[Product], config: &AppConfig) -> Option<PathBuf> {
        match self.export_products(products, config) {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "failed to export product list");
                self.alert_error(&e);
                None
            }
        }
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().unwrap_or_else(PoisonError::into_inner) = config.clone();
        persist_config(&self.data_dir, config)
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Result<Option<AppConfig>> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let data = std::fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&data)?))
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}
