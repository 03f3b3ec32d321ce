// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge: native dialogs through `rfd`.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use tally_core::error::Result;

use crate::traits::*;

/// Bridge for Linux, macOS and Windows.
pub struct DesktopBridge;

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeAlert for DesktopBridge {
    fn alert(&self, title: &str, message: &str, level: AlertLevel) {
        let level = match level {
            AlertLevel::Info => MessageLevel::Info,
            AlertLevel::Warning => MessageLevel::Warning,
            AlertLevel::Error => MessageLevel::Error,
        };
        MessageDialog::new()
            .set_title(title)
            .set_description(message)
            .set_level(level)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl NativeSaveFile for DesktopBridge {
    fn prompt_save_path(&self, suggested_name: &str) -> Result<Option<PathBuf>> {
        let path = FileDialog::new()
            .set_file_name(suggested_name)
            .add_filter("PDF", &["pdf"])
            .save_file();
        Ok(path)
    }
}
