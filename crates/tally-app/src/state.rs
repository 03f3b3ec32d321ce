// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: one reactive signal for the Dioxus UI.

use std::path::Path;

use tally_core::error::DraftError;
use tally_core::labels::Labels;
use tally_core::{AppConfig, DraftField, Inventory, ProductId};

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
///
/// The product list lives only here and is gone when the app closes.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Product records and the add-product draft.
    pub inventory: Inventory,
    /// Application settings.
    pub config: AppConfig,
    /// Whether the scanner overlay is mounted.
    pub scanner_open: bool,
    /// Result of the last export, cleared by the next form edit.
    pub status_message: Option<String>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        Self {
            config: svc.config(),
            ..Self::default()
        }
    }

    pub fn labels(&self) -> Labels {
        Labels::for_direction(self.config.direction)
    }

    pub fn edit_field(&mut self, field: DraftField, value: String) {
        self.status_message = None;
        self.inventory.update_field(field, value);
    }

    pub fn submit_draft(&mut self) -> Result<ProductId, DraftError> {
        self.status_message = None;
        self.inventory.submit()
    }

    pub fn record_export(&mut self, path: &Path) {
        self.status_message = Some(self.labels().saved_to(&path.display().to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::TextDirection;

    #[test]
    fn labels_follow_configured_direction() {
        let mut state = AppState::default();
        assert_eq!(state.labels().add_button, "Add Product");
        state.config.direction = TextDirection::Rtl;
        assert_eq!(state.labels(), Labels::HEBREW);
    }

    #[test]
    fn export_status_is_labelled_and_cleared_by_the_next_edit() {
        let mut state = AppState::default();
        state.record_export(Path::new("/tmp/product-list.pdf"));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Saved to: /tmp/product-list.pdf")
        );

        state.edit_field(DraftField::Name, "Widget".into());
        assert_eq!(state.status_message, None);
        assert_eq!(state.inventory.draft().name, "Widget");

        state.record_export(Path::new("/tmp/product-list.pdf"));
        assert!(state.submit_draft().is_err());
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn starts_with_an_empty_list() {
        let state = AppState::default();
        assert!(state.inventory.is_empty());
        assert!(!state.scanner_open);
    }
}
