// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page: persistent app configuration.

use std::path::PathBuf;

use dioxus::prelude::*;

use tally_core::{FacingMode, PaperSize, TextDirection};

use crate::services::app_services::AppServices;
use crate::state::AppState;

const ROW: &str = "display: flex; justify-content: space-between; align-items: center; gap: 12px; padding: 12px 0; border-bottom: 1px solid #f0f0f0;";
const CONTROL: &str = "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;";

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<String>::None);

    let labels = state.read().labels();
    let config = state.read().config.clone();
    let font_path = config
        .font_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        div {
            h1 { "{labels.settings}" }

            section { style: "margin: 16px 0;",
                h3 { "Layout" }
                div { style: ROW,
                    span { "Language and direction" }
                    select {
                        style: CONTROL,
                        value: config.direction.html_dir(),
                        onchange: move |evt| {
                            if let Some(direction) = TextDirection::from_html_dir(&evt.value()) {
                                state.write().config.direction = direction;
                            }
                        },
                        option { value: "ltr", "English (left to right)" }
                        option { value: "rtl", "\u{05E2}\u{05D1}\u{05E8}\u{05D9}\u{05EA} (right to left)" }
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "PDF export" }
                div { style: ROW,
                    span { "Paper size" }
                    select {
                        style: CONTROL,
                        value: config.paper_size.label(),
                        onchange: move |evt| {
                            if let Some(ps) = PaperSize::from_label(&evt.value()) {
                                state.write().config.paper_size = ps;
                            }
                        },
                        for ps in [PaperSize::A4, PaperSize::A5, PaperSize::Letter, PaperSize::Legal] {
                            {
                                let label = ps.label();
                                rsx! {
                                    option { value: label, "{label}" }
                                }
                            }
                        }
                    }
                }
                div { style: ROW,
                    span { "Hebrew font (TrueType file)" }
                    input {
                        style: "{CONTROL} flex: 1; max-width: 60%;",
                        placeholder: "/usr/share/fonts/truetype/DejaVuSans.ttf",
                        value: "{font_path}",
                        onchange: move |evt| {
                            state.write().config.font_path = parse_font_path(&evt.value());
                        },
                    }
                }
                if config.direction.is_rtl() && config.font_path.is_none() {
                    p { style: "color: #ff9500; font-size: 14px;",
                        "The Hebrew layout needs a font before the list can be exported."
                    }
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Scanner" }
                div { style: ROW,
                    span { "Camera" }
                    select {
                        style: CONTROL,
                        value: config.facing_mode.as_str(),
                        onchange: move |evt| {
                            if let Some(mode) = FacingMode::from_name(&evt.value()) {
                                state.write().config.facing_mode = mode;
                            }
                        },
                        option { value: "environment", "Rear" }
                        option { value: "user", "Front" }
                    }
                }
            }

            // Save button
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: move |_| {
                    let config = state.read().config.clone();
                    match svc.save_config(&config) {
                        Ok(()) => {
                            tracing::info!("settings saved");
                            save_msg.set(Some("Settings saved.".into()));
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "failed to save settings");
                            save_msg.set(Some(format!("Save failed: {e}")));
                        }
                    }
                },
                "Save Settings"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "Tally v{version}"
                    br {}
                    "Inventory entry with barcode scanning and PDF export"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

/// Empty input clears the font.
fn parse_font_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_font_path_clears_the_setting() {
        assert_eq!(parse_font_path("   "), None);
        assert_eq!(
            parse_font_path(" /fonts/DejaVuSans.ttf "),
            Some(PathBuf::from("/fonts/DejaVuSans.ttf"))
        );
    }
}
