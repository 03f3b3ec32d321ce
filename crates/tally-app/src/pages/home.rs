// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page: add-product form, product list, and PDF export.

use dioxus::prelude::*;

use tally_core::DraftField;

use crate::components::product_row::ProductRow;
use crate::components::scanner_overlay::ScannerOverlay;
use crate::services::app_services::AppServices;
use crate::state::AppState;

const INPUT: &str = "width: 100%; box-sizing: border-box; padding: 10px; border: 1px solid #ccc; border-radius: 8px; font-size: 16px;";
const CARD: &str = "background: white; border-radius: 12px; padding: 16px; margin-bottom: 16px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);";

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let labels = state.read().labels();
    let draft = state.read().inventory.draft().clone();
    let products = state.read().inventory.snapshot();
    let count = products.len();
    let total_units = state.read().inventory.total_units();
    let export_label = labels.export_button(count);

    rsx! {
        div {
            // Header
            h1 { style: "margin-bottom: 4px;", "{labels.app_title}" }
            p { style: "color: #666; margin-top: 0;", "{labels.app_subtitle}" }

            // Add-product form
            section { style: CARD,
                h2 { style: "margin-top: 0; font-size: 18px;", "{labels.add_heading}" }

                label { style: "display: block; margin: 8px 0 4px;", "{labels.barcode}" }
                div { style: "display: flex; gap: 8px;",
                    input {
                        style: INPUT,
                        placeholder: labels.barcode_placeholder,
                        value: "{draft.barcode}",
                        oninput: move |evt| {
                            state.write().edit_field(DraftField::Barcode, evt.value());
                        },
                    }
                    button {
                        style: "padding: 10px 16px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white; white-space: nowrap;",
                        disabled: state.read().scanner_open,
                        onclick: move |_| {
                            if !state.read().scanner_open {
                                tracing::debug!("opening scanner");
                                state.write().scanner_open = true;
                            }
                        },
                        "\u{1F4F7} {labels.scan_button}"
                    }
                }

                label { style: "display: block; margin: 8px 0 4px;", "{labels.product_name}" }
                input {
                    style: INPUT,
                    placeholder: labels.name_placeholder,
                    value: "{draft.name}",
                    oninput: move |evt| {
                        state.write().edit_field(DraftField::Name, evt.value());
                    },
                }

                label { style: "display: block; margin: 8px 0 4px;", "{labels.quantity}" }
                input {
                    style: INPUT,
                    r#type: "number",
                    min: "1",
                    placeholder: labels.quantity_placeholder,
                    value: "{draft.quantity}",
                    oninput: move |evt| {
                        state.write().edit_field(DraftField::Quantity, evt.value());
                    },
                }

                button {
                    style: "width: 100%; margin-top: 12px; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px;",
                    onclick: move |_| {
                        // Incomplete drafts are kept as they are and nothing is shown.
                        if let Err(e) = state.write().submit_draft() {
                            tracing::debug!(reason = %e, "draft not submitted");
                        }
                    },
                    "{labels.add_button}"
                }
            }

            // Product list
            section { style: CARD,
                div { style: "display: flex; justify-content: space-between; align-items: baseline;",
                    h2 { style: "margin: 0; font-size: 18px;", "{labels.list_title}" }
                    span { style: "color: #666; font-size: 14px;", "{count} {labels.items} ({total_units})" }
                }

                if products.is_empty() {
                    div { style: "text-align: center; color: #888; padding: 32px 0;",
                        p { style: "font-size: 16px; margin: 0;", "{labels.empty_title}" }
                        p { style: "font-size: 14px;", "{labels.empty_hint}" }
                    }
                } else {
                    div { style: "display: flex; font-weight: 600; color: #555; border-bottom: 2px solid #e0e0e0;",
                        div { style: "flex: 1; padding: 8px;", "{labels.barcode}" }
                        div { style: "flex: 1; padding: 8px;", "{labels.product_name}" }
                        div { style: "flex: 1; padding: 8px;", "{labels.quantity}" }
                        div { style: "flex: 1; padding: 8px;", "{labels.actions}" }
                    }
                    div { style: "max-height: 50vh; overflow-y: auto;",
                        for product in products.iter().cloned() {
                            ProductRow {
                                key: "{product.id}",
                                product,
                                labels,
                                on_increment: move |id| {
                                    state.write().inventory.increment(id);
                                },
                                on_decrement: move |id| {
                                    state.write().inventory.decrement(id);
                                },
                                on_delete: move |id| {
                                    state.write().inventory.delete(id);
                                },
                            }
                        }
                    }
                }
            }

            // Export footer
            button {
                style: "width: 100%; padding: 14px; border-radius: 8px; border: none; background: #34c759; color: white; font-size: 16px;",
                disabled: count == 0,
                onclick: move |_| {
                    let products = state.read().inventory.snapshot();
                    if products.is_empty() {
                        return;
                    }
                    let config = state.read().config.clone();
                    if let Some(path) = svc.export_or_alert(&products, &config) {
                        state.write().record_export(&path);
                    }
                },
                "{export_label}"
            }

            // Status message
            if let Some(ref msg) = state.read().status_message {
                p { style: "color: #666; font-size: 14px; margin-top: 12px; text-align: center;", "{msg}" }
            }

            if state.read().scanner_open {
                ScannerOverlay {
                    on_scan: move |code: String| {
                        state.write().inventory.fill_barcode(code);
                    },
                    on_close: move |_| {
                        state.write().scanner_open = false;
                    },
                }
            }
        }
    }
}
