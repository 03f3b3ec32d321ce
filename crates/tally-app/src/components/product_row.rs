// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One product in the list, with quantity steppers and a delete button.

use dioxus::prelude::*;

use tally_core::labels::Labels;
use tally_core::{Product, ProductId};

const CELL: &str = "flex: 1; padding: 10px 8px; overflow-wrap: anywhere;";
const STEP: &str = "width: 32px; height: 32px; border-radius: 16px; border: 1px solid #ccc; background: white; font-size: 18px;";

/// Stateless: every change goes back through the handlers.
#[component]
pub fn ProductRow(
    product: Product,
    labels: Labels,
    on_increment: EventHandler<ProductId>,
    on_decrement: EventHandler<ProductId>,
    on_delete: EventHandler<ProductId>,
) -> Element {
    let id = product.id;
    let at_floor = product.quantity <= 1;

    rsx! {
        div { class: "product-row",
            style: "display: flex; align-items: center; border-bottom: 1px solid #f0f0f0;",
            div { style: "{CELL} font-family: monospace;", "{product.barcode}" }
            div { style: "{CELL}", "{product.name}" }
            div { style: "{CELL} display: flex; align-items: center; gap: 8px;",
                button {
                    style: STEP,
                    disabled: at_floor,
                    onclick: move |_| on_decrement.call(id),
                    "\u{2212}"
                }
                span { style: "min-width: 24px; text-align: center;", "{product.quantity}" }
                button {
                    style: STEP,
                    onclick: move |_| on_increment.call(id),
                    "+"
                }
            }
            div { style: "{CELL}",
                button {
                    style: "padding: 6px 12px; border-radius: 6px; border: none; background: #ff3b30; color: white;",
                    onclick: move |_| on_delete.call(id),
                    "{labels.delete}"
                }
            }
        }
    }
}
