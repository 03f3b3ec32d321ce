// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Full-screen camera overlay. Runs one scanner session while mounted.
//
// A decoded value goes to `on_scan`. `on_close` is called once the session
// has ended for any reason (value, cancel, or camera error). Unmounting drops
// the session, which releases the camera.

use dioxus::prelude::*;

use tally_bridge::scanner::{CancelHandle, ScannerSession};
use tally_bridge::traits::ScanConfig;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn ScannerOverlay(on_scan: EventHandler<String>, on_close: EventHandler<()>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut cancel = use_signal(|| Option::<CancelHandle>::None);
    let labels = state.read().labels();

    use_future(move || {
        let svc = svc.clone();
        async move {
            let config = ScanConfig::from_app_config(&state.peek().config);
            let mut session = ScannerSession::new(tally_bridge::platform_decoder(), config);
            cancel.set(Some(session.cancel_handle()));

            match session.scan_once().await {
                Ok(Some(code)) => {
                    tracing::info!(len = code.len(), "barcode scanned");
                    on_scan.call(code);
                }
                Ok(None) => tracing::debug!("scan ended without a value"),
                Err(e) => {
                    tracing::warn!(error = %e, "camera unavailable");
                    svc.alert_error(&e);
                }
            }

            session.teardown().await;
            cancel.set(None);
            on_close.call(());
        }
    });

    rsx! {
        div { class: "scanner-overlay",
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.85); display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px; z-index: 10;",
            div {
                id: ScanConfig::SURFACE_ID,
                style: "width: min(90vw, 480px); aspect-ratio: 1; background: black; border-radius: 12px; overflow: hidden;",
            }
            button {
                style: "padding: 12px 32px; border-radius: 8px; border: none; background: white; color: #333; font-size: 16px;",
                onclick: move |_| {
                    let handle = cancel.peek().clone();
                    match handle {
                        Some(handle) => handle.cancel(),
                        None => on_close.call(()),
                    }
                },
                "{labels.cancel}"
            }
        }
    }
}
