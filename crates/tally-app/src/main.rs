// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tally: inventory entry with barcode scanning and PDF product-list export.
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod components;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;
use tally_core::labels::Labels;

use pages::home::Home;
use pages::settings::Settings;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Tally starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(TabLayout)]
    #[route("/")]
    Home {},
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| {
        let svc = AppServices::init();
        tracing::info!(platform = svc.platform_name(), "backend services initialised");
        svc
    });

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent bottom tab layout wrapping all pages.
///
/// The whole tree takes its `dir` from the configured layout direction.
#[component]
fn TabLayout() -> Element {
    let state = use_context::<Signal<state::AppState>>();
    let direction = state.read().config.direction;
    let labels = Labels::for_direction(direction);

    rsx! {
        div { class: "app-container",
            dir: direction.html_dir(),
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; background: #f5f6fa;",

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }

            // Bottom tab bar
            nav { class: "tab-bar",
                style: "display: flex; justify-content: space-around; padding: 8px 0; border-top: 1px solid #e0e0e0; background: #fafafa;",
                TabButton { to: Route::Home {}, label: labels.list_title, icon: "\u{1F4CB}" }
                TabButton { to: Route::Settings {}, label: labels.settings, icon: "\u{2699}" }
            }
        }
    }
}

#[component]
fn TabButton(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; text-decoration: none; color: #333; font-size: 12px;",
            span { style: "font-size: 20px;", "{icon}" }
            span { "{label}" }
        }
    }
}
