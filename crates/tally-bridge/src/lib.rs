// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tally: Native platform bridge and barcode scanner lifecycle.
//
// `traits` defines what the UI needs from the host (blocking alerts, a save
// prompt, a camera decoding engine). `scanner` drives a decoding engine
// through its start/decode/stop lifecycle. Desktop builds get an `rfd`-backed
// bridge; other targets get the headless stub.

pub mod scanner;
pub mod traits;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod desktop;

pub mod stub;

/// Retrieves the bridge implementation for the target operating system.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Box::new(desktop::DesktopBridge)
    }
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        Box::new(stub::StubBridge)
    }
}

/// Decoding engine for this platform.
///
/// No camera engine is wired on any target yet, so this is always the
/// unavailable decoder and scanning ends in the camera-error path.
pub fn platform_decoder() -> stub::UnavailableDecoder {
    stub::UnavailableDecoder
}
