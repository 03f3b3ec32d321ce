// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge and decoder for targets without a native implementation.
//
// Alerts go to the log; everything that needs the host returns
// `PlatformUnavailable`.

use std::path::PathBuf;

use tally_core::error::{Result, TallyError};

use crate::traits::*;

/// Headless bridge.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Headless (stub)"
    }
}

impl NativeAlert for StubBridge {
    fn alert(&self, title: &str, message: &str, level: AlertLevel) {
        tracing::warn!(?level, title, message, "NativeAlert::alert called on stub bridge");
    }
}

impl NativeSaveFile for StubBridge {
    fn prompt_save_path(&self, _suggested_name: &str) -> Result<Option<PathBuf>> {
        tracing::warn!("NativeSaveFile::prompt_save_path called on stub bridge");
        Err(TallyError::PlatformUnavailable)
    }
}

/// Decoder for platforms with no camera engine. Starting always fails.
pub struct UnavailableDecoder;

impl DecodeEngine for UnavailableDecoder {
    fn state(&self) -> EngineState {
        EngineState::NotStarted
    }

    async fn start(&mut self, _config: &ScanConfig, _sink: DecodeSink) -> Result<()> {
        tracing::warn!("DecodeEngine::start called on unavailable decoder");
        Err(TallyError::PlatformUnavailable)
    }

    async fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_cannot_prompt_for_a_path() {
        assert!(matches!(
            StubBridge.prompt_save_path("product-list.pdf"),
            Err(TallyError::PlatformUnavailable)
        ));
    }

    #[tokio::test]
    async fn unavailable_decoder_refuses_to_start() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut decoder = UnavailableDecoder;
        let err = decoder.start(&ScanConfig::default(), tx).await.unwrap_err();
        assert!(matches!(err, TallyError::PlatformUnavailable));
        assert_eq!(decoder.state(), EngineState::NotStarted);
    }
}
