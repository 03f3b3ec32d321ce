// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Barcode scanner session: drives a `DecodeEngine` through
// idle -> starting -> active -> stopping -> idle and hands the caller exactly
// one decoded value per session.

use std::sync::Arc;

use tokio::sync::{Notify, mpsc};
use tracing::{debug, info, warn};

use tally_core::error::{Result, TallyError};

use crate::traits::{DecodeEngine, EngineState, ScanConfig};

/// Lifecycle of a scanner session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerState {
    Idle,
    Starting,
    Active,
    Stopping,
    /// The engine failed to start. A new `start` is allowed.
    Error(String),
}

/// Result of a `start` call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A session was already running; nothing was done.
    AlreadyActive,
    /// Cancelled before the camera came up.
    Cancelled,
}

/// Cancels the session it was taken from, from any task.
///
/// A cancel with no one waiting is remembered until the session next waits,
/// so pressing Cancel while the engine is still starting is not lost. Each
/// finished session gets a fresh signal; handles from an earlier session do
/// nothing.
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<Notify>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.notify_one();
    }
}

/// One barcode scanner bound to a decoding engine.
pub struct ScannerSession<E: DecodeEngine> {
    engine: E,
    config: ScanConfig,
    state: ScannerState,
    decodes: Option<mpsc::UnboundedReceiver<String>>,
    cancel: Arc<Notify>,
}

impl<E: DecodeEngine> ScannerSession<E> {
    pub fn new(engine: E, config: ScanConfig) -> Self {
        Self {
            engine,
            config,
            state: ScannerState::Idle,
            decodes: None,
            cancel: Arc::new(Notify::new()),
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.cancel))
    }

    /// Start the camera.
    ///
    /// Returns `AlreadyActive` without touching the engine if a session is
    /// running. An engine failure leaves the session in `Error` and comes
    /// back as `CameraUnavailable`. A cancel while starting stops whatever the
    /// engine already opened before the session is released.
    pub async fn start(&mut self) -> Result<StartOutcome> {
        if !matches!(self.state, ScannerState::Idle | ScannerState::Error(_)) {
            debug!(state = ?self.state, "scanner start ignored, session already running");
            return Ok(StartOutcome::AlreadyActive);
        }

        self.state = ScannerState::Starting;
        let (tx, rx) = mpsc::unbounded_channel();

        let started = tokio::select! {
            biased;
            result = self.engine.start(&self.config, tx) => Some(result),
            _ = self.cancel.notified() => None,
        };

        match started {
            Some(Ok(())) => {
                info!(facing = self.config.facing.as_str(), "scanner active");
                self.decodes = Some(rx);
                self.state = ScannerState::Active;
                Ok(StartOutcome::Started)
            }
            Some(Err(e)) => {
                let reason = e.to_string();
                warn!(error = %reason, "scanner failed to start");
                self.release();
                self.state = ScannerState::Error(reason.clone());
                Err(TallyError::CameraUnavailable(reason))
            }
            None => {
                info!("scanner cancelled while starting");
                self.state = ScannerState::Stopping;
                self.stop_engine().await;
                self.release();
                Ok(StartOutcome::Cancelled)
            }
        }
    }

    /// Wait for the first decoded value, then shut the camera down.
    ///
    /// Returns None if the session was cancelled, is not active, or the
    /// engine hung up. Values decoded after the first are discarded.
    pub async fn next_scan(&mut self) -> Option<String> {
        if self.state != ScannerState::Active {
            return None;
        }
        let decodes = self.decodes.as_mut()?;

        let decoded = tokio::select! {
            value = decodes.recv() => value,
            _ = self.cancel.notified() => {
                info!("scanner cancelled");
                None
            }
        };

        self.state = ScannerState::Stopping;
        self.stop_engine().await;
        self.release();

        if decoded.is_some() {
            debug!("scanner delivered a value");
        }
        decoded
    }

    /// Start, wait for one value, shut down.
    pub async fn scan_once(&mut self) -> Result<Option<String>> {
        match self.start().await? {
            StartOutcome::Started | StartOutcome::AlreadyActive => Ok(self.next_scan().await),
            StartOutcome::Cancelled => Ok(None),
        }
    }

    /// Stop and release the camera. Errors are logged and dropped.
    pub async fn teardown(&mut self) {
        if self.state == ScannerState::Idle {
            return;
        }
        self.state = ScannerState::Stopping;
        self.stop_engine().await;
        self.release();
    }

    async fn stop_engine(&mut self) {
        let engine_state = self.engine.state();
        if !matches!(engine_state, EngineState::Scanning | EngineState::Paused) {
            debug!(?engine_state, "engine not running, skipping stop");
            return;
        }
        if let Err(e) = self.engine.stop().await {
            debug!(error = %e, "scanner stop failed");
        }
    }

    fn release(&mut self) {
        self.decodes = None;
        if let Err(e) = self.engine.clear() {
            debug!(error = %e, "scanner clear failed");
        }
        self.cancel = Arc::new(Notify::new());
        self.state = ScannerState::Idle;
    }
}

impl<E: DecodeEngine> Drop for ScannerSession<E> {
    fn drop(&mut self) {
        if self.state != ScannerState::Idle {
            self.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::traits::DecodeSink;

    type Calls = Arc<Mutex<Vec<&'static str>>>;

    struct FakeEngine {
        calls: Calls,
        state: EngineState,
        emit: Vec<String>,
        state_after_start: EngineState,
        fail_starts: usize,
        hang_on_start: bool,
        open_before_hang: bool,
        keep_sink: bool,
        fail_stop: bool,
        fail_clear: bool,
        sink: Option<DecodeSink>,
    }

    impl FakeEngine {
        fn new(calls: &Calls) -> Self {
            Self {
                calls: Arc::clone(calls),
                state: EngineState::NotStarted,
                emit: Vec::new(),
                state_after_start: EngineState::Scanning,
                fail_starts: 0,
                hang_on_start: false,
                open_before_hang: false,
                keep_sink: true,
                fail_stop: false,
                fail_clear: false,
                sink: None,
            }
        }

        fn emitting(calls: &Calls, values: &[&str]) -> Self {
            let mut engine = Self::new(calls);
            engine.emit = values.iter().map(|v| v.to_string()).collect();
            engine
        }
    }

    impl DecodeEngine for FakeEngine {
        fn state(&self) -> EngineState {
            self.state
        }

        async fn start(&mut self, _config: &ScanConfig, sink: DecodeSink) -> Result<()> {
            self.calls.lock().unwrap().push("start");
            if self.hang_on_start {
                if self.open_before_hang {
                    self.state = EngineState::Scanning;
                }
                return std::future::pending().await;
            }
            if self.fail_starts > 0 {
                self.fail_starts -= 1;
                return Err(TallyError::Bridge("no camera".into()));
            }
            for value in &self.emit {
                let _ = sink.send(value.clone());
            }
            if self.keep_sink {
                self.sink = Some(sink);
            }
            self.state = self.state_after_start;
            Ok(())
        }

        async fn stop(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push("stop");
            self.state = EngineState::NotStarted;
            if self.fail_stop {
                Err(TallyError::Bridge("stop failed".into()))
            } else {
                Ok(())
            }
        }

        fn clear(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push("clear");
            self.sink = None;
            self.state = EngineState::NotStarted;
            if self.fail_clear {
                Err(TallyError::Bridge("clear failed".into()))
            } else {
                Ok(())
            }
        }
    }

    fn calls() -> Calls {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn recorded(calls: &Calls) -> Vec<&'static str> {
        calls.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn delivers_one_value_after_stopping() {
        let log = calls();
        let engine = FakeEngine::emitting(&log, &["4006381333931", "0012345678905"]);
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        assert_eq!(session.start().await.unwrap(), StartOutcome::Started);
        assert_eq!(session.state(), &ScannerState::Active);

        assert_eq!(session.next_scan().await.as_deref(), Some("4006381333931"));
        assert_eq!(session.state(), &ScannerState::Idle);
        assert_eq!(recorded(&log), vec!["start", "stop", "clear"]);

        // The second decode belonged to the finished session.
        assert_eq!(session.next_scan().await, None);
    }

    #[tokio::test]
    async fn unknown_engine_state_skips_stop() {
        let log = calls();
        let mut engine = FakeEngine::emitting(&log, &["ABC-123"]);
        engine.state_after_start = EngineState::Unknown;
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        let value = session.scan_once().await.unwrap();
        assert_eq!(value.as_deref(), Some("ABC-123"));
        assert_eq!(recorded(&log), vec!["start", "clear"]);
    }

    #[tokio::test]
    async fn paused_engine_is_stopped() {
        let log = calls();
        let mut engine = FakeEngine::emitting(&log, &["ABC-123"]);
        engine.state_after_start = EngineState::Paused;
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        session.scan_once().await.unwrap();
        assert_eq!(recorded(&log), vec!["start", "stop", "clear"]);
    }

    #[tokio::test]
    async fn failed_stop_still_delivers() {
        let log = calls();
        let mut engine = FakeEngine::emitting(&log, &["ABC-123"]);
        engine.fail_stop = true;
        engine.fail_clear = true;
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        let value = session.scan_once().await.unwrap();
        assert_eq!(value.as_deref(), Some("ABC-123"));
        assert_eq!(session.state(), &ScannerState::Idle);
    }

    #[tokio::test]
    async fn start_failure_enters_error_and_allows_retry() {
        let log = calls();
        let mut engine = FakeEngine::emitting(&log, &["ABC-123"]);
        engine.fail_starts = 1;
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        let err = session.start().await.unwrap_err();
        assert!(matches!(err, TallyError::CameraUnavailable(ref r) if r.contains("no camera")));
        assert!(matches!(session.state(), ScannerState::Error(_)));

        assert_eq!(session.start().await.unwrap(), StartOutcome::Started);
        assert_eq!(session.next_scan().await.as_deref(), Some("ABC-123"));
    }

    #[tokio::test]
    async fn second_start_is_a_no_op() {
        let log = calls();
        let engine = FakeEngine::new(&log);
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        assert_eq!(session.start().await.unwrap(), StartOutcome::Started);
        assert_eq!(session.start().await.unwrap(), StartOutcome::AlreadyActive);
        assert_eq!(recorded(&log), vec!["start"]);
        assert_eq!(session.state(), &ScannerState::Active);
    }

    #[tokio::test]
    async fn cancel_while_waiting_returns_nothing() {
        let log = calls();
        let engine = FakeEngine::new(&log);
        let mut session = ScannerSession::new(engine, ScanConfig::default());
        session.start().await.unwrap();

        let handle = session.cancel_handle();
        let waiter = async { session.next_scan().await };
        let canceller = async {
            tokio::task::yield_now().await;
            handle.cancel();
        };
        let (value, ()) = tokio::join!(waiter, canceller);

        assert_eq!(value, None);
        assert_eq!(recorded(&log), vec!["start", "stop", "clear"]);
    }

    #[tokio::test]
    async fn cancel_during_hanging_start() {
        let log = calls();
        let mut engine = FakeEngine::new(&log);
        engine.hang_on_start = true;
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        session.cancel_handle().cancel();
        assert_eq!(session.start().await.unwrap(), StartOutcome::Cancelled);
        assert_eq!(session.state(), &ScannerState::Idle);
        assert_eq!(recorded(&log), vec!["start", "clear"]);
    }

    #[tokio::test]
    async fn cancel_after_camera_opened_stops_before_clearing() {
        let log = calls();
        let mut engine = FakeEngine::new(&log);
        engine.hang_on_start = true;
        engine.open_before_hang = true;
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        session.cancel_handle().cancel();
        assert_eq!(session.start().await.unwrap(), StartOutcome::Cancelled);
        assert_eq!(session.state(), &ScannerState::Idle);
        assert_eq!(recorded(&log), vec!["start", "stop", "clear"]);
    }

    #[tokio::test]
    async fn engine_hang_up_returns_nothing() {
        let log = calls();
        let mut engine = FakeEngine::new(&log);
        engine.keep_sink = false;
        let mut session = ScannerSession::new(engine, ScanConfig::default());

        assert_eq!(session.scan_once().await.unwrap(), None);
        assert_eq!(session.state(), &ScannerState::Idle);
    }

    #[tokio::test]
    async fn teardown_releases_an_active_session() {
        let log = calls();
        let engine = FakeEngine::new(&log);
        let mut session = ScannerSession::new(engine, ScanConfig::default());
        session.start().await.unwrap();

        session.teardown().await;
        assert_eq!(session.state(), &ScannerState::Idle);
        assert_eq!(recorded(&log), vec!["start", "stop", "clear"]);

        // Idle teardown does nothing.
        session.teardown().await;
        assert_eq!(recorded(&log).len(), 3);
    }

    #[tokio::test]
    async fn dropping_an_active_session_clears_the_engine() {
        let log = calls();
        let engine = FakeEngine::new(&log);
        let mut session = ScannerSession::new(engine, ScanConfig::default());
        session.start().await.unwrap();

        drop(session);
        assert_eq!(recorded(&log), vec!["start", "clear"]);
    }

    #[test]
    fn scan_config_follows_app_config() {
        let mut app = tally_core::AppConfig::default();
        app.facing_mode = tally_core::FacingMode::User;
        app.scan_fps = 5;
        let config = ScanConfig::from_app_config(&app);
        assert_eq!(config.facing, tally_core::FacingMode::User);
        assert_eq!(config.fps, 5);
        assert_eq!(config.surface_id, ScanConfig::SURFACE_ID);
        assert_eq!(config.symbologies.len(), 4);
    }
}
