//! Gesture session lifecycle
//!
//! A session owns the dedicated hook thread. The interceptor (button state
//! and trajectory) is built here and moved onto that thread, which is the
//! only place it is ever touched.

use crate::action::dispatcher::{ActionDispatch, KeyDispatcher, KeySynthesizer};
use crate::capture::input::hook::{self, HookHandle, InputHook, PumpId};
use crate::capture::input::interceptor::GestureInterceptor;
use crate::config::GestureConfig;
use crate::session::error::{GestureError, GestureResult};
use parking_lot::Mutex as ParkingMutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SendError};
use std::sync::Arc;
use std::thread::JoinHandle;

const HOOK_THREAD_NAME: &str = "gesture-hook";

struct ActiveHook {
    handle: HookHandle,
    pump: PumpId,
    thread: JoinHandle<()>,
    exited: Receiver<()>,
}

/// Starts and stops global gesture capture
pub struct GestureSession<H: InputHook> {
    hook: Arc<H>,
    config: GestureConfig,
    dispatcher: Arc<dyn ActionDispatch>,
    active: ParkingMutex<Option<ActiveHook>>,
}

impl<H: InputHook> GestureSession<H> {
    pub fn new(hook: H, config: GestureConfig, dispatcher: Arc<dyn ActionDispatch>) -> Self {
        Self {
            hook: Arc::new(hook),
            config,
            dispatcher,
            active: ParkingMutex::new(None),
        }
    }

    /// Session that taps the configured keys through `synthesizer`
    pub fn with_synthesizer<S>(hook: H, config: GestureConfig, synthesizer: S) -> Self
    where
        S: KeySynthesizer + 'static,
    {
        let dispatcher = KeyDispatcher::new(config.actions.clone(), synthesizer)
            .with_tap_delay(config.key_tap_delay());
        Self::new(hook, config, Arc::new(dispatcher))
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn is_running(&self) -> bool {
        self.active
            .lock()
            .as_ref()
            .map_or(false, |active| !active.thread.is_finished())
    }

    /// Install the global hook on a dedicated thread
    ///
    /// Does nothing if the session is already running. Fails if the config
    /// is invalid or the hook cannot be installed within `start_timeout`;
    /// there is no retry.
    pub fn start(&self) -> GestureResult<()> {
        self.config.validate()?;

        let mut active = self.active.lock();
        if let Some(current) = active.as_ref() {
            if !current.thread.is_finished() {
                tracing::debug!("Gesture session already running");
                return Ok(());
            }
        }
        if let Some(stale) = active.take() {
            tracing::warn!("Hook thread had exited on its own; restarting");
            let _ = stale.thread.join();
        }

        let interceptor = GestureInterceptor::new(&self.config, self.dispatcher.clone());
        let platform_hook = self.hook.clone();
        let (ready_tx, ready_rx) = mpsc::channel();
        let (exited_tx, exited_rx) = mpsc::channel();

        let thread = std::thread::Builder::new()
            .name(HOOK_THREAD_NAME.to_string())
            .spawn(move || {
                hook::bind(interceptor);

                let installed = platform_hook
                    .install()
                    .map(|handle| (handle, platform_hook.pump_id()));
                match ready_tx.send(installed) {
                    Ok(()) => platform_hook.pump(),
                    // start() gave up waiting; nobody will ever stop this hook
                    Err(SendError(Ok((handle, _)))) => {
                        tracing::warn!("Hook installed after start() timed out; removing it");
                        if let Err(e) = platform_hook.uninstall(handle) {
                            tracing::warn!("Failed to remove late hook: {}", e);
                        }
                    }
                    Err(SendError(Err(_))) => {}
                }

                if let Some(mut interceptor) = hook::unbind() {
                    interceptor.reset();
                }
                let _ = exited_tx.send(());
            })?;

        let timeout = self.config.start_timeout();
        let (handle, pump) = match ready_rx.recv_timeout(timeout) {
            Ok(Ok(ids)) => ids,
            Ok(Err(e)) => {
                let _ = thread.join();
                tracing::error!("Failed to start gesture session: {}", e);
                return Err(e);
            }
            Err(RecvTimeoutError::Timeout) => {
                tracing::error!("Hook installation did not finish within {:?}", timeout);
                return Err(GestureError::HookInstall(format!(
                    "installation timed out after {:?}",
                    timeout
                )));
            }
            Err(RecvTimeoutError::Disconnected) => {
                let _ = thread.join();
                return Err(GestureError::HookInstall(
                    "hook thread exited before reporting".to_string(),
                ));
            }
        };

        *active = Some(ActiveHook {
            handle,
            pump,
            thread,
            exited: exited_rx,
        });

        tracing::info!(
            "Gesture session started (trigger={:?}, tolerance={}°, min_samples={})",
            self.config.trigger,
            self.config.tolerance_degrees,
            self.config.min_samples
        );
        Ok(())
    }

    /// Remove the hook and shut down the hook thread
    ///
    /// Safe to call from any thread and when not running. Waits at most
    /// `stop_timeout` for the hook thread; a thread that does not exit in
    /// time is detached.
    pub fn stop(&self) {
        let Some(active) = self.active.lock().take() else {
            return;
        };

        // Unhook first so no new events arrive while the pump winds down
        if let Err(e) = self.hook.uninstall(active.handle) {
            tracing::warn!("Failed to remove hook: {}", e);
        }
        if let Err(e) = self.hook.quit(active.pump) {
            tracing::warn!("Failed to signal hook pump: {}", e);
        }

        let timeout = self.config.stop_timeout();
        match active.exited.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                if active.thread.join().is_err() {
                    tracing::warn!("Hook thread panicked during shutdown");
                }
                tracing::info!("Gesture session stopped");
            }
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    "Hook thread did not exit within {:?}; detaching it",
                    timeout
                );
            }
        }
    }
}

impl<H: InputHook> Drop for GestureSession<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
