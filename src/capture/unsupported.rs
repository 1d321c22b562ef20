//! Fallback for platforms without a global pointer hook
//!
//! Everything compiles so the gesture pipeline can be built and tested
//! anywhere, but starting a session fails.

use crate::action::dispatcher::KeySynthesizer;
use crate::action::types::SyntheticInput;
use crate::capture::input::hook::{HookHandle, InputHook, PumpId};
use crate::session::error::{GestureError, GestureResult};

const UNSUPPORTED: &str = "Global mouse gestures are only implemented on Windows";

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedHook;

impl InputHook for UnsupportedHook {
    fn install(&self) -> GestureResult<HookHandle> {
        Err(GestureError::Platform(UNSUPPORTED.to_string()))
    }

    fn pump_id(&self) -> PumpId {
        PumpId(0)
    }

    fn pump(&self) {}

    fn uninstall(&self, _handle: HookHandle) -> GestureResult<()> {
        Ok(())
    }

    fn quit(&self, _pump: PumpId) -> GestureResult<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSynthesizer;

impl KeySynthesizer for UnsupportedSynthesizer {
    fn send(&self, _input: SyntheticInput) -> GestureResult<()> {
        Err(GestureError::Platform(UNSUPPORTED.to_string()))
    }
}

/// Hook type used by sessions on this platform
pub type PlatformHook = UnsupportedHook;

/// Key synthesizer used by sessions on this platform
pub type PlatformSynthesizer = UnsupportedSynthesizer;
