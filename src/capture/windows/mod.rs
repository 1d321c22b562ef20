//! Windows capture implementations
//!
//! Uses a `WH_MOUSE_LL` hook for pointer interception and `SendInput` for
//! synthetic key taps.

pub mod hook;
pub mod synth;

pub use hook::LowLevelMouseHook;
pub use synth::SendInputSynthesizer;

/// Hook type used by sessions on this platform
pub type PlatformHook = LowLevelMouseHook;

/// Key synthesizer used by sessions on this platform
pub type PlatformSynthesizer = SendInputSynthesizer;
