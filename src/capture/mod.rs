//! Platform-specific input capture and injection
//!
//! The gesture pipeline itself is platform independent; this module holds
//! the global pointer hook and the key synthesizer for each platform.

pub mod input;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

#[cfg(target_os = "windows")]
pub use self::windows as platform;

#[cfg(not(target_os = "windows"))]
pub use self::unsupported as platform;

pub use input::{Decision, GestureInterceptor, InputHook, Point, PointerEvent};
