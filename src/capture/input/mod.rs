//! Pointer input interception
//!
//! Translates the global pointer stream into gestures: button state, the
//! trajectory being drawn, and the consume/forward decision for each event.

pub mod hook;
pub mod interceptor;
pub mod types;

pub use hook::{route_event, HookHandle, InputHook, PumpId};
pub use interceptor::GestureInterceptor;
pub use types::{Decision, MouseButton, Point, PointerEvent, PointerEventKind, TriggerButton};
