use serde::{Deserialize, Serialize};

/// Screen coordinate reported by the pointer hook (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Mouse buttons the hook can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Button that starts and ends a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerButton {
    #[default]
    Right,
    Middle,
}

impl TriggerButton {
    pub fn matches(self, button: MouseButton) -> bool {
        matches!(
            (self, button),
            (TriggerButton::Right, MouseButton::Right) | (TriggerButton::Middle, MouseButton::Middle)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
    /// Wheel and anything else the hook sees
    Other,
}

/// One event from the global pointer stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub point: Point,
    /// Milliseconds since an arbitrary platform epoch
    pub time_ms: u32,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, point: Point, time_ms: u32) -> Self {
        Self { kind, point, time_ms }
    }
}

/// What the hook should do with an event after the interceptor has seen it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Swallow the event; nothing downstream sees it
    Consume,
    /// Pass the event on to the next hook and the default handling
    Forward,
}
