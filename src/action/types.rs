use serde::{Deserialize, Serialize};

/// Keys a gesture can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VirtualKey {
    Home,
    End,
    PageUp,
    PageDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    BrowserBack,
    BrowserForward,
    BrowserRefresh,
    /// Raw platform virtual-key code
    Code(u16),
}

impl VirtualKey {
    /// Windows virtual-key code
    pub fn code(self) -> u16 {
        match self {
            VirtualKey::Home => 0x24,
            VirtualKey::End => 0x23,
            VirtualKey::PageUp => 0x21,
            VirtualKey::PageDown => 0x22,
            VirtualKey::ArrowLeft => 0x25,
            VirtualKey::ArrowRight => 0x27,
            VirtualKey::ArrowUp => 0x26,
            VirtualKey::ArrowDown => 0x28,
            VirtualKey::Escape => 0x1B,
            VirtualKey::BrowserBack => 0xA6,
            VirtualKey::BrowserForward => 0xA7,
            VirtualKey::BrowserRefresh => 0xA8,
            VirtualKey::Code(code) => code,
        }
    }

    /// Navigation keys live on the extended part of the keyboard and need
    /// the extended flag to avoid being read as numpad keys.
    pub fn is_extended(self) -> bool {
        matches!(
            self,
            VirtualKey::Home
                | VirtualKey::End
                | VirtualKey::PageUp
                | VirtualKey::PageDown
                | VirtualKey::ArrowLeft
                | VirtualKey::ArrowRight
                | VirtualKey::ArrowUp
                | VirtualKey::ArrowDown
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Up,
    Down,
}

/// One injected input, mirroring the platform's keyboard/mouse/hardware input kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticInput {
    Keyboard {
        key: VirtualKey,
        transition: KeyTransition,
    },
    Mouse {
        dx: i32,
        dy: i32,
        data: u32,
        flags: u32,
    },
    Hardware {
        message: u32,
        param_low: u16,
        param_high: u16,
    },
}

impl SyntheticInput {
    pub fn key(key: VirtualKey, transition: KeyTransition) -> Self {
        SyntheticInput::Keyboard { key, transition }
    }
}
