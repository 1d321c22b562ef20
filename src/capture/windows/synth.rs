use crate::action::dispatcher::KeySynthesizer;
use crate::action::types::{KeyTransition, SyntheticInput};
use crate::session::error::{GestureError, GestureResult};
use std::mem;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, HARDWAREINPUT, INPUT, INPUT_0, INPUT_HARDWARE, INPUT_KEYBOARD, INPUT_MOUSE,
    KEYBDINPUT, KEYBD_EVENT_FLAGS, KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, MOUSEINPUT,
    MOUSE_EVENT_FLAGS, VIRTUAL_KEY,
};

/// Injects input through `SendInput`
#[derive(Debug, Default, Clone, Copy)]
pub struct SendInputSynthesizer;

impl SendInputSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl KeySynthesizer for SendInputSynthesizer {
    fn send(&self, input: SyntheticInput) -> GestureResult<()> {
        let inputs = [to_raw(input)];
        let sent = unsafe { SendInput(&inputs, mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            return Err(GestureError::Synthesis(format!(
                "SendInput injected {} of {} inputs ({:?}): {}",
                sent,
                inputs.len(),
                input,
                windows::core::Error::from_win32()
            )));
        }
        Ok(())
    }
}

fn to_raw(input: SyntheticInput) -> INPUT {
    match input {
        SyntheticInput::Keyboard { key, transition } => {
            let mut flags = KEYBD_EVENT_FLAGS(0);
            if key.is_extended() {
                flags |= KEYEVENTF_EXTENDEDKEY;
            }
            if transition == KeyTransition::Up {
                flags |= KEYEVENTF_KEYUP;
            }
            INPUT {
                r#type: INPUT_KEYBOARD,
                Anonymous: INPUT_0 {
                    ki: KEYBDINPUT {
                        wVk: VIRTUAL_KEY(key.code()),
                        wScan: 0,
                        dwFlags: flags,
                        time: 0,
                        dwExtraInfo: 0,
                    },
                },
            }
        }
        SyntheticInput::Mouse { dx, dy, data, flags } => INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    mouseData: data,
                    dwFlags: MOUSE_EVENT_FLAGS(flags),
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        },
        SyntheticInput::Hardware {
            message,
            param_low,
            param_high,
        } => INPUT {
            r#type: INPUT_HARDWARE,
            Anonymous: INPUT_0 {
                hi: HARDWAREINPUT {
                    uMsg: message,
                    wParamL: param_low,
                    wParamH: param_high,
                },
            },
        },
    }
}
