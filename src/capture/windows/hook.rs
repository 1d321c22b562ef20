use crate::capture::input::hook::{route_event, HookHandle, InputHook, PumpId};
use crate::capture::input::types::{Decision, MouseButton, Point, PointerEvent, PointerEventKind};
use crate::session::error::{GestureError, GestureResult};
use std::panic::{self, AssertUnwindSafe};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, PeekMessageW, PostThreadMessageW,
    SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, HC_ACTION, HHOOK, MSG,
    MSLLHOOKSTRUCT, PM_NOREMOVE, WH_MOUSE_LL, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN,
    WM_MBUTTONUP, WM_MOUSEMOVE, WM_QUIT, WM_RBUTTONDOWN, WM_RBUTTONUP, WM_USER, WM_XBUTTONDOWN,
    WM_XBUTTONUP,
};

/// Global low-level mouse hook (`WH_MOUSE_LL`) pumped by a Win32 message loop
#[derive(Debug, Default, Clone, Copy)]
pub struct LowLevelMouseHook;

impl LowLevelMouseHook {
    pub fn new() -> Self {
        Self
    }
}

impl InputHook for LowLevelMouseHook {
    fn install(&self) -> GestureResult<HookHandle> {
        unsafe {
            // Force this thread's message queue into existence so a WM_QUIT
            // posted by stop() before the first GetMessageW is not lost
            let mut msg = MSG::default();
            let _ = PeekMessageW(
                &mut msg,
                HWND(std::ptr::null_mut()),
                WM_USER,
                WM_USER,
                PM_NOREMOVE,
            );

            let module = GetModuleHandleW(None)
                .map_err(|e| GestureError::HookInstall(format!("GetModuleHandleW failed: {}", e)))?;
            let instance: HINSTANCE = module.into();

            let hook = SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), instance, 0)
                .map_err(|e| GestureError::HookInstall(format!("SetWindowsHookExW failed: {}", e)))?;

            tracing::info!("Low-level mouse hook installed ({:?})", hook);
            Ok(HookHandle(hook.0 as isize))
        }
    }

    fn pump_id(&self) -> PumpId {
        PumpId(unsafe { GetCurrentThreadId() })
    }

    fn pump(&self) {
        let mut msg = MSG::default();
        loop {
            let result = unsafe { GetMessageW(&mut msg, HWND(std::ptr::null_mut()), 0, 0) };
            if result.0 == -1 {
                tracing::error!("GetMessageW failed; hook pump exiting");
                break;
            }
            if result.0 == 0 || msg.message == WM_QUIT {
                break;
            }
            unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
        tracing::debug!("Hook message pump exited");
    }

    fn uninstall(&self, handle: HookHandle) -> GestureResult<()> {
        unsafe { UnhookWindowsHookEx(HHOOK(handle.0 as *mut _)) }
            .map_err(|e| GestureError::Platform(format!("UnhookWindowsHookEx failed: {}", e)))
    }

    fn quit(&self, pump: PumpId) -> GestureResult<()> {
        unsafe { PostThreadMessageW(pump.0, WM_QUIT, WPARAM(0), LPARAM(0)) }
            .map_err(|e| GestureError::Platform(format!("PostThreadMessageW failed: {}", e)))
    }
}

unsafe extern "system" fn mouse_hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code != HC_ACTION as i32 {
        return CallNextHookEx(None, code, wparam, lparam);
    }

    let data = &*(lparam.0 as *const MSLLHOOKSTRUCT);
    let event = PointerEvent::new(
        event_kind(wparam.0 as u32),
        Point::new(data.pt.x, data.pt.y),
        data.time,
    );

    // Unwinding into the OS is undefined behaviour
    let decision = panic::catch_unwind(AssertUnwindSafe(|| route_event(&event))).unwrap_or_else(|_| {
        tracing::error!("Mouse hook callback panicked; forwarding event");
        Decision::Forward
    });

    match decision {
        Decision::Consume => LRESULT(1),
        Decision::Forward => CallNextHookEx(None, code, wparam, lparam),
    }
}

fn event_kind(message: u32) -> PointerEventKind {
    match message {
        WM_MOUSEMOVE => PointerEventKind::Move,
        WM_LBUTTONDOWN => PointerEventKind::ButtonDown(MouseButton::Left),
        WM_LBUTTONUP => PointerEventKind::ButtonUp(MouseButton::Left),
        WM_RBUTTONDOWN => PointerEventKind::ButtonDown(MouseButton::Right),
        WM_RBUTTONUP => PointerEventKind::ButtonUp(MouseButton::Right),
        WM_MBUTTONDOWN => PointerEventKind::ButtonDown(MouseButton::Middle),
        WM_MBUTTONUP => PointerEventKind::ButtonUp(MouseButton::Middle),
        WM_XBUTTONDOWN => PointerEventKind::ButtonDown(MouseButton::Other),
        WM_XBUTTONUP => PointerEventKind::ButtonUp(MouseButton::Other),
        _ => PointerEventKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_mapping() {
        assert_eq!(event_kind(WM_MOUSEMOVE), PointerEventKind::Move);
        assert_eq!(
            event_kind(WM_RBUTTONDOWN),
            PointerEventKind::ButtonDown(MouseButton::Right)
        );
        assert_eq!(
            event_kind(WM_RBUTTONUP),
            PointerEventKind::ButtonUp(MouseButton::Right)
        );
        assert_eq!(event_kind(0x020A), PointerEventKind::Other);
    }
}
