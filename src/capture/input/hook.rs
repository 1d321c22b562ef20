//! Global pointer hook seam
//!
//! Platform hook callbacks carry no user data, so the interceptor for a
//! session is bound to the dedicated hook thread and looked up from there.
//! Nothing outside that thread can reach it.

use crate::capture::input::interceptor::GestureInterceptor;
use crate::capture::input::types::{Decision, PointerEvent};
use crate::session::error::GestureResult;
use std::cell::RefCell;

thread_local! {
    static INTERCEPTOR: RefCell<Option<GestureInterceptor>> = const { RefCell::new(None) };
}

/// Opaque handle of an installed hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookHandle(pub isize);

/// Identifies the event pump of a hook thread so it can be told to quit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpId(pub u32);

/// Platform side of global pointer interception
///
/// `install`, `pump_id` and `pump` are called on the dedicated hook thread.
/// `uninstall` and `quit` are called from whichever thread stops the session.
pub trait InputHook: Send + Sync + 'static {
    /// Register the global hook on the calling thread. Events must be
    /// delivered through [`route_event`] on this same thread.
    fn install(&self) -> GestureResult<HookHandle>;

    fn pump_id(&self) -> PumpId;

    /// Run the calling thread's event pump until [`InputHook::quit`] is called
    fn pump(&self);

    fn uninstall(&self, handle: HookHandle) -> GestureResult<()>;

    /// Ask a pump to return; must not wait for it
    fn quit(&self, pump: PumpId) -> GestureResult<()>;
}

/// Make `interceptor` the receiver of events routed on this thread
pub fn bind(interceptor: GestureInterceptor) {
    INTERCEPTOR.with(|slot| *slot.borrow_mut() = Some(interceptor));
}

/// Detach and return this thread's interceptor
pub fn unbind() -> Option<GestureInterceptor> {
    INTERCEPTOR.with(|slot| slot.borrow_mut().take())
}

/// Hand one hook event to this thread's interceptor
///
/// With no interceptor bound, or on re-entry while it is busy, the event is
/// forwarded untouched.
pub fn route_event(event: &PointerEvent) -> Decision {
    INTERCEPTOR.with(|slot| match slot.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(interceptor) => interceptor.on_event(event),
            None => Decision::Forward,
        },
        Err(_) => {
            tracing::trace!("Re-entrant pointer event forwarded");
            Decision::Forward
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::dispatcher::ActionDispatch;
    use crate::capture::input::types::{MouseButton, Point, PointerEventKind};
    use crate::config::GestureConfig;
    use crate::processing::classifier::Direction;
    use parking_lot::Mutex as ParkingMutex;
    use std::sync::Arc;

    struct Noop;

    impl ActionDispatch for Noop {
        fn dispatch(&self, _direction: Direction) -> GestureResult<()> {
            Ok(())
        }
    }

    /// Routes another event from inside dispatch, as a hook proc would
    /// if the synthesized input were delivered synchronously
    #[derive(Default)]
    struct Reentrant {
        nested: ParkingMutex<Vec<Decision>>,
    }

    impl ActionDispatch for Reentrant {
        fn dispatch(&self, _direction: Direction) -> GestureResult<()> {
            self.nested.lock().push(route_event(&right_down()));
            Ok(())
        }
    }

    fn right_down() -> PointerEvent {
        PointerEvent::new(
            PointerEventKind::ButtonDown(MouseButton::Right),
            Point::new(0, 0),
            0,
        )
    }

    fn pointer(kind: PointerEventKind, x: i32) -> PointerEvent {
        PointerEvent::new(kind, Point::new(x, 0), 0)
    }

    #[test]
    fn test_unbound_thread_forwards() {
        std::thread::spawn(|| {
            assert_eq!(route_event(&right_down()), Decision::Forward);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_bound_interceptor_receives_events() {
        std::thread::spawn(|| {
            bind(GestureInterceptor::new(&GestureConfig::default(), Arc::new(Noop)));
            assert_eq!(route_event(&right_down()), Decision::Consume);

            let interceptor = unbind().unwrap();
            assert!(interceptor.is_capturing());
            assert_eq!(route_event(&right_down()), Decision::Forward);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_binding_is_per_thread() {
        std::thread::spawn(|| {
            bind(GestureInterceptor::new(&GestureConfig::default(), Arc::new(Noop)));
            std::thread::spawn(|| {
                assert_eq!(route_event(&right_down()), Decision::Forward);
            })
            .join()
            .unwrap();
            unbind();
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_reentrant_event_is_forwarded() {
        let dispatch = Arc::new(Reentrant::default());
        let bound = dispatch.clone();

        let release = std::thread::spawn(move || {
            bind(GestureInterceptor::new(&GestureConfig::default(), bound));
            assert_eq!(route_event(&right_down()), Decision::Consume);
            for i in 1..=20 {
                route_event(&pointer(PointerEventKind::Move, i * 10));
            }
            let release =
                route_event(&pointer(PointerEventKind::ButtonUp(MouseButton::Right), 200));

            let interceptor = unbind().unwrap();
            assert!(!interceptor.is_capturing());
            release
        })
        .join()
        .unwrap();

        assert_eq!(release, Decision::Consume);
        assert_eq!(*dispatch.nested.lock(), vec![Decision::Forward]);
    }
}
