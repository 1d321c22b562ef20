use crate::action::dispatcher::ActionDispatch;
use crate::capture::input::types::{Decision, PointerEvent, PointerEventKind, TriggerButton};
use crate::config::GestureConfig;
use crate::processing::classifier::{classify, Direction, ToleranceWindow};
use crate::processing::geometry::angle_between;
use crate::processing::trajectory::Trajectory;
use crate::session::error::{GestureError, GestureResult};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Points reserved up front; the buffer grows past this on long gestures
const INITIAL_CAPACITY: usize = 64;

/// Turns the raw pointer stream into gestures
///
/// Holds the button state and the trajectory of the gesture in progress.
/// Must only be driven from the hook thread; it is the sole writer of both.
pub struct GestureInterceptor {
    trigger: TriggerButton,
    tolerance: ToleranceWindow,
    min_samples: usize,
    dispatcher: Arc<dyn ActionDispatch>,

    capturing: bool,
    started_at_ms: Option<u32>,
    trajectory: Trajectory,
}

impl GestureInterceptor {
    pub fn new(config: &GestureConfig, dispatcher: Arc<dyn ActionDispatch>) -> Self {
        Self {
            trigger: config.trigger,
            tolerance: config.tolerance(),
            min_samples: config.min_samples,
            dispatcher,
            capturing: false,
            started_at_ms: None,
            trajectory: Trajectory::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Handle one event and decide whether it continues down the hook chain
    pub fn on_event(&mut self, event: &PointerEvent) -> Decision {
        match event.kind {
            PointerEventKind::ButtonDown(button) if self.trigger.matches(button) => {
                self.trajectory.clear();
                self.capturing = true;
                self.started_at_ms = Some(event.time_ms);
                Decision::Consume
            }
            PointerEventKind::Move => {
                if self.capturing {
                    self.trajectory.append(event.point);
                }
                Decision::Forward
            }
            PointerEventKind::ButtonUp(button) if self.trigger.matches(button) => {
                self.finish_gesture(event)
            }
            _ => Decision::Forward,
        }
    }

    /// Drop any gesture in progress
    pub fn reset(&mut self) {
        self.capturing = false;
        self.started_at_ms = None;
        self.trajectory.clear();
    }

    fn finish_gesture(&mut self, event: &PointerEvent) -> Decision {
        self.capturing = false;
        match self.started_at_ms.take() {
            Some(start) => tracing::debug!(
                "Gesture released with {} points after {}ms",
                self.trajectory.count(),
                elapsed_ms(start, event.time_ms)
            ),
            None => tracing::debug!("Button released without a captured press"),
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.recognize()))
            .unwrap_or_else(|payload| Err(GestureError::Dispatch(panic_message(&*payload))));
        self.trajectory.clear();

        match outcome {
            Ok(Some(_)) => Decision::Consume,
            Ok(None) => Decision::Forward,
            Err(e) => {
                tracing::warn!("Gesture dropped, forwarding button release: {}", e);
                Decision::Forward
            }
        }
    }

    /// Classify the buffered gesture and dispatch it, returning the
    /// direction when one was recognized
    fn recognize(&self) -> GestureResult<Option<Direction>> {
        if self.trajectory.count() < self.min_samples {
            return Ok(None);
        }
        let Some((first, last)) = self.trajectory.endpoints() else {
            return Ok(None);
        };

        let degrees = angle_between(first, last);
        let direction = classify(degrees, self.tolerance);
        tracing::debug!("Gesture angle {:.1} classified as {}", degrees, direction);

        if direction == Direction::Unknown {
            return Ok(None);
        }

        self.dispatcher.dispatch(direction)?;
        Ok(Some(direction))
    }
}

/// Milliseconds between two hook timestamps; the platform counter wraps
fn elapsed_ms(start: u32, end: u32) -> u32 {
    end.wrapping_sub(start)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
