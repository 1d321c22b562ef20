//! Direction-to-key dispatch
//!
//! A recognized direction is looked up in the action table and turned into
//! a single synthetic key tap. Directions without a binding are accepted
//! and ignored.

use crate::action::types::{KeyTransition, SyntheticInput, VirtualKey};
use crate::processing::classifier::Direction;
use crate::session::error::GestureResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Default pause between the two halves of a key tap
pub const DEFAULT_TAP_DELAY: Duration = Duration::from_millis(10);

/// Sink for injected input (the platform's input-synthesis facility)
pub trait KeySynthesizer: Send + Sync {
    fn send(&self, input: SyntheticInput) -> GestureResult<()>;
}

impl<S: KeySynthesizer + ?Sized> KeySynthesizer for Arc<S> {
    fn send(&self, input: SyntheticInput) -> GestureResult<()> {
        (**self).send(input)
    }
}

/// Acts on a recognized gesture direction
///
/// Called synchronously from the hook thread, so implementations must not
/// block on anything slower than local input injection.
pub trait ActionDispatch: Send + Sync {
    fn dispatch(&self, direction: Direction) -> GestureResult<()>;
}

/// Direction -> key bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTable {
    bindings: BTreeMap<Direction, VirtualKey>,
}

impl ActionTable {
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, direction: Direction, key: VirtualKey) -> &mut Self {
        self.bindings.insert(direction, key);
        self
    }

    pub fn key_for(&self, direction: Direction) -> Option<VirtualKey> {
        self.bindings.get(&direction).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ActionTable {
    /// Right jumps to end of line, left to start of line
    fn default() -> Self {
        let mut table = Self::empty();
        table
            .bind(Direction::Right, VirtualKey::End)
            .bind(Direction::Left, VirtualKey::Home);
        table
    }
}

/// Dispatches gestures as key taps through a [`KeySynthesizer`]
pub struct KeyDispatcher<S> {
    table: ActionTable,
    synthesizer: S,
    tap_delay: Duration,
}

impl<S: KeySynthesizer> KeyDispatcher<S> {
    pub fn new(table: ActionTable, synthesizer: S) -> Self {
        Self {
            table,
            synthesizer,
            tap_delay: DEFAULT_TAP_DELAY,
        }
    }

    pub fn with_tap_delay(mut self, tap_delay: Duration) -> Self {
        self.tap_delay = tap_delay;
        self
    }

    /// One tap is an up transition, a short pause, then a down transition
    fn tap(&self, key: VirtualKey) -> GestureResult<()> {
        self.synthesizer
            .send(SyntheticInput::key(key, KeyTransition::Up))?;
        if !self.tap_delay.is_zero() {
            std::thread::sleep(self.tap_delay);
        }
        self.synthesizer
            .send(SyntheticInput::key(key, KeyTransition::Down))
    }
}

impl<S: KeySynthesizer> ActionDispatch for KeyDispatcher<S> {
    fn dispatch(&self, direction: Direction) -> GestureResult<()> {
        match self.table.key_for(direction) {
            Some(key) => {
                tracing::debug!("Gesture {} -> key {:?}", direction, key);
                self.tap(key)
            }
            None => {
                tracing::debug!("Gesture {} has no binding", direction);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::error::GestureError;
    use parking_lot::Mutex as ParkingMutex;

    #[derive(Default)]
    struct RecordingSynthesizer {
        sent: ParkingMutex<Vec<SyntheticInput>>,
    }

    impl KeySynthesizer for RecordingSynthesizer {
        fn send(&self, input: SyntheticInput) -> GestureResult<()> {
            self.sent.lock().push(input);
            Ok(())
        }
    }

    struct RejectingSynthesizer;

    impl KeySynthesizer for RejectingSynthesizer {
        fn send(&self, _input: SyntheticInput) -> GestureResult<()> {
            Err(GestureError::Synthesis("blocked by test".to_string()))
        }
    }

    fn dispatcher() -> KeyDispatcher<Arc<RecordingSynthesizer>> {
        KeyDispatcher::new(ActionTable::default(), Arc::new(RecordingSynthesizer::default()))
            .with_tap_delay(Duration::ZERO)
    }

    #[test]
    fn test_right_taps_end_up_then_down() {
        let dispatcher = dispatcher();
        dispatcher.dispatch(Direction::Right).unwrap();

        assert_eq!(
            *dispatcher.synthesizer.sent.lock(),
            vec![
                SyntheticInput::key(VirtualKey::End, KeyTransition::Up),
                SyntheticInput::key(VirtualKey::End, KeyTransition::Down),
            ]
        );
    }

    #[test]
    fn test_left_taps_home() {
        let dispatcher = dispatcher();
        dispatcher.dispatch(Direction::Left).unwrap();

        let sent = dispatcher.synthesizer.sent.lock();
        assert_eq!(sent.len(), 2);
        assert!(sent
            .iter()
            .all(|input| matches!(input, SyntheticInput::Keyboard { key: VirtualKey::Home, .. })));
    }

    #[test]
    fn test_unbound_direction_is_noop() {
        let dispatcher = dispatcher();
        for direction in [Direction::Up, Direction::LeftDown, Direction::Unknown] {
            dispatcher.dispatch(direction).unwrap();
        }
        assert!(dispatcher.synthesizer.sent.lock().is_empty());
    }

    #[test]
    fn test_synthesis_failure_propagates() {
        let dispatcher = KeyDispatcher::new(ActionTable::default(), RejectingSynthesizer);
        let result = dispatcher.dispatch(Direction::Right);
        assert!(matches!(result, Err(GestureError::Synthesis(_))));
    }

    #[test]
    fn test_tap_waits_between_transitions() {
        let dispatcher = KeyDispatcher::new(
            ActionTable::default(),
            Arc::new(RecordingSynthesizer::default()),
        )
        .with_tap_delay(Duration::from_millis(10));

        let start = std::time::Instant::now();
        dispatcher.dispatch(Direction::Right).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_table_from_config_json() {
        let table: ActionTable =
            serde_json::from_str(r#"{"up": "pageUp", "down": "pageDown"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.key_for(Direction::Up), Some(VirtualKey::PageUp));
        assert_eq!(table.key_for(Direction::Right), None);
    }
}
