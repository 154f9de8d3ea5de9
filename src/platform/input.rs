//! Held-key input collaborator

use crate::sim::HeldKeys;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Space: restart / next level
    Confirm,
}

/// Anything that can report which keys are currently held
pub trait InputSource {
    fn is_held(&self, key: Key) -> bool;
}

/// A fixed snapshot is its own input source (scripted input, autopilot)
impl InputSource for HeldKeys {
    fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Confirm => self.confirm,
        }
    }
}

/// Sample every key once for this tick
pub fn poll_keys(input: &dyn InputSource) -> HeldKeys {
    HeldKeys {
        left: input.is_held(Key::Left),
        right: input.is_held(Key::Right),
        confirm: input.is_held(Key::Confirm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Keyboard(HashSet<Key>);

    impl InputSource for Keyboard {
        fn is_held(&self, key: Key) -> bool {
            self.0.contains(&key)
        }
    }

    #[test]
    fn test_poll_keys() {
        let keyboard = Keyboard([Key::Right, Key::Confirm].into_iter().collect());
        assert_eq!(
            poll_keys(&keyboard),
            HeldKeys {
                left: false,
                right: true,
                confirm: true,
            }
        );
    }

    #[test]
    fn test_held_keys_round_trip() {
        let keys = HeldKeys {
            left: true,
            right: false,
            confirm: false,
        };
        assert_eq!(poll_keys(&keys), keys);
    }
}
