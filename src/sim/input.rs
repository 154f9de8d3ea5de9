//! Per-tick input sampling
//!
//! The platform reports which keys are held right now. Turning the confirm
//! key into a one-shot action is the simulation's job.

use serde::{Deserialize, Serialize};

/// Keys held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
}

/// How a held confirm key is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmMode {
    /// Fire once when the key goes from released to held
    #[default]
    Edge,
    /// Fire on every tick the key is held
    Held,
}

/// Confirm key edge detector
#[derive(Debug, Clone, Default)]
pub struct ConfirmEdge {
    mode: ConfirmMode,
    was_held: bool,
}

impl ConfirmEdge {
    pub fn new(mode: ConfirmMode) -> Self {
        Self {
            mode,
            was_held: false,
        }
    }

    pub fn mode(&self) -> ConfirmMode {
        self.mode
    }

    /// Sample this tick's held state; returns whether confirm fires.
    ///
    /// Must be called every tick so a key held through a round boundary
    /// is not mistaken for a fresh press.
    pub fn sample(&mut self, held: bool) -> bool {
        let fired = match self.mode {
            ConfirmMode::Edge => held && !self.was_held,
            ConfirmMode::Held => held,
        };
        self.was_held = held;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_mode_fires_once_per_press() {
        let mut edge = ConfirmEdge::new(ConfirmMode::Edge);
        let fired: Vec<bool> = [false, true, true, true, false, true]
            .into_iter()
            .map(|held| edge.sample(held))
            .collect();
        assert_eq!(fired, vec![false, true, false, false, false, true]);
    }

    #[test]
    fn test_held_mode_fires_every_tick() {
        let mut edge = ConfirmEdge::new(ConfirmMode::Held);
        assert!(edge.sample(true));
        assert!(edge.sample(true));
        assert!(!edge.sample(false));
    }

    #[test]
    fn test_confirm_mode_serde_names() {
        let mode: ConfirmMode = serde_json::from_str("\"held\"").unwrap();
        assert_eq!(mode, ConfirmMode::Held);
        assert_eq!(serde_json::to_string(&ConfirmMode::Edge).unwrap(), "\"edge\"");
    }
}
