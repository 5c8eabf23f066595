//! Store - the single owner of the current game state
//!
//! The store holds one [`GameState`] value and replaces it with the result of
//! every accepted command. A failed command leaves the held state untouched.

use crate::command::Command;
use crate::config::EngineConfig;
use crate::engine::spawn_tetromino;
use crate::error::Result;
use crate::snapshot::GameSnapshot;
use crate::state::GameState;
use crate::tetromino::validate_catalog;

#[derive(Debug, Clone)]
pub struct Store {
    state: GameState,
}

impl Store {
    /// Validate the configuration and the piece catalog, then hold an
    /// initial state
    pub fn new(config: EngineConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        validate_catalog()?;
        Ok(Self {
            state: GameState::new(config, seed),
        })
    }

    /// Spawn the first piece
    pub fn start(&mut self) -> &GameState {
        self.state = spawn_tetromino(&self.state, None);
        &self.state
    }

    pub fn apply(&mut self, command: Command) -> Result<&GameState> {
        self.state = self.state.apply(command)?;
        Ok(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::types::Move;

    #[test]
    fn test_new_rejects_bad_config() {
        let config = EngineConfig {
            width: 2,
            ..EngineConfig::default()
        };
        assert!(matches!(
            Store::new(config, 1),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_start_spawns_piece() {
        let mut store = Store::new(EngineConfig::default(), 1).unwrap();
        assert_eq!(store.state().current_piece(), None);
        assert!(store.start().current_piece().is_some());
    }

    #[test]
    fn test_failed_command_keeps_state() {
        let mut store = Store::new(EngineConfig::default(), 1).unwrap();
        let before = store.state().clone();
        assert!(store.apply(Command::Rotate).is_err());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_apply_replaces_state() {
        let mut store = Store::new(EngineConfig::default(), 1).unwrap();
        store.start();
        let x = store.state().foreground().x_offset();
        store.apply(Command::Move(Move::Left)).unwrap();
        assert_eq!(store.snapshot().active.map(|a| a.x), Some(x - 1));
    }
}
