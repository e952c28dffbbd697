//! Environment configuration.
//!
//! `EnvConfig` fixes the board shape, the win length, and the number of
//! players for every state an environment produces. It is a small `Copy`
//! value embedded in each state, so states never point back at the
//! environment that created them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum number of players (player ids are `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Complete environment configuration.
///
/// Build with [`EnvConfig::new`] and the `with_*` methods, then call
/// [`EnvConfig::validate`] (environments validate on construction).
/// Deserialization always validates.
///
/// ```
/// use gomoku_env::core::EnvConfig;
///
/// let config = EnvConfig::new(15, 5).with_num_player(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.action_space_size(), 225);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEnvConfig")]
pub struct EnvConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Stones in a row needed to win.
    pub num_win: usize,

    /// Number of players taking turns (2-255).
    pub num_player: usize,
}

impl EnvConfig {
    /// Create a two-player configuration.
    #[must_use]
    pub const fn new(board_size: usize, num_win: usize) -> Self {
        Self {
            board_size,
            num_win,
            num_player: 2,
        }
    }

    /// Set the number of players.
    #[must_use]
    pub const fn with_num_player(mut self, num_player: usize) -> Self {
        self.num_player = num_player;
        self
    }

    /// Set the win length.
    #[must_use]
    pub const fn with_num_win(mut self, num_win: usize) -> Self {
        self.num_win = num_win;
        self
    }

    /// Check the construction parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if the board is empty, the win
    /// length is zero or longer than the board, or there are fewer than two
    /// (or more than 255) players.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(Error::config("board_size must be positive"));
        }
        if self.board_size.checked_mul(self.board_size).is_none() {
            return Err(Error::config(format!(
                "board_size {} is too large",
                self.board_size
            )));
        }
        if self.num_win == 0 {
            return Err(Error::config("num_win must be positive"));
        }
        if self.num_win > self.board_size {
            return Err(Error::config(format!(
                "num_win {} exceeds board_size {}",
                self.num_win, self.board_size
            )));
        }
        if self.num_player < 2 {
            return Err(Error::config(format!(
                "num_player must be at least 2, got {}",
                self.num_player
            )));
        }
        if self.num_player > MAX_PLAYERS {
            return Err(Error::config(format!(
                "num_player must be at most {}, got {}",
                MAX_PLAYERS, self.num_player
            )));
        }
        Ok(())
    }

    /// Number of cells on the board, which is also the size of the action space.
    #[must_use]
    pub const fn action_space_size(&self) -> usize {
        self.board_size * self.board_size
    }
}

#[derive(Deserialize)]
struct RawEnvConfig {
    board_size: usize,
    num_win: usize,
    #[serde(default = "default_num_player")]
    num_player: usize,
}

fn default_num_player() -> usize {
    2
}

impl TryFrom<RawEnvConfig> for EnvConfig {
    type Error = Error;

    fn try_from(raw: RawEnvConfig) -> Result<Self> {
        let config = EnvConfig {
            board_size: raw.board_size,
            num_win: raw.num_win,
            num_player: raw.num_player,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = EnvConfig::new(9, 4).with_num_player(3);

        assert_eq!(config.board_size, 9);
        assert_eq!(config.num_win, 4);
        assert_eq!(config.num_player, 3);
        assert_eq!(config.action_space_size(), 81);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_num_win_revalidates() {
        let base = EnvConfig::new(15, 5);
        let longer = base.with_num_win(7);

        assert_eq!(longer.num_win, 7);
        assert_eq!(longer.board_size, 15);
        assert!(longer.validate().is_ok());
        assert!(base.with_num_win(16).validate().is_err());
    }

    #[test]
    fn test_default_two_players() {
        assert_eq!(EnvConfig::new(3, 3).num_player, 2);
    }

    #[test]
    fn test_rejects_empty_board() {
        let err = EnvConfig::new(0, 0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_rejects_long_win() {
        assert!(EnvConfig::new(3, 4).validate().is_err());
        assert!(EnvConfig::new(3, 0).validate().is_err());
    }

    #[test]
    fn test_rejects_player_counts() {
        assert!(EnvConfig::new(3, 3).with_num_player(1).validate().is_err());
        assert!(EnvConfig::new(3, 3).with_num_player(256).validate().is_err());
        assert!(EnvConfig::new(3, 3).with_num_player(255).validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = EnvConfig::new(15, 5).with_num_player(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialization_defaults_and_validates() {
        let config: EnvConfig =
            serde_json::from_str(r#"{"board_size": 5, "num_win": 4}"#).unwrap();
        assert_eq!(config.num_player, 2);

        let bad = serde_json::from_str::<EnvConfig>(r#"{"board_size": 3, "num_win": 5}"#);
        assert!(bad.is_err());
    }
}
