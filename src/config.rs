//! Timing configuration shared by the game screens.

use std::{fmt, time::Duration};

use log::{debug, warn};

/// Milliseconds between snake steps unless overridden.
pub const DEFAULT_SNAKE_TICK_MILLIS: u64 = 100;
/// Milliseconds the opponent "thinks" before replying unless overridden.
pub const DEFAULT_OPPONENT_DELAY_MILLIS: u64 = 1000;

pub const SNAKE_TICK_VAR: &str = "RUSTARCADE_SNAKE_TICK_MS";
pub const OPPONENT_DELAY_VAR: &str = "RUSTARCADE_OPPONENT_DELAY_MS";

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    NotANumber { var: &'static str, value: String },
    Zero { var: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotANumber { var, value } => {
                write!(f, "{var} must be a number of milliseconds, got {value:?}")
            }
            ConfigError::Zero { var } => write!(f, "{var} must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Time between two snake steps.
    pub snake_tick: Duration,
    /// Pause between the human's move and the opponent's reply.
    pub opponent_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            snake_tick: Duration::from_millis(DEFAULT_SNAKE_TICK_MILLIS),
            opponent_delay: Duration::from_millis(DEFAULT_OPPONENT_DELAY_MILLIS),
        }
    }
}

impl GameConfig {
    /// Reads overrides from the environment. Bad values are logged and the
    /// default is kept.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable lookup, falling back to defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |var: &'static str, default: Duration| match lookup(var) {
            None => default,
            Some(value) => parse_millis(var, &value).unwrap_or_else(|e| {
                warn!("{e}. Using {}ms", default.as_millis());
                default
            }),
        };
        let config = Self {
            snake_tick: read(SNAKE_TICK_VAR, defaults.snake_tick),
            opponent_delay: read(OPPONENT_DELAY_VAR, defaults.opponent_delay),
        };
        debug!("Game config: {config:?}");
        config
    }
}

/// Parses a strictly positive millisecond count.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `value` is not an integer or is zero.
pub fn parse_millis(var: &'static str, value: &str) -> Result<Duration> {
    let millis: u64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber {
            var,
            value: value.to_string(),
        })?;
    if millis == 0 {
        return Err(ConfigError::Zero { var });
    }
    Ok(Duration::from_millis(millis))
}
