//! Console configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_REWARD_CODE: &str = "REWARD20OFF";
pub const DEFAULT_HANDOFF_TTL_SECS: u64 = 900;
pub const DEFAULT_EVENT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Reward code sent on every approval. The approve flow uses this
    /// console-wide code, not the campaign's reward configuration.
    pub reward_code: String,
    /// How long a stashed campaign handoff stays consumable.
    pub handoff_ttl: Duration,
    /// Per-subscriber event channel depth. Full channels drop events.
    pub event_queue_capacity: usize,
}

impl ConsoleConfig {
    /// Build typed console config from environment variables.
    ///
    /// Optional:
    /// - `REWARD_CODE`: default `REWARD20OFF`
    /// - `HANDOFF_TTL_SECS`: default 900
    /// - `EVENT_QUEUE_CAPACITY`: default 64
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            reward_code: std::env::var("REWARD_CODE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REWARD_CODE.to_string()),
            handoff_ttl: Duration::from_secs(env_parse("HANDOFF_TTL_SECS", DEFAULT_HANDOFF_TTL_SECS)),
            event_queue_capacity: env_parse("EVENT_QUEUE_CAPACITY", DEFAULT_EVENT_QUEUE_CAPACITY),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            reward_code: DEFAULT_REWARD_CODE.to_string(),
            handoff_ttl: Duration::from_secs(DEFAULT_HANDOFF_TTL_SECS),
            event_queue_capacity: DEFAULT_EVENT_QUEUE_CAPACITY,
        }
    }
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
