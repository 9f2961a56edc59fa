//! Per-level tuning values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Static parameters describing one level of the campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Display name of the level.
    pub name: String,
    /// Countdown the player has to reach the goal, in whole seconds.
    pub time_limit_secs: u32,
    /// Maze complexity tier in `1..=3`.
    pub complexity: u8,
    /// Accent color used by renderers, as a CSS hex string.
    pub accent: String,
}

impl LevelConfig {
    /// Creates a level configuration.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        time_limit_secs: u32,
        complexity: u8,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time_limit_secs,
            complexity,
            accent: accent.into(),
        }
    }

    /// Countdown expressed as a duration.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(u64::from(self.time_limit_secs))
    }
}

/// Built-in three-level campaign.
#[must_use]
pub fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new("Circuito Básico", 120, 1, "#10b981"),
        LevelConfig::new("Núcleo Dinámico", 150, 2, "#f59e0b"),
        LevelConfig::new("Laberinto Caótico", 180, 3, "#ef4444"),
    ]
}

#[cfg(test)]
mod tests {
    use super::default_levels;
    use std::time::Duration;

    #[test]
    fn default_campaign_escalates() {
        let levels = default_levels();
        assert_eq!(levels.len(), 3);
        let tiers: Vec<u8> = levels.iter().map(|level| level.complexity).collect();
        assert_eq!(tiers, vec![1, 2, 3]);
        assert_eq!(levels[0].time_limit(), Duration::from_secs(120));
        assert_eq!(levels[2].time_limit(), Duration::from_secs(180));
    }
}
