//! Runtime configuration, read from `ISO_DUNGEON_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::FPS;

pub const DEFAULT_GLYPH_PATH: &str = "assets/glyphs.json";

/// Accepted range for `ISO_DUNGEON_FPS`.
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Glyph atlas JSON. A missing file falls back to placeholders.
    pub glyph_path: PathBuf,
    /// Where log records go while the terminal is in the alternate screen.
    pub log_path: Option<PathBuf>,
    /// Simulation and render rate.
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            glyph_path: PathBuf::from(DEFAULT_GLYPH_PATH),
            log_path: None,
            fps: FPS,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` uses the process
    /// environment; tests pass a closure.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let glyph_path = non_empty("ISO_DUNGEON_GLYPHS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GLYPH_PATH));

        let log_path = non_empty("ISO_DUNGEON_LOG_PATH").map(PathBuf::from);

        let fps = non_empty("ISO_DUNGEON_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .map(|fps| fps.clamp(MIN_FPS, MAX_FPS))
            .unwrap_or(FPS);

        Self {
            glyph_path,
            log_path,
            fps,
        }
    }

    /// Wall-clock budget of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(MIN_FPS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.fps, 60);
    }

    #[test]
    fn reads_overrides() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("ISO_DUNGEON_GLYPHS", "/tmp/g.json"),
            ("ISO_DUNGEON_LOG_PATH", " /tmp/dungeon.log "),
            ("ISO_DUNGEON_FPS", "30"),
        ]));
        assert_eq!(cfg.glyph_path, PathBuf::from("/tmp/g.json"));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/dungeon.log")));
        assert_eq!(cfg.fps, 30);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("ISO_DUNGEON_LOG_PATH", "   "),
            ("ISO_DUNGEON_FPS", "fast"),
        ]));
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.fps, FPS);

        let cfg = GameConfig::from_lookup(lookup(&[("ISO_DUNGEON_FPS", "10000")]));
        assert_eq!(cfg.fps, MAX_FPS);
        let cfg = GameConfig::from_lookup(lookup(&[("ISO_DUNGEON_FPS", "0")]));
        assert_eq!(cfg.fps, MIN_FPS);
    }

    #[test]
    fn tick_duration_matches_fps() {
        let cfg = GameConfig {
            fps: 50,
            ..GameConfig::default()
        };
        assert_eq!(cfg.tick_duration(), Duration::from_millis(20));
    }
}
