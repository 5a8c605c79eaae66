//! L4 Atomic Layer: Frame pacing derived from UI configuration

use std::time::Duration;

pub use slidetext_core::config::UiConfig;

/// Extension trait for UiConfig with frame pacing helpers
pub trait AnimationConfigExt {
    /// Poll interval while nothing moves
    fn tick_duration(&self) -> Duration;

    /// Poll interval while a marquee is sliding
    fn animation_tick_duration(&self) -> Duration;
}

impl AnimationConfigExt for UiConfig {
    #[inline]
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pacing() {
        let config = UiConfig::default();
        assert_eq!(config.tick_duration(), Duration::from_millis(100));
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_zero_fps_falls_back() {
        let config = UiConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_custom_fps() {
        let config = UiConfig {
            animation_fps: 20,
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(50));
        assert_eq!(config.tick_duration(), Duration::from_millis(1));
    }
}
