use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use slidetext_core::config::UiConfig;

use crate::animation::AnimationConfigExt;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick_rate: Duration,
}

impl EventHandler {
    /// Poll at `tick_rate_ms` when idle, `animation_fps` while something moves
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            tick_rate: config.tick_duration(),
            animation_tick_rate: config.animation_tick_duration(),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Map a crossterm event to an application event
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Only handle key press events, ignore release events
        // (crossterm 0.27+ sends release events on some systems)
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::FocusGained => Some(AppEvent::Resumed),
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Terminal regained focus; in-flight animations are rebuilt
    Resumed,
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;

    #[test]
    fn test_translate() {
        assert!(matches!(translate(Event::FocusGained), Some(AppEvent::Resumed)));
        assert!(translate(Event::FocusLost).is_none());
        assert!(matches!(translate(Event::Resize(80, 24)), Some(AppEvent::Resize(80, 24))));

        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(translate(Event::Key(press)), Some(AppEvent::Key(_))));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert!(translate(Event::Key(release)).is_none());
    }

    #[test]
    fn test_animation_rate() {
        let config = UiConfig {
            tick_rate_ms: 250,
            animation_fps: 50,
            ..Default::default()
        };
        let handler = EventHandler::from_config(&config);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
        assert_eq!(handler.animation_tick_rate, Duration::from_millis(20));
    }
}
