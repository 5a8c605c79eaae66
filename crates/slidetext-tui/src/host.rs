//! Terminal implementation of the marquee host primitives

use std::time::Instant;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use slidetext_core::marquee::{Instance, Label, MarqueeHost, Motion, SlidingLabel};
use unicode_width::UnicodeWidthStr;

use crate::animation::MotionPlayer;

/// How an idle label that overflows its container is cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truncation {
    /// Cut at the container edge
    #[default]
    Clip,
    /// End with "…"
    Ellipsis,
}

/// Style payload of a terminal label, copied verbatim into every copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub style: Style,
    /// Placement of a label that fits (sliding labels are left anchored)
    pub alignment: Alignment,
    pub truncation: Truncation,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            style: Style::default(),
            alignment: Alignment::Left,
            truncation: Truncation::Clip,
        }
    }
}

impl TextStyle {
    pub fn fg(mut self, color: Color) -> Self {
        self.style = self.style.fg(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.style = self.style.bg(color);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }
}

/// A marquee drawn in terminal cells, velocity in cells per second
pub type Marquee = SlidingLabel<TextStyle, TerminalHost>;

/// Create an idle terminal marquee
pub fn new_marquee(
    text: impl Into<String>,
    style: TextStyle,
    spacing: f64,
) -> slidetext_core::Result<Marquee> {
    SlidingLabel::new(Label::new(text, style), TerminalHost::new(), spacing)
}

/// Measures text with `unicode-width` and runs motions on a [`MotionPlayer`]
#[derive(Debug, Clone, Default)]
pub struct TerminalHost {
    player: MotionPlayer,
    /// Anchor used instead of the wall clock (tests, replays)
    fixed_now: Option<Instant>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor every scheduled motion at `now` instead of `Instant::now()`
    pub fn with_fixed_clock(now: Instant) -> Self {
        Self {
            player: MotionPlayer::new(),
            fixed_now: Some(now),
        }
    }

    fn now(&self) -> Instant {
        self.fixed_now.unwrap_or_else(Instant::now)
    }

    pub fn player(&self) -> &MotionPlayer {
        &self.player
    }

    /// Horizontal offset of `instance` in cells
    pub fn offset_at(&self, instance: Instance, now: Instant) -> f64 {
        self.player.offset_at(instance, now)
    }
}

impl MarqueeHost<TextStyle> for TerminalHost {
    fn measure(&self, label: &Label<TextStyle>) -> f64 {
        label.text().width() as f64
    }

    fn set_offset(&mut self, instance: Instance, offset: f64) {
        self.player.hold(instance, offset);
    }

    fn animate(&mut self, instance: Instance, motion: Motion) {
        let start = self.now();
        self.player.play(instance, motion, start);
    }

    fn cancel_animations(&mut self, instance: Instance) {
        self.player.cancel(instance);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use slidetext_core::marquee::StartOptions;

    use super::*;

    #[test]
    fn test_measure_uses_display_width() {
        let host = TerminalHost::new();
        assert_eq!(host.measure(&Label::new("abc", TextStyle::default())), 3.0);
        // CJK is two cells per char
        assert_eq!(host.measure(&Label::new("日本", TextStyle::default())), 4.0);
    }

    #[test]
    fn test_marquee_runs_on_terminal_host() {
        let epoch = Instant::now();
        let label = Label::new("0123456789abcdefghij", TextStyle::default());
        let mut marquee =
            SlidingLabel::new(label, TerminalHost::with_fixed_clock(epoch), 2.0).unwrap();
        marquee.set_display_width(10.0);
        marquee.start(StartOptions::new(10.0, 1.0));
        marquee.poll();
        assert!(marquee.is_sliding());

        let host = marquee.host();
        assert_eq!(host.player().motion_count(), 3);
        assert_eq!(host.player().started_at(Instance::Primary), Some(epoch));
        assert_eq!(host.offset_at(Instance::Primary, epoch), 0.0);
        assert_eq!(host.offset_at(Instance::Copy(0), epoch), 10.0);
        // one second into the motion the primary has moved ten cells
        let later = epoch + Duration::from_secs(2);
        assert!((host.offset_at(Instance::Primary, later) + 10.0).abs() < 1e-9);

        marquee.stop();
        assert_eq!(marquee.host().player().motion_count(), 0);
        assert_eq!(marquee.host().offset_at(Instance::Copy(0), later), 0.0);
    }

    #[test]
    fn test_style_builder() {
        let style = TextStyle::default()
            .fg(Color::Red)
            .alignment(Alignment::Center)
            .truncation(Truncation::Ellipsis);
        assert_eq!(style.style.fg, Some(Color::Red));
        assert_eq!(style.alignment, Alignment::Center);
        assert_eq!(style.truncation, Truncation::Ellipsis);
    }
}
