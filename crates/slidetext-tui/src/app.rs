use std::sync::Arc;

use anyhow::Result;
use slidetext_core::marquee::{ResumeSignal, StartOptions};
use slidetext_core::AppConfig;
use tracing::info;

use crate::host::{new_marquee, Marquee, TextStyle, Truncation};
use crate::theme::Theme;

/// Velocity step for `+` / `-`, in cells per second
const VELOCITY_STEP: f64 = 2.0;

/// Texts shown when none are given on the command line
pub const DEFAULT_TEXTS: [&str; 3] = [
    "slidetext keeps long headlines moving without a seam or a jump",
    "Short fits",
    "日本語のテキストも二セル幅の文字として正しくスクロールします",
];

/// One marquee row and the texts it can cycle through
pub struct MarqueeRow {
    pub marquee: Marquee,
    texts: Vec<String>,
    text_index: usize,
}

impl MarqueeRow {
    fn cycle_text(&mut self) {
        if self.texts.is_empty() {
            return;
        }
        self.text_index = (self.text_index + 1) % self.texts.len();
        self.marquee.set_text(self.texts[self.text_index].clone());
    }
}

/// Demo application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub rows: Vec<MarqueeRow>,
    pub selected: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Velocity and delay used by the next start
    pub options: StartOptions,
    resume: ResumeSignal,
}

impl App {
    /// Build one marquee per text. Every row can cycle through all texts.
    pub fn new(config: Arc<AppConfig>, theme: Theme, texts: Vec<String>) -> Result<Self> {
        let texts = if texts.is_empty() {
            DEFAULT_TEXTS.iter().map(|t| t.to_string()).collect()
        } else {
            texts
        };

        let resume = ResumeSignal::new();
        let style = TextStyle::default()
            .fg(theme.fg)
            .bg(theme.bg)
            .truncation(Truncation::Ellipsis);

        let rows = texts
            .iter()
            .enumerate()
            .map(|(i, text)| -> Result<MarqueeRow> {
                let marquee = new_marquee(text.clone(), style, config.marquee.spacing)?
                    .with_resume_signal(&resume);
                Ok(MarqueeRow {
                    marquee,
                    texts: texts.clone(),
                    text_index: i,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            options: config.marquee.start_options(),
            config,
            theme,
            rows,
            selected: 0,
            should_quit: false,
            status_message: None,
            resume,
        })
    }

    pub fn selected_marquee(&self) -> Option<&Marquee> {
        self.rows.get(self.selected).map(|row| &row.marquee)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Queue a start on every row
    pub fn start_all(&mut self) {
        let options = self.options;
        for row in &mut self.rows {
            row.marquee.start(options);
        }
    }

    /// Stop the selected row if it slides (or is about to), start it otherwise
    pub fn toggle_selected(&mut self) {
        let options = self.options;
        let Some(row) = self.rows.get_mut(self.selected) else {
            return;
        };
        if row.marquee.is_sliding() || row.marquee.has_pending_start() {
            row.marquee.stop();
            self.set_status("Stopped");
        } else {
            row.marquee.start(options);
            self.set_status("Starting");
        }
    }

    pub fn restart_selected(&mut self) {
        if let Some(row) = self.rows.get_mut(self.selected) {
            row.marquee.restart();
        }
    }

    /// Restart every started row, e.g. after the container width changed
    pub fn restart_all(&mut self) {
        for row in &mut self.rows {
            row.marquee.restart();
        }
    }

    /// Swap the selected row to its next text. The running session keeps
    /// the old text until restarted.
    pub fn cycle_text(&mut self) {
        if let Some(row) = self.rows.get_mut(self.selected) {
            row.cycle_text();
            self.set_status("Text changed (r to restart)");
        }
    }

    /// Change velocity and restart rows that were started with the old one
    pub fn adjust_velocity(&mut self, steps: i32) {
        let velocity = (self.options.velocity + steps as f64 * VELOCITY_STEP).max(0.0);
        self.options.velocity = velocity;
        info!(velocity, "velocity changed");

        let options = self.options;
        for row in &mut self.rows {
            if row.marquee.options().is_some() {
                row.marquee.stop();
                row.marquee.start(options);
            }
        }
        self.set_status(format!("Velocity: {:.0} cells/s", velocity));
    }

    /// Broadcast "resumed" to every marquee
    pub fn notify_resumed(&mut self) {
        let reached = self.resume.notify_resumed();
        info!(reached, "terminal focus regained");
    }

    /// Run deferred marquee work; call after each draw
    pub fn poll(&mut self) {
        for row in &mut self.rows {
            row.marquee.poll();
        }
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        let now = std::time::Instant::now();
        self.rows.iter().any(|row| {
            row.marquee.has_pending_start() || row.marquee.host().player().needs_update(now)
        })
    }

    pub fn sliding_count(&self) -> usize {
        self.rows.iter().filter(|row| row.marquee.is_sliding()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(texts: &[&str]) -> App {
        let texts = texts.iter().map(|t| t.to_string()).collect();
        App::new(Arc::new(AppConfig::default()), Theme::default(), texts).unwrap()
    }

    fn lay_out(app: &mut App, width: f64) {
        for row in &mut app.rows {
            row.marquee.set_display_width(width);
        }
    }

    #[test]
    fn test_default_texts() {
        let app = app(&[]);
        assert_eq!(app.rows.len(), DEFAULT_TEXTS.len());
        assert_eq!(app.options.velocity, 10.0);
    }

    #[test]
    fn test_start_all_only_slides_overflowing_rows() {
        let mut app = app(&["a very long line of text indeed", "tiny"]);
        app.start_all();
        lay_out(&mut app, 20.0);
        app.poll();
        assert!(app.rows[0].marquee.is_sliding());
        assert!(!app.rows[1].marquee.is_sliding());
        assert_eq!(app.sliding_count(), 1);
        assert!(app.needs_fast_update());
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app(&["a very long line of text indeed"]);
        lay_out(&mut app, 20.0);
        app.toggle_selected();
        app.poll();
        assert!(app.rows[0].marquee.is_sliding());

        app.toggle_selected();
        assert!(!app.rows[0].marquee.is_sliding());
        assert_eq!(app.rows[0].marquee.copy_count(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Stopped"));
    }

    #[test]
    fn test_resume_reaches_every_row() {
        let mut app = app(&["a very long line of text indeed", "another long line of text here"]);
        app.start_all();
        lay_out(&mut app, 20.0);
        app.poll();
        app.notify_resumed();
        app.poll();
        assert_eq!(app.sliding_count(), 2);
    }

    #[test]
    fn test_adjust_velocity_restarts_started_rows() {
        let mut app = app(&["a very long line of text indeed", "another long line of text here"]);
        lay_out(&mut app, 20.0);
        app.rows[0].marquee.start(app.options);
        app.poll();

        app.adjust_velocity(1);
        assert_eq!(app.options.velocity, 12.0);
        assert!(app.rows[0].marquee.has_pending_start());
        assert!(!app.rows[1].marquee.has_pending_start());

        app.poll();
        let options = app.rows[0].marquee.options().unwrap();
        assert_eq!(options.velocity, 12.0);
    }

    #[test]
    fn test_restart_all_picks_up_new_width() {
        let mut app = app(&["a very long line of text indeed", "0123456789abcdefghijk"]);
        app.start_all();
        lay_out(&mut app, 20.0);
        app.poll();
        assert_eq!(app.sliding_count(), 2);
        let before = app.rows[0].marquee.schedule().unwrap().copies[0].from;
        assert_eq!(before, 20.0);

        app.restart_all();
        lay_out(&mut app, 25.0);
        app.poll();

        let wide = &app.rows[0].marquee;
        assert!(wide.is_sliding());
        assert_eq!(wide.schedule().unwrap().copies[0].from, 25.0);
        assert_eq!(wide.copy_count(), 2);

        // 21 cells now fit in 25
        let fits = &app.rows[1].marquee;
        assert!(!fits.is_sliding());
        assert!(!fits.has_pending_start());
        assert_eq!(fits.copy_count(), 0);
    }

    #[test]
    fn test_velocity_never_negative() {
        let mut app = app(&["x"]);
        app.adjust_velocity(-100);
        assert_eq!(app.options.velocity, 0.0);
    }

    #[test]
    fn test_cycle_text_then_restart() {
        let mut app = app(&["first long text that overflows", "second"]);
        lay_out(&mut app, 10.0);
        app.start_all();
        app.poll();
        assert!(app.rows[0].marquee.is_sliding());

        app.cycle_text();
        assert_eq!(app.rows[0].marquee.label().text(), "second");
        assert!(app.rows[0].marquee.is_sliding());

        app.restart_selected();
        app.poll();
        assert!(!app.rows[0].marquee.is_sliding());
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = app(&["a", "b"]);
        app.select_prev();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
    }
}
