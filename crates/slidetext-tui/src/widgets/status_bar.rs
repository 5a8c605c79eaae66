use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => Self::summary(app),
        };

        let help_hint = " q:quit j/k:select space:start/stop r:restart s:text +/-:speed ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.status_fg).bg(theme.status_bg),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bg)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.dim).bg(theme.status_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// State of the selected marquee and the motion parameters
    pub fn summary(app: &App) -> String {
        let state = match app.selected_marquee() {
            Some(m) if m.is_sliding() => "SLIDING",
            Some(m) if m.has_pending_start() => "STARTING",
            Some(_) => "IDLE",
            None => "-",
        };
        format!(
            " {} | {}/{} sliding | v={:.0} cells/s | spacing={:.0}",
            state,
            app.sliding_count(),
            app.rows.len(),
            app.options.velocity,
            app.config.marquee.spacing,
        )
    }
}
