use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::host::{Marquee, Truncation};
use crate::theme::Theme;

/// Stands in for the visible half of a wide glyph cut by the container edge
const CLIPPED_GLYPH: char = '·';

pub struct MarqueeWidget;

impl MarqueeWidget {
    /// Lay out and draw one marquee inside a bordered row.
    ///
    /// The inner width is handed to the marquee as its container width, so a
    /// start queued before the first draw sees the real size on its next poll.
    pub fn render(frame: &mut Frame, area: Rect, marquee: &mut Marquee, theme: &Theme, selected: bool) {
        let border_color = if selected { theme.accent } else { theme.border };
        let state = if marquee.is_sliding() {
            " sliding "
        } else if marquee.has_pending_start() {
            " starting "
        } else {
            " idle "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(state)
            .style(Style::default().bg(theme.bg));

        let inner = block.inner(area);
        marquee.set_display_width(inner.width as f64);

        frame.render_widget(block, area);
        frame.render_widget(
            MarqueeView {
                marquee,
                now: Instant::now(),
            },
            inner,
        );
    }
}

/// One frame of a marquee sampled at `now`
pub struct MarqueeView<'a> {
    pub marquee: &'a Marquee,
    pub now: Instant,
}

impl Widget for MarqueeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        // single line, vertically centred
        let y = area.y + area.height.saturating_sub(1) / 2;
        let line = Rect::new(area.x, y, area.width, 1);

        if !self.marquee.is_sliding() {
            draw_resting(buf, line, self.marquee);
            return;
        }

        for (instance, label) in self.marquee.instances() {
            let offset = self.marquee.host().offset_at(instance, self.now).round() as i32;
            draw_run(buf, line, offset, label.text(), label.style().style);
        }
    }
}

/// Draw the primary label at rest, honouring alignment and truncation
fn draw_resting(buf: &mut Buffer, line: Rect, marquee: &Marquee) {
    let label = marquee.label();
    let style = label.style();
    let text = label.text();
    let text_width = text.width();
    let width = line.width as usize;

    if text_width <= width {
        let free = (width - text_width) as i32;
        let offset = match style.alignment {
            Alignment::Left => 0,
            Alignment::Center => free / 2,
            Alignment::Right => free,
        };
        draw_run(buf, line, offset, text, style.style);
        return;
    }

    match style.truncation {
        Truncation::Clip => draw_run(buf, line, 0, text, style.style),
        Truncation::Ellipsis => {
            draw_run(buf, line, 0, &truncate_with_ellipsis(text, width), style.style)
        }
    }
}

/// Draw `text` starting `offset` cells from the left edge of `line`.
///
/// A wide glyph cut by either edge cannot be drawn in halves, so its visible
/// cells are filled with [`CLIPPED_GLYPH`] in the run's style.
fn draw_run(buf: &mut Buffer, line: Rect, offset: i32, text: &str, style: Style) {
    let right = line.width as i32;
    let mut col = offset;
    let mut glyph = [0u8; 4];

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        if col >= right {
            break;
        }
        if col >= 0 && col + w <= right {
            let x = line.x + col as u16;
            buf.set_stringn(x, line.y, ch.encode_utf8(&mut glyph), w as usize, style);
        } else {
            for cell in col.max(0)..(col + w).min(right) {
                let x = line.x + cell as u16;
                buf[(x, line.y)].set_char(CLIPPED_GLYPH).set_style(style);
            }
        }
        col += w;
    }
}

/// Shorten `text` to at most `width` cells, ending with "…"
pub fn truncate_with_ellipsis(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
