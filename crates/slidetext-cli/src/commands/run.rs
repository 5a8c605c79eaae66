use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use slidetext_core::AppConfig;
use slidetext_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    load_theme,
    widgets::{MarqueeWidget, StatusBarWidget},
};

/// Rows per marquee including its border
const ROW_HEIGHT: u16 = 3;

/// Command line values win over the config file
pub fn apply_overrides(
    mut config: AppConfig,
    velocity: Option<f64>,
    delay: Option<f64>,
    spacing: Option<f64>,
) -> AppConfig {
    if let Some(velocity) = velocity {
        config.marquee.velocity = velocity;
    }
    if let Some(delay) = delay {
        config.marquee.delay = delay;
    }
    if let Some(spacing) = spacing {
        config.marquee.spacing = spacing;
    }
    config
}

pub async fn run(config: Arc<AppConfig>, texts: Vec<String>) -> Result<()> {
    let theme = load_theme(&config.ui.theme);

    // Create app state before touching the terminal so bad input fails cleanly
    let mut app = App::new(config.clone(), theme, texts)?;
    app.start_all();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange, SetTitle("slidetext"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let event_handler = EventHandler::from_config(&config.ui);

    loop {
        // Draw UI; this is the layout pass that sizes every marquee
        terminal.draw(|frame| {
            let size = frame.area();

            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    app.rows
                        .iter()
                        .map(|_| Constraint::Length(ROW_HEIGHT))
                        .chain(std::iter::once(Constraint::Min(0))),
                )
                .split(main_layout[0]);

            let theme = app.theme.clone();
            for (i, (row, area)) in app.rows.iter_mut().zip(rows.iter()).enumerate() {
                MarqueeWidget::render(frame, *area, &mut row.marquee, &theme, i == app.selected);
            }
            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        // Deferred starts run after layout, resume notifications first
        app.poll();

        // Handle events (use faster tick rate while anything moves)
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.clear_status();
                    handle_action(app, handle_key_event(key));
                }
                AppEvent::Resize(w, h) => {
                    info!(w, h, "terminal resized");
                    app.restart_all();
                }
                AppEvent::Resumed => app.notify_resumed(),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_prev(),
        Action::ToggleSliding => app.toggle_selected(),
        Action::StartAll => app.start_all(),
        Action::Restart => app.restart_selected(),
        Action::CycleText => app.cycle_text(),
        Action::Faster => app.adjust_velocity(1),
        Action::Slower => app.adjust_velocity(-1),
        Action::None => {}
    }
}
