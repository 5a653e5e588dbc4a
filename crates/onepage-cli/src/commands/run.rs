use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tracing::info;

use onepage_core::{AppConfig, Document};
use onepage_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    theme::Theme,
    widgets::{DocumentWidget, MenuWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let document = Document::parse(&text);
    info!(
        sections = document.sections().len(),
        rows = document.total_height(),
        "document loaded"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("onepage")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), Theme::default(), document);
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let mut initialized = false;

    loop {
        terminal.draw(|frame| ui(frame, app))?;

        // pane sizes are only known after the first draw
        if !initialized {
            app.init_active();
            initialized = true;
        }

        let fast = app.needs_fast_update();
        match events.next(fast)? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.apply(action);
            }
            Some(AppEvent::Mouse(mouse)) => {
                let action = handle_mouse_event(mouse);
                app.apply(action);
            }
            Some(AppEvent::Resize(_, _)) => {}
            Some(AppEvent::Tick) => app.on_tick(),
            None => {}
        }

        if app.needs_fast_update() {
            // keep animations advancing between input events
            app.on_tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Layout: menu pane on the left, document on the right, one status row
/// at the bottom. The inner pane rects are stored on the app for
/// hit-testing.
fn ui(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.config.ui.menu_width),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    app.menu_area = inset(panes[0], 1);
    app.doc_area = inset(panes[1], 1);

    MenuWidget::render(frame, app.menu_area, app);
    DocumentWidget::render(frame, app.doc_area, app);
    StatusBarWidget::render(frame, rows[1], app);
}

/// Shrink a rect by a uniform margin.
fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}
