use crate::config::UiConfig;
use crate::counter::CounterStore;
use crate::ui::app::App;
use crate::ui::counter::ConnectedCounter;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::render::{draw_hints, draw_in, tree_lines};
use ratatui::Frame;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Mount the connected counter against `store` in the real terminal and run
/// until the user quits.
pub fn run(store: CounterStore, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = crate::ui::terminal_guard::setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(store, ConnectedCounter::new());
    let events = EventHandler::new(tick_rate);
    tracing::info!(state = ?app.store().state(), "interactive session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(
        state = ?app.store().state(),
        dispatches = app.store().dispatch_count(),
        "interactive session ended"
    );
    drop(guard);
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let (body, footer) = layout_regions(frame.area());
    let tree = app.tree();

    let lines = tree_lines(&tree);
    let content_width = lines.iter().map(|line| line.width()).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(6);
    let height = (lines.len() as u16).saturating_add(2);
    draw_in(frame, &tree, centered_rect_by_size(body, width, height));

    draw_hints(frame, footer, app.last_error());
}
