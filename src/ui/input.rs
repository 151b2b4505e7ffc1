use crate::ui::app::App;
use crate::ui::counter::{DECREMENT_LABEL, INCREMENT_LABEL};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            app.activate(INCREMENT_LABEL);
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
            app.activate(DECREMENT_LABEL);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{CounterReducer, CounterState, CounterStore};
    use crate::ui::counter::ConnectedCounter;
    use crossterm::event::KeyEventState;

    fn make_app() -> App {
        App::new(
            CounterStore::new(CounterReducer, None),
            ConnectedCounter::new(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn plus_and_up_increment() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('+')));
        handle_key(&mut app, press(KeyCode::Up));
        handle_key(&mut app, press(KeyCode::Char('=')));
        assert_eq!(app.store().state(), CounterState::new(3));
    }

    #[test]
    fn minus_and_down_decrement() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('-')));
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.store().state(), CounterState::new(-2));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let release = KeyEvent {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release);
        assert_eq!(app.store().state(), CounterState::new(0));
    }

    #[test]
    fn quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = make_app();
            handle_key(&mut app, key);
            assert!(app.should_quit());
        }
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.store().state(), CounterState::new(0));
        assert!(!app.should_quit());
    }
}
