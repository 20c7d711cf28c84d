use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{AppState, Tab};

/// Main event handler that dispatches to the active tab's handler.
pub fn handle_event(event: Event, state: &mut AppState) {
    let Event::Key(key_event) = event else {
        return;
    };
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('c') if ctrl => state.should_quit = true,
        KeyCode::Tab => state.next_tab(),
        KeyCode::BackTab => state.previous_tab(),
        KeyCode::F(1) => state.select_tab(Tab::Weather),
        KeyCode::F(2) => state.select_tab(Tab::Currency),
        KeyCode::F(3) => state.select_tab(Tab::Quotes),
        _ => match state.active_tab {
            Tab::Weather => handle_weather(key_event, state),
            Tab::Currency => handle_currency(key_event, state),
            Tab::Quotes => handle_quotes(key_event, state),
        },
    }
}

/// Whether a key carries a modifier that makes it a shortcut rather than text.
fn is_shortcut(event: &KeyEvent) -> bool {
    event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn handle_weather(event: KeyEvent, state: &mut AppState) {
    let panel = &mut state.weather;
    match event.code {
        KeyCode::Char('r') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            panel.reset();
        }
        KeyCode::Char(_) if is_shortcut(&event) => {}
        KeyCode::Char(c) => panel.push_char(c),
        KeyCode::Backspace => panel.pop_char(),
        KeyCode::Enter => {
            panel.submit();
        }
        KeyCode::F(5) => {
            panel.refresh();
        }
        _ => {}
    }
}

fn handle_currency(event: KeyEvent, state: &mut AppState) {
    let panel = &mut state.currency;
    match event.code {
        KeyCode::Char(_) if is_shortcut(&event) => {}
        KeyCode::Char(c) => {
            panel.push_char(c);
        }
        KeyCode::Backspace => panel.pop_char(),
        KeyCode::Enter => {
            panel.submit();
        }
        KeyCode::F(5) => {
            panel.refresh();
        }
        _ => {}
    }
}

fn handle_quotes(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Char(_) if is_shortcut(&event) => {}
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::F(5) => {
            state.quotes.next_quote();
        }
        _ => {}
    }
}
