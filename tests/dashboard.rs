//! The terminal shell: key handling, polling and what ends up on screen.

mod common;

use common::{client_error, sample_conversion, ScriptedApi, SharedApi};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use infohub::tui::format::{
    format_humidity, format_inr, format_money, format_temperature, format_timestamp, icon_url,
};
use infohub::tui::{handle_event, process_state, render, AppState, Tab};
use infohub::{ErrorCode, DEFAULT_BASE_URL};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};

fn app(api: ScriptedApi) -> (AppState, SharedApi) {
    let shared = SharedApi::new(api);
    let state = AppState::new(Box::new(shared.clone()), DEFAULT_BASE_URL);
    (state, shared)
}

fn press(state: &mut AppState, code: KeyCode) {
    handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), state);
}

fn press_ctrl(state: &mut AppState, c: char) {
    handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        state,
    );
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

/// Draw one frame and return the screen as text, one line per row.
fn draw(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|f| render(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn tab_keys_cycle_through_panels() {
    let (mut state, _) = app(ScriptedApi::new());
    assert_eq!(state.active_tab, Tab::Weather);

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.active_tab, Tab::Currency);
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.active_tab, Tab::Quotes);
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.active_tab, Tab::Weather);

    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.active_tab, Tab::Quotes);

    press(&mut state, KeyCode::F(2));
    assert_eq!(state.active_tab, Tab::Currency);
    press(&mut state, KeyCode::F(1));
    assert_eq!(state.active_tab, Tab::Weather);
}

#[test]
fn escape_and_ctrl_c_quit() {
    let (mut state, _) = app(ScriptedApi::new());
    press(&mut state, KeyCode::Esc);
    assert!(state.should_quit);

    let (mut state, _) = app(ScriptedApi::new());
    press_ctrl(&mut state, 'c');
    assert!(state.should_quit);
}

#[test]
fn key_releases_are_ignored() {
    let (mut state, _) = app(ScriptedApi::new());
    let release = KeyEvent::new_with_kind(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Release);
    handle_event(Event::Key(release), &mut state);
    assert_eq!(state.active_tab, Tab::Weather);
}

// ---------------------------------------------------------------------------
// Polling
// ---------------------------------------------------------------------------

#[test]
fn only_the_visible_panel_is_polled() {
    let (mut state, api) = app(ScriptedApi::new());

    assert!(process_state(&mut state));
    assert!(!process_state(&mut state));
    assert_eq!(api.0.weather_call_count(), 1);
    assert_eq!(api.0.currency_call_count(), 0);
    assert_eq!(*api.0.quote_calls.borrow(), 0);

    state.select_tab(Tab::Currency);
    process_state(&mut state);
    assert_eq!(api.0.currency_call_count(), 1);
    assert_eq!(*api.0.quote_calls.borrow(), 0);
}

#[test]
fn typing_and_enter_fetch_a_city() {
    let (mut state, api) = app(ScriptedApi::new());
    process_state(&mut state);

    type_text(&mut state, "Kochi");
    assert_eq!(state.weather.input(), "Kochi");
    press(&mut state, KeyCode::Backspace);
    type_text(&mut state, "i,IN");
    press(&mut state, KeyCode::Enter);
    process_state(&mut state);

    assert_eq!(
        api.0.weather_calls.borrow().last(),
        Some(&Some("Kochi,IN".to_string()))
    );
}

#[test]
fn ctrl_r_resets_the_weather_location() {
    let (mut state, api) = app(ScriptedApi::new());
    process_state(&mut state);
    type_text(&mut state, "Kochi");
    press(&mut state, KeyCode::Enter);
    process_state(&mut state);

    press_ctrl(&mut state, 'r');
    assert_eq!(state.weather.input(), "");
    process_state(&mut state);
    assert_eq!(api.0.weather_calls.borrow().last(), Some(&None));
}

#[test]
fn modified_letters_are_not_typed() {
    let (mut state, _) = app(ScriptedApi::new());
    process_state(&mut state);

    for c in ['a', 'w', 'u'] {
        press_ctrl(&mut state, c);
    }
    handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
        &mut state,
    );
    assert_eq!(state.weather.input(), "");

    state.select_tab(Tab::Currency);
    press_ctrl(&mut state, 'v');
    assert_eq!(state.currency.input(), "100");
    assert_eq!(state.currency.keystroke_warning(), None);

    // Shifted letters are still text.
    state.select_tab(Tab::Weather);
    handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT)),
        &mut state,
    );
    assert_eq!(state.weather.input(), "P");
}

#[test]
fn n_asks_for_a_new_quote_only_on_the_quotes_tab() {
    let (mut state, api) = app(ScriptedApi::new());
    process_state(&mut state);
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.weather.input(), "n");

    press(&mut state, KeyCode::F(3));
    process_state(&mut state);
    press(&mut state, KeyCode::Char('n'));
    process_state(&mut state);
    assert_eq!(*api.0.quote_calls.borrow(), 2);
}

#[test]
fn status_line_follows_request_activity() {
    let (mut state, _) = app(ScriptedApi::new().with_weather(Err(client_error(500, ""))));
    assert_eq!(state.latest_activity(), None);

    process_state(&mut state);
    assert_eq!(
        state.latest_activity(),
        Some(format!("Weather: failed ({})", ErrorCode::UpstreamError))
    );

    press(&mut state, KeyCode::F(5));
    assert!(state.is_active_loading());
    process_state(&mut state);
    assert_eq!(state.latest_activity().as_deref(), Some("Weather: updated"));
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn first_frame_shows_loading_and_endpoint() {
    let (state, _) = app(ScriptedApi::new());
    let screen = draw(&state);

    assert!(screen.contains("InfoHub"));
    assert!(screen.contains("Motivation"));
    assert!(screen.contains("Fetching weather details…"));
    assert!(screen.contains(&format!("Connected to: {DEFAULT_BASE_URL}")));
}

#[test]
fn currency_card_shows_converted_amounts() {
    let mut conversion = sample_conversion(100.0);
    conversion.rates.usd = 1.2;
    conversion.rates.eur = 1.1;
    let (mut state, _) = app(ScriptedApi::new().with_currency(Ok(conversion)));
    state.select_tab(Tab::Currency);
    process_state(&mut state);

    let screen = draw(&state);
    assert!(screen.contains("₹ 100"), "{screen}");
    assert!(screen.contains("$1.20"), "{screen}");
    assert!(screen.contains("€1.10"), "{screen}");
    assert!(screen.contains("Status: Currency: updated"), "{screen}");
}

#[test]
fn weather_card_shows_conditions() {
    let (mut state, _) = app(ScriptedApi::new());
    process_state(&mut state);

    let screen = draw(&state);
    assert!(screen.contains("Hyderabad, IN"), "{screen}");
    assert!(screen.contains("28.4°C / 83.1°F"), "{screen}");
    assert!(screen.contains("scattered clouds"), "{screen}");
    assert!(screen.contains("72%"), "{screen}");
}

#[test]
fn failures_render_a_banner_with_code_and_heading() {
    let (mut state, _) = app(ScriptedApi::new().with_weather(Err(client_error(503, ""))));
    process_state(&mut state);

    let screen = draw(&state);
    assert!(screen.contains("We ran into a problem"), "{screen}");
    assert!(screen.contains("[SYS-UPSTREAM-ERROR]"), "{screen}");
    assert!(
        screen.contains("The weather service is unavailable right now."),
        "{screen}"
    );
}

#[test]
fn rejected_amount_renders_a_user_banner() {
    let (mut state, _) = app(ScriptedApi::new());
    state.select_tab(Tab::Currency);
    process_state(&mut state);

    state.currency.set_input("-50");
    press(&mut state, KeyCode::Enter);

    let screen = draw(&state);
    assert!(screen.contains("Update the amount/location"), "{screen}");
    assert!(screen.contains("[USER-CURRENCY-AMOUNT-RANGE]"), "{screen}");
}

#[test]
fn cursor_stays_inside_a_very_long_input() {
    let (mut state, _) = app(ScriptedApi::new());
    process_state(&mut state);
    state.weather.set_input("a".repeat(70_000));

    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|f| render(f, &state)).unwrap();

    let cursor = terminal.get_cursor_position().unwrap();
    // The input box spans columns 1..=98 inside the one-cell margin.
    assert_eq!(cursor.x, 97);
}

#[test]
fn refused_keystrokes_show_a_warning() {
    let (mut state, _) = app(ScriptedApi::new());
    state.select_tab(Tab::Currency);
    process_state(&mut state);

    press(&mut state, KeyCode::Char('x'));
    assert_eq!(state.currency.input(), "100");

    let screen = draw(&state);
    assert!(
        screen.contains("Only numbers and decimal values are allowed."),
        "{screen}"
    );
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn inr_amounts_use_indian_grouping() {
    assert_eq!(format_inr(100.0), "100");
    assert_eq!(format_inr(2500.5), "2,500.5");
    assert_eq!(format_inr(1_234_567.0), "12,34,567");
    assert_eq!(format_inr(10_000_000.0), "1,00,00,000");
    assert_eq!(format_inr(0.125), "0.125");
}

#[test]
fn converted_amounts_have_two_decimals() {
    assert_eq!(format_money(1.2, "$"), "$1.20");
    assert_eq!(format_money(1234.5, "€"), "€1,234.50");
    assert_eq!(format_money(0.0, "$"), "$0.00");
}

#[test]
fn weather_values_are_formatted_for_display() {
    assert_eq!(format_temperature(28.4, 83.12), "28.4°C / 83.1°F");
    assert_eq!(format_humidity(Some(72.0)), "72%");
    assert_eq!(format_humidity(None), "—");
    assert_eq!(
        icon_url("03d"),
        "https://openweathermap.org/img/wn/03d@2x.png"
    );
}

#[test]
fn unparseable_timestamps_are_shown_verbatim() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert!(format_timestamp("2025-02-01T09:30:00.000Z").contains("2025"));
}
