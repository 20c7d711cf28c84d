use super::state::{AppState, Tab};

/// Run the active panel's queued request, if any.
///
/// Called once per frame after drawing, so a "loading" frame is on screen
/// while the blocking call is in flight. Panels of hidden tabs are left alone
/// until the user visits them.
pub fn process_state(state: &mut AppState) -> bool {
    let api = state.api.as_ref();
    match state.active_tab {
        Tab::Weather => state.weather.poll(api),
        Tab::Currency => state.currency.poll(api),
        Tab::Quotes => state.quotes.poll(api),
    }
}
