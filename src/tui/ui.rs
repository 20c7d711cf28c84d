use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::format::{
    format_humidity, format_inr, format_money, format_temperature, format_timestamp, icon_url,
};
use super::state::{AppState, Tab};
use crate::error::{ErrorCategory, RequestError};
use crate::models::{CurrencyConversion, Quote, WeatherSummary};

const BANNER_HEIGHT: u16 = 5;

/// Main render function: shell chrome plus the active tab's panel.
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    let title = Paragraph::new("InfoHub · Everyday essentials in one dashboard")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_tabs(f, chunks[1], state.active_tab);

    let description = Paragraph::new(state.active_tab.description())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(description, chunks[2]);

    match state.active_tab {
        Tab::Weather => render_weather(f, chunks[3], state),
        Tab::Currency => render_currency(f, chunks[3], state),
        Tab::Quotes => render_quotes(f, chunks[3], state),
    }

    let help = Paragraph::new(help_text(state.active_tab))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);

    render_status_bar(f, chunks[5], state);
}

fn render_tabs(f: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} ", t.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, area);
}

fn help_text(tab: Tab) -> &'static str {
    match tab {
        Tab::Weather => "Enter update | F5 refresh | Ctrl+R reset | Tab switch | Esc quit",
        Tab::Currency => "Enter convert | F5 refresh rates | Tab switch | Esc quit",
        Tab::Quotes => "Enter/n new quote | Tab switch | Esc quit",
    }
}

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

fn render_weather(f: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.weather;
    let request = panel.request_state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_input(
        f,
        chunks[0],
        " City (leave blank for default) ",
        panel.input(),
        "e.g., Hyderabad,IN",
    );

    let card = if request.is_loading() || request.error().is_some() {
        None
    } else {
        request.data().map(weather_card)
    };
    render_feedback(
        f,
        chunks[1],
        request.is_loading().then_some("Fetching weather details…"),
        panel.banner(),
        card,
    );
}

fn render_currency(f: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.currency;
    let request = panel.request_state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    render_input(f, chunks[0], " INR amount ", panel.input(), "Enter amount in INR");

    let note = match panel.keystroke_warning() {
        Some(warning) => Paragraph::new(warning).style(Style::default().fg(Color::Red)),
        None => Paragraph::new("Live conversion powered by the InfoHub currency API.")
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(note, chunks[1]);

    let card = if request.is_loading() || request.error().is_some() {
        None
    } else {
        request.data().map(currency_card)
    };
    render_feedback(
        f,
        chunks[2],
        request.is_loading().then_some("Updating exchange rates…"),
        panel.banner(),
        card,
    );
}

fn render_quotes(f: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.quotes;
    let request = panel.request_state();

    let card = if request.is_loading() || request.error().is_some() {
        None
    } else {
        request.data().map(quote_card)
    };
    render_feedback(
        f,
        area,
        request.is_loading().then_some("Finding something inspiring…"),
        panel.banner(),
        card,
    );
}

/// Single-line text input with a dimmed placeholder when empty.
fn render_input(f: &mut Frame, area: Rect, title: &str, value: &str, placeholder: &str) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let text = if value.is_empty() {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value.to_string()).style(Style::default().fg(Color::White))
    };
    f.render_widget(text.block(block), area);

    // Keep the cursor inside the border however long the value is.
    let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    let last_column = area.right().saturating_sub(2).max(area.x);
    let cursor_x = area.x.saturating_add(1).saturating_add(typed).min(last_column);
    let cursor_y = area.y.saturating_add(1);
    f.set_cursor_position((cursor_x, cursor_y));
}

/// Loading indicator, error banner and result card, stacked top to bottom.
fn render_feedback(
    f: &mut Frame,
    area: Rect,
    loading: Option<&str>,
    banner: Option<&RequestError>,
    card: Option<Vec<Line<'static>>>,
) {
    let mut constraints = Vec::new();
    if loading.is_some() {
        constraints.push(Constraint::Length(3));
    }
    if banner.is_some() {
        constraints.push(Constraint::Length(BANNER_HEIGHT));
    }
    constraints.push(Constraint::Min(0));

    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut slots = areas.iter().copied();

    if let Some(message) = loading {
        let slot = slots.next().unwrap_or(area);
        let widget = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, slot);
    }

    if let Some(error) = banner {
        let slot = slots.next().unwrap_or(area);
        render_banner(f, slot, error);
    }

    if let Some(lines) = card {
        let slot = slots.next().unwrap_or(area);
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, slot);
    }
}

fn render_banner(f: &mut Frame, area: Rect, error: &RequestError) {
    let color = match error.category() {
        ErrorCategory::User => Color::Yellow,
        ErrorCategory::System => Color::Red,
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("[{}] ", error.code()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(error.message().to_string()),
    ])];
    if let Some(hint) = error.hint() {
        lines.push(Line::styled(
            hint.to_string(),
            Style::default().fg(Color::Gray),
        ));
    }

    let banner = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", error.heading()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(banner, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let status_text = match state.latest_activity() {
        Some(activity) => format!(" Status: {activity} | {}", state.endpoint()),
        None => format!(" Connected to: {}", state.endpoint()),
    };

    let style = if state.is_active_loading() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };

    let status = Paragraph::new(status_text)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{text:<13}"), Style::default().fg(Color::DarkGray))
}

fn weather_card(summary: &WeatherSummary) -> Vec<Line<'static>> {
    let conditions = &summary.conditions;
    let mut lines = vec![
        Line::styled(
            format!("{}, {}", summary.location.name, summary.location.country),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Last updated: {}", format_timestamp(&summary.observed_at)),
            Style::default().fg(Color::DarkGray),
        ),
        Line::default(),
        Line::from(vec![
            label("Temperature"),
            Span::raw(format_temperature(
                conditions.temperature_c,
                conditions.temperature_f,
            )),
        ]),
        Line::from(vec![
            label("Condition"),
            Span::styled(
                conditions.description.clone(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            label("Humidity"),
            Span::raw(format_humidity(conditions.humidity)),
        ]),
    ];
    if let Some(icon) = &conditions.icon {
        lines.push(Line::from(vec![label("Icon"), Span::raw(icon_url(icon))]));
    }
    lines
}

fn currency_card(conversion: &CurrencyConversion) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            format!("₹ {}", format_inr(conversion.amount)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Rates refreshed: {}", format_timestamp(&conversion.fetched_at)),
            Style::default().fg(Color::DarkGray),
        ),
        Line::default(),
        Line::from(vec![
            label("USD"),
            Span::raw(format_money(conversion.rates.usd, "$")),
        ]),
        Line::from(vec![
            label("EUR"),
            Span::raw(format_money(conversion.rates.eur, "€")),
        ]),
    ]
}

fn quote_card(quote: &Quote) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            format!("“{}”", quote.text),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
        Line::default(),
        Line::styled(
            format!("— {}", quote.author),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if let Some(source) = &quote.source {
        lines.push(Line::styled(
            format!("Source: {source}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines
}
