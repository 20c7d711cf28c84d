use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use clap::ValueEnum;

use crate::panels::{CurrencyPanel, QuotesPanel, WeatherPanel};
use crate::request::RequestEvent;
use crate::InfoHubApi;

/// The dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    Weather,
    Currency,
    Quotes,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Weather, Tab::Currency, Tab::Quotes];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Weather => "Weather",
            Tab::Currency => "Currency",
            Tab::Quotes => "Motivation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tab::Weather => "Real-time weather snapshot for the configured city.",
            Tab::Currency => "Convert INR to USD and EUR using live exchange rates.",
            Tab::Quotes => "Get a motivational quote to keep momentum going.",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Weather => 0,
            Tab::Currency => 1,
            Tab::Quotes => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Latest request activity across all panels, fed by request observers.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    latest: Rc<RefCell<Option<String>>>,
}

impl ActivityLog {
    pub fn latest(&self) -> Option<String> {
        self.latest.borrow().clone()
    }

    /// An observer that describes events of `tab`'s request.
    pub fn recorder(&self, tab: Tab) -> impl FnMut(RequestEvent) + 'static {
        let latest = Rc::clone(&self.latest);
        move |event| {
            let label = tab.label();
            let line = match event {
                RequestEvent::Started(_) => format!("{label}: loading"),
                RequestEvent::Succeeded(_) => format!("{label}: updated"),
                RequestEvent::Failed(_, code) => format!("{label}: failed ({code})"),
                RequestEvent::Discarded(_) => format!("{label}: ignored a stale response"),
            };
            *latest.borrow_mut() = Some(line);
        }
    }
}

/// Main application state.
pub struct AppState {
    /// Tab whose panel is shown and polled.
    pub active_tab: Tab,
    /// Backend every panel fetches from.
    pub(crate) api: Box<dyn InfoHubApi>,
    /// Base URL shown in the status bar.
    pub(crate) endpoint: String,
    pub weather: WeatherPanel,
    pub currency: CurrencyPanel,
    pub quotes: QuotesPanel,
    pub(crate) activity: ActivityLog,
    /// Should the application quit?
    pub should_quit: bool,
}

impl AppState {
    pub fn new(api: Box<dyn InfoHubApi>, endpoint: impl Into<String>) -> Self {
        let activity = ActivityLog::default();

        let mut weather = WeatherPanel::new();
        weather
            .request_state_mut()
            .subscribe(activity.recorder(Tab::Weather));
        let mut currency = CurrencyPanel::new();
        currency
            .request_state_mut()
            .subscribe(activity.recorder(Tab::Currency));
        let mut quotes = QuotesPanel::new();
        quotes
            .request_state_mut()
            .subscribe(activity.recorder(Tab::Quotes));

        Self {
            active_tab: Tab::Weather,
            api,
            endpoint: endpoint.into(),
            weather,
            currency,
            quotes,
            activity,
            should_quit: false,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(tab = %tab, "switching tab");
        }
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.active_tab.previous());
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn latest_activity(&self) -> Option<String> {
        self.activity.latest()
    }

    /// Whether the active panel is waiting for its request to finish.
    pub fn is_active_loading(&self) -> bool {
        match self.active_tab {
            Tab::Weather => self.weather.request_state().is_loading(),
            Tab::Currency => self.currency.request_state().is_loading(),
            Tab::Quotes => self.quotes.request_state().is_loading(),
        }
    }
}
