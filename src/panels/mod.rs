//! One self-contained feature per dashboard tab.
//!
//! Each panel combines a validator, a [`RequestState`](crate::RequestState)
//! and the [`InfoHubApi`](crate::InfoHubApi). Panels only queue requests; the
//! shell executes them with `poll` once the loading frame has been drawn.

pub mod currency;
pub mod quotes;
pub mod weather;

pub use currency::CurrencyPanel;
pub use quotes::QuotesPanel;
pub use weather::WeatherPanel;
