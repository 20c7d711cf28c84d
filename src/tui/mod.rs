pub mod actions;
pub mod events;
pub mod format;
pub mod state;
pub mod terminal;
pub mod ui;

pub use actions::process_state;
pub use events::handle_event;
pub use state::{ActivityLog, AppState, Tab};
pub use terminal::{restore_terminal, setup_terminal};
pub use ui::render;
