pub mod logging;
pub mod notify;
pub mod tui;
