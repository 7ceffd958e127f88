//! Zustands-Module der Anwendung.

mod app_state;
mod sketch;

pub use app_state::AppState;
pub use sketch::SketchState;
