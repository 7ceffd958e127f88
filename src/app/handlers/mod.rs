//! Feature-Handler: freie Funktionen, die Events auf den AppState anwenden.

pub mod draw_tool;
pub mod pointer;
